use crate::engine::MAX_RECOMMENDATIONS;
use crate::error::AdvisorError;
use crate::types::soil::SoilType;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisorConfig {
    pub recommend: Option<RecommendConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendConfig {
    pub soil: Option<String>,
    pub format: Option<String>,
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl AdvisorConfig {
    pub fn default_soil(&self) -> Option<&str> {
        self.recommend
            .as_ref()
            .and_then(|recommend| recommend.soil.as_deref())
    }

    pub fn format(&self) -> &str {
        self.recommend
            .as_ref()
            .and_then(|recommend| recommend.format.as_deref())
            .unwrap_or("md")
    }

    pub fn top(&self) -> usize {
        self.recommend
            .as_ref()
            .and_then(|recommend| recommend.top)
            .unwrap_or(MAX_RECOMMENDATIONS)
    }

    pub fn catalog_path(&self) -> Option<&PathBuf> {
        self.catalog.as_ref().and_then(|catalog| catalog.path.as_ref())
    }

    pub fn validate(&self) -> Result<(), AdvisorError> {
        if let Some(soil) = self.default_soil() {
            soil.parse::<SoilType>().map_err(|_| {
                AdvisorError::ConfigParse(format!("unsupported recommend.soil: {soil}"))
            })?;
        }

        if !matches!(self.format(), "md" | "json") {
            return Err(AdvisorError::ConfigParse(format!(
                "unsupported recommend.format: {}",
                self.format()
            )));
        }

        let top = self.top();
        if !(1..=MAX_RECOMMENDATIONS).contains(&top) {
            return Err(AdvisorError::ConfigParse(format!(
                "recommend.top must be between 1 and {MAX_RECOMMENDATIONS} (found {top})"
            )));
        }

        if let Some(path) = self.catalog_path() {
            if path.as_os_str().is_empty() {
                return Err(AdvisorError::ConfigParse(
                    "catalog.path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: AdvisorConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.default_soil(), None);
        assert_eq!(cfg.format(), "md");
        assert_eq!(cfg.top(), MAX_RECOMMENDATIONS);
        assert!(cfg.catalog_path().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[recommend]
soil = "sandy"
format = "json"
top = 3

[catalog]
path = "crops.toml"
"#;
        let cfg: AdvisorConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.default_soil(), Some("sandy"));
        assert_eq!(cfg.format(), "json");
        assert_eq!(cfg.top(), 3);
        assert_eq!(cfg.catalog_path(), Some(&PathBuf::from("crops.toml")));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_soil() {
        let cfg: AdvisorConfig = toml::from_str(
            r#"
[recommend]
soil = "peat"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported recommend.soil: peat"));
    }

    #[test]
    fn validate_rejects_unknown_format() {
        let cfg: AdvisorConfig = toml::from_str(
            r#"
[recommend]
format = "sarif"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported recommend.format"));
    }

    #[test]
    fn validate_rejects_top_out_of_range() {
        for top in [0, 7] {
            let cfg: AdvisorConfig = toml::from_str(&format!("[recommend]\ntop = {top}\n"))
                .expect("config should parse");
            let err = cfg.validate().expect_err("validation should fail");
            assert!(err.to_string().contains("recommend.top must be between 1 and 6"));
        }
    }
}
