use crate::error::{AdvisorError, Result};
use crate::types::crop::{CropProfile, Range, WaterRequirement};
use crate::types::soil::SoilType;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    crop: Vec<CropProfile>,
}

/// The built-in catalog, constructed on first use and never mutated.
pub fn builtin() -> &'static [CropProfile] {
    static CATALOG: OnceLock<Vec<CropProfile>> = OnceLock::new();
    CATALOG.get_or_init(builtin_crops)
}

pub fn load_catalog(path: &Path) -> Result<Vec<CropProfile>> {
    if !path.exists() {
        return Err(AdvisorError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&content)
        .map_err(|e| AdvisorError::InvalidCatalog(format!("{}: {}", path.display(), e)))?;
    validate_catalog(&file.crop)?;
    tracing::info!(path = %path.display(), crops = file.crop.len(), "loaded crop catalog");
    Ok(file.crop)
}

pub fn validate_catalog(catalog: &[CropProfile]) -> Result<()> {
    if catalog.is_empty() {
        return Err(AdvisorError::InvalidCatalog(
            "catalog must contain at least one crop".to_string(),
        ));
    }

    let mut seen = HashSet::<&str>::new();
    for crop in catalog {
        let name = crop.name.trim();
        if name.is_empty() {
            return Err(AdvisorError::InvalidCatalog(
                "crop names must be non-empty".to_string(),
            ));
        }
        if !seen.insert(name) {
            return Err(AdvisorError::InvalidCatalog(format!(
                "duplicate crop name: {name}"
            )));
        }
        if !crop.ideal_temperature.is_well_formed() {
            return Err(AdvisorError::InvalidCatalog(format!(
                "{name}: ideal_temperature must satisfy min <= max (found {})",
                crop.ideal_temperature
            )));
        }
        if !crop.ideal_humidity.is_well_formed() {
            return Err(AdvisorError::InvalidCatalog(format!(
                "{name}: ideal_humidity must satisfy min <= max (found {})",
                crop.ideal_humidity
            )));
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn crop(
    name: &str,
    description: &str,
    icon: &str,
    temperature: (f64, f64),
    humidity: (f64, f64),
    soil_affinity: &[SoilType],
    water_requirement: WaterRequirement,
    growing_season: &str,
    benefits: &[&str],
) -> CropProfile {
    CropProfile {
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        ideal_temperature: Range::new(temperature.0, temperature.1),
        ideal_humidity: Range::new(humidity.0, humidity.1),
        soil_affinity: soil_affinity.to_vec(),
        water_requirement,
        growing_season: growing_season.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
    }
}

fn builtin_crops() -> Vec<CropProfile> {
    use SoilType::{Clay, Loamy, Sandy, Silty};
    use WaterRequirement::{High, Medium};

    vec![
        crop(
            "Tomatoes",
            "Versatile fruit vegetable, rich in vitamins and antioxidants",
            "🍅",
            (18.0, 26.0),
            (60.0, 70.0),
            &[Loamy, Sandy],
            Medium,
            "Spring to Summer",
            &["High in Vitamin C", "Rich in lycopene", "Good market value"],
        ),
        crop(
            "Lettuce",
            "Cool-season leafy green, perfect for salads",
            "🥬",
            (10.0, 20.0),
            (50.0, 70.0),
            &[Loamy, Silty],
            Medium,
            "Spring and Fall",
            &["Fast growing", "Multiple harvests", "Low maintenance"],
        ),
        crop(
            "Carrots",
            "Root vegetable rich in beta-carotene",
            "🥕",
            (15.0, 25.0),
            (45.0, 65.0),
            &[Sandy, Loamy],
            Medium,
            "Spring to Fall",
            &["Long storage life", "High nutritional value", "Good for deep soil"],
        ),
        crop(
            "Spinach",
            "Nutrient-dense leafy green vegetable",
            "🍃",
            (8.0, 18.0),
            (50.0, 70.0),
            &[Loamy, Silty],
            Medium,
            "Cool seasons",
            &["High in iron", "Fast growing", "Cold tolerant"],
        ),
        crop(
            "Peppers",
            "Warm-season vegetables with various heat levels",
            "🌶️",
            (20.0, 30.0),
            (60.0, 80.0),
            &[Loamy, Sandy],
            Medium,
            "Summer",
            &["High in Vitamin C", "Long harvest period", "Diverse varieties"],
        ),
        crop(
            "Potatoes",
            "Staple root vegetable with high yield potential",
            "🥔",
            (15.0, 22.0),
            (70.0, 80.0),
            &[Sandy, Loamy],
            Medium,
            "Spring to Summer",
            &["High caloric value", "Good storage crop", "Versatile cooking uses"],
        ),
        crop(
            "Beans",
            "Nitrogen-fixing legumes that improve soil",
            "🫘",
            (18.0, 24.0),
            (60.0, 70.0),
            &[Loamy, Clay],
            Medium,
            "Spring to Summer",
            &["Nitrogen fixation", "High protein", "Soil improvement"],
        ),
        crop(
            "Cabbage",
            "Cool-season brassica with good storage potential",
            "🥬",
            (12.0, 20.0),
            (60.0, 75.0),
            &[Loamy, Clay],
            High,
            "Cool seasons",
            &["Long storage life", "High yield", "Cold tolerant"],
        ),
    ]
}
