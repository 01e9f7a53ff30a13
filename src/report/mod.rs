pub mod json;
pub mod md;

use crate::error::{AdvisorError, Result};
use crate::soil::SoilPreset;
use crate::types::crop::CropProfile;
use crate::types::report::Recommendation;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl FromStr for OutputFormat {
    type Err = AdvisorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "md" => Ok(OutputFormat::Md),
            other => Err(AdvisorError::ConfigParse(format!(
                "unsupported output format: {other}"
            ))),
        }
    }
}

/// `top` only limits what is shown; the ranking itself is already bounded.
pub fn render(report: &Recommendation, top: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report, top).map_err(AdvisorError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, top)),
    }
}

pub fn render_catalog(catalog: &[CropProfile], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(catalog).map_err(AdvisorError::Json),
        OutputFormat::Md => Ok(md::catalog_markdown(catalog)),
    }
}

pub fn render_soils(presets: &[SoilPreset], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(presets).map_err(AdvisorError::Json),
        OutputFormat::Md => Ok(md::soils_markdown(presets)),
    }
}
