use serde::{Deserialize, Serialize};
use std::fmt;

use super::soil::SoilType;

/// Closed interval `[min, max]`. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance from `value` to the nearer bound.
    pub fn distance(&self, value: f64) -> f64 {
        (value - self.min).abs().min((value - self.max).abs())
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

impl WaterRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            WaterRequirement::Low => "Low",
            WaterRequirement::Medium => "Medium",
            WaterRequirement::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub ideal_temperature: Range,
    pub ideal_humidity: Range,
    pub soil_affinity: Vec<SoilType>,
    pub water_requirement: WaterRequirement,
    pub growing_season: String,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl CropProfile {
    pub fn favors(&self, soil: SoilType) -> bool {
        self.soil_affinity.contains(&soil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_contains_is_inclusive_at_both_bounds() {
        let range = Range::new(18.0, 26.0);
        assert!(range.contains(18.0));
        assert!(range.contains(26.0));
        assert!(!range.contains(17.99));
        assert!(!range.contains(26.01));
    }

    #[test]
    fn range_distance_uses_nearer_bound() {
        let range = Range::new(60.0, 70.0);
        assert_eq!(range.distance(50.0), 10.0);
        assert_eq!(range.distance(85.0), 15.0);
    }

    #[test]
    fn range_rejects_inverted_or_non_finite_bounds() {
        assert!(Range::new(5.0, 5.0).is_well_formed());
        assert!(!Range::new(6.0, 5.0).is_well_formed());
        assert!(!Range::new(f64::NAN, 5.0).is_well_formed());
    }

    #[test]
    fn crop_profile_parses_from_toml() {
        let crop: CropProfile = toml::from_str(
            r#"
name = "Okra"
description = "Heat-loving pod vegetable"
ideal_temperature = { min = 24, max = 32 }
ideal_humidity = { min = 55, max = 80 }
soil_affinity = ["sandy", "loamy"]
water_requirement = "low"
growing_season = "Summer"
"#,
        )
        .expect("crop should parse");

        assert_eq!(crop.name, "Okra");
        assert!(crop.favors(SoilType::Sandy));
        assert!(!crop.favors(SoilType::Clay));
        assert_eq!(crop.water_requirement, WaterRequirement::Low);
        assert!(crop.benefits.is_empty());
    }
}
