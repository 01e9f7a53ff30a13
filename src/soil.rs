use crate::types::soil::{Drainage, SoilClassification, SoilType};
use serde::Serialize;

/// A selectable soil with its typical pH and drainage.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SoilPreset {
    #[serde(rename = "type")]
    pub soil_type: SoilType,
    pub name: &'static str,
    pub description: &'static str,
    pub ph: f64,
    pub drainage: Drainage,
}

impl SoilPreset {
    pub fn classification(&self) -> SoilClassification {
        SoilClassification {
            soil_type: self.soil_type,
            ph: self.ph,
            drainage: self.drainage,
        }
    }
}

pub const PRESETS: [SoilPreset; 4] = [
    SoilPreset {
        soil_type: SoilType::Clay,
        name: "Clay Soil",
        description: "Heavy, sticky soil with good nutrient retention but poor drainage",
        ph: 6.5,
        drainage: Drainage::Poor,
    },
    SoilPreset {
        soil_type: SoilType::Loamy,
        name: "Loamy Soil",
        description: "Well-balanced soil with good drainage and nutrient retention",
        ph: 6.8,
        drainage: Drainage::Good,
    },
    SoilPreset {
        soil_type: SoilType::Sandy,
        name: "Sandy Soil",
        description: "Light, well-draining soil but requires frequent watering",
        ph: 6.2,
        drainage: Drainage::Good,
    },
    SoilPreset {
        soil_type: SoilType::Silty,
        name: "Silty Soil",
        description: "Smooth soil with good water retention and moderate drainage",
        ph: 6.6,
        drainage: Drainage::Moderate,
    },
];

pub fn preset(soil_type: SoilType) -> &'static SoilPreset {
    match soil_type {
        SoilType::Clay => &PRESETS[0],
        SoilType::Loamy => &PRESETS[1],
        SoilType::Sandy => &PRESETS[2],
        SoilType::Silty => &PRESETS[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_soil_type_has_matching_preset() {
        for soil_type in SoilType::ALL {
            assert_eq!(preset(soil_type).soil_type, soil_type);
        }
    }

    #[test]
    fn loamy_preset_classification() {
        let soil = preset(SoilType::Loamy).classification();
        assert_eq!(soil.ph, 6.8);
        assert_eq!(soil.drainage, Drainage::Good);
    }
}
