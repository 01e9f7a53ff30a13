use crate::error::AdvisorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Loamy,
    Sandy,
    Silty,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Sandy,
        SoilType::Silty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Loamy => "loamy",
            SoilType::Sandy => "sandy",
            SoilType::Silty => "silty",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
            SoilType::Sandy => "Sandy",
            SoilType::Silty => "Silty",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SoilType::ALL
            .into_iter()
            .find(|soil| soil.as_str() == normalized)
            .ok_or_else(|| {
                AdvisorError::InvalidInput(format!(
                    "unrecognized soil type '{}' (expected one of: clay, loamy, sandy, silty)",
                    s.trim()
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drainage {
    Poor,
    Moderate,
    Good,
}

impl Drainage {
    pub fn label(&self) -> &'static str {
        match self {
            Drainage::Poor => "Poor",
            Drainage::Moderate => "Moderate",
            Drainage::Good => "Good",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilClassification {
    #[serde(rename = "type")]
    pub soil_type: SoilType,
    pub ph: f64,
    pub drainage: Drainage,
}
