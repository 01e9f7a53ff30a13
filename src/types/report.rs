use serde::Serialize;
use std::fmt;

use super::crop::CropProfile;
use super::soil::SoilClassification;

pub type Score = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Fair Match")]
    Fair,
}

impl ScoreBand {
    pub const EXCELLENT_THRESHOLD: Score = 80;
    pub const GOOD_THRESHOLD: Score = 60;

    pub fn for_score(score: Score) -> Self {
        if score >= Self::EXCELLENT_THRESHOLD {
            ScoreBand::Excellent
        } else if score >= Self::GOOD_THRESHOLD {
            ScoreBand::Good
        } else {
            ScoreBand::Fair
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent Match",
            ScoreBand::Good => "Good Match",
            ScoreBand::Fair => "Fair Match",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCrop {
    #[serde(flatten)]
    pub profile: CropProfile,
    pub score: Score,
    pub band: ScoreBand,
}

impl ScoredCrop {
    pub fn new(profile: CropProfile, score: Score) -> Self {
        Self {
            profile,
            score,
            band: ScoreBand::for_score(score),
        }
    }
}

/// Output of one scoring call: the derived averages plus the ranked crops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub avg_temp: f64,
    pub avg_humidity: f64,
    pub soil: SoilClassification,
    pub crops: Vec<ScoredCrop>,
}

impl Recommendation {
    pub fn top(&self, limit: usize) -> &[ScoredCrop] {
        &self.crops[..limit.min(self.crops.len())]
    }
}
