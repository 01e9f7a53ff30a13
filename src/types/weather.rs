use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One forecast day. Celsius and percent relative humidity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity: f64,
    #[serde(default, alias = "rain")]
    pub precipitation: f64,
    #[serde(default, alias = "description")]
    pub condition_text: String,
}

impl DailyRecord {
    pub fn mean_temp(&self) -> f64 {
        (self.temp_max + self.temp_min) / 2.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub days: Vec<DailyRecord>,
}

impl WeatherSummary {
    pub fn new(days: Vec<DailyRecord>) -> Self {
        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
