use crate::types::crop::{CropProfile, Range};
use crate::types::soil::SoilType;

pub const TEMPERATURE_WEIGHT: f64 = 40.0;
pub const HUMIDITY_WEIGHT: f64 = 30.0;
pub const SOIL_WEIGHT: f64 = 30.0;
pub const SOIL_PARTIAL_CREDIT: f64 = 10.0;

/// Points lost per degree C outside the ideal temperature range.
pub const TEMPERATURE_PENALTY: f64 = 2.0;
/// Points lost per percentage point outside the ideal humidity range.
pub const HUMIDITY_PENALTY: f64 = 0.5;

fn interval_term(range: &Range, value: f64, weight: f64, penalty: f64) -> f64 {
    if range.contains(value) {
        weight
    } else {
        (weight - range.distance(value) * penalty).max(0.0)
    }
}

pub fn temperature_term(crop: &CropProfile, avg_temp: f64) -> f64 {
    interval_term(
        &crop.ideal_temperature,
        avg_temp,
        TEMPERATURE_WEIGHT,
        TEMPERATURE_PENALTY,
    )
}

pub fn humidity_term(crop: &CropProfile, avg_humidity: f64) -> f64 {
    interval_term(
        &crop.ideal_humidity,
        avg_humidity,
        HUMIDITY_WEIGHT,
        HUMIDITY_PENALTY,
    )
}

pub fn soil_term(crop: &CropProfile, soil: SoilType) -> f64 {
    if crop.favors(soil) {
        SOIL_WEIGHT
    } else {
        SOIL_PARTIAL_CREDIT
    }
}
