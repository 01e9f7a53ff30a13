pub mod terms;

use crate::error::{AdvisorError, Result};
use crate::types::crop::CropProfile;
use crate::types::report::{Recommendation, Score, ScoredCrop};
use crate::types::soil::SoilClassification;
use crate::types::weather::WeatherSummary;

pub const MAX_RECOMMENDATIONS: usize = 6;

/// Mean daily temperature and mean humidity over the forecast.
pub fn averages(weather: &WeatherSummary) -> Result<(f64, f64)> {
    if weather.is_empty() {
        return Err(AdvisorError::InvalidInput(
            "weather forecast must contain at least one day".to_string(),
        ));
    }

    for day in &weather.days {
        if !(day.temp_max.is_finite() && day.temp_min.is_finite() && day.humidity.is_finite()) {
            return Err(AdvisorError::InvalidInput(format!(
                "forecast for {} contains a non-finite reading",
                day.date
            )));
        }
    }

    let days = weather.days.len() as f64;
    let avg_temp = weather.days.iter().map(|day| day.mean_temp()).sum::<f64>() / days;
    let avg_humidity = weather.days.iter().map(|day| day.humidity).sum::<f64>() / days;
    Ok((avg_temp, avg_humidity))
}

/// Score one crop. Each term is clamped on its own, never the total.
pub fn score_crop(
    crop: &CropProfile,
    avg_temp: f64,
    avg_humidity: f64,
    soil: &SoilClassification,
) -> Score {
    let temperature = terms::temperature_term(crop, avg_temp);
    let humidity = terms::humidity_term(crop, avg_humidity);
    let soil_fit = terms::soil_term(crop, soil.soil_type);
    let total = (temperature + humidity + soil_fit).round();
    tracing::debug!(
        crop = %crop.name,
        temperature,
        humidity,
        soil = soil_fit,
        total,
        "scored crop"
    );
    total.clamp(0.0, 100.0) as Score
}

/// Rank `catalog` against the forecast and soil, best first, at most
/// [`MAX_RECOMMENDATIONS`] entries. Equal scores keep catalog order.
pub fn score(
    weather: &WeatherSummary,
    soil: &SoilClassification,
    catalog: &[CropProfile],
) -> Result<Recommendation> {
    if catalog.is_empty() {
        return Err(AdvisorError::InvalidInput(
            "crop catalog must not be empty".to_string(),
        ));
    }
    let (avg_temp, avg_humidity) = averages(weather)?;

    let mut crops = catalog
        .iter()
        .map(|crop| {
            ScoredCrop::new(
                crop.clone(),
                score_crop(crop, avg_temp, avg_humidity, soil),
            )
        })
        .collect::<Vec<_>>();
    crops.sort_by(|a, b| b.score.cmp(&a.score));
    crops.truncate(MAX_RECOMMENDATIONS);

    tracing::info!(
        avg_temp,
        avg_humidity,
        soil = %soil.soil_type,
        candidates = catalog.len(),
        best = crops.first().map(|crop| crop.profile.name.as_str()).unwrap_or("none"),
        "ranked crops"
    );

    Ok(Recommendation {
        avg_temp,
        avg_humidity,
        soil: *soil,
        crops,
    })
}
