use crate::types::report::{Recommendation, ScoredCrop};
use crate::types::soil::SoilClassification;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    avg_temp: f64,
    avg_humidity: f64,
    soil: &'a SoilClassification,
    crops: &'a [ScoredCrop],
}

pub fn to_json(report: &Recommendation, top: usize) -> Result<String, serde_json::Error> {
    let document = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        avg_temp: report.avg_temp,
        avg_humidity: report.avg_humidity,
        soil: &report.soil,
        crops: report.top(top),
    };
    serde_json::to_string_pretty(&document)
}
