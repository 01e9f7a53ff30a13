use crate::error::{AdvisorError, Result};
use crate::types::weather::{DailyRecord, WeatherSummary};
use serde_json::Value;
use std::path::Path;

/// Accepts a bare array of daily records or an object with a `forecast` array.
/// Decoding failures name the offending record and keep serde's message.
pub fn parse_forecast(content: &str) -> Result<WeatherSummary> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| AdvisorError::InvalidInput(format!("forecast is not valid JSON: {e}")))?;

    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("forecast") {
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(AdvisorError::InvalidInput(
                    "forecast field must be an array of daily records".to_string(),
                ))
            }
            None => {
                return Err(AdvisorError::InvalidInput(
                    "forecast object is missing the `forecast` array".to_string(),
                ))
            }
        },
        _ => {
            return Err(AdvisorError::InvalidInput(
                "forecast must be an array of daily records or an object with a `forecast` array"
                    .to_string(),
            ))
        }
    };

    if records.is_empty() {
        return Err(AdvisorError::InvalidInput(
            "weather forecast must contain at least one day".to_string(),
        ));
    }

    let days = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<DailyRecord>(record).map_err(|e| {
                AdvisorError::InvalidInput(format!("forecast record {}: {e}", index + 1))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(WeatherSummary::new(days))
}

pub fn read_forecast(path: &Path) -> Result<WeatherSummary> {
    if !path.exists() {
        return Err(AdvisorError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let weather = parse_forecast(&content)?;
    tracing::debug!(path = %path.display(), days = weather.days.len(), "read forecast");
    Ok(weather)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array_with_provider_field_names() {
        let weather = parse_forecast(
            r#"[
  {"date": "2024-05-01", "temp_max": 25.0, "temp_min": 15.0, "humidity": 60, "rain": 1.2, "description": "light rain"},
  {"date": "2024-05-02", "temp_max": 27.0, "temp_min": 17.0, "humidity": 70}
]"#,
        )
        .expect("forecast should parse");

        assert_eq!(weather.days.len(), 2);
        assert_eq!(weather.days[0].precipitation, 1.2);
        assert_eq!(weather.days[0].condition_text, "light rain");
        assert_eq!(weather.days[1].precipitation, 0.0);
    }

    #[test]
    fn parses_wrapped_forecast_and_ignores_current_block() {
        let weather = parse_forecast(
            r#"{
  "current": {"temp": 21.0, "humidity": 64, "description": "clear sky"},
  "forecast": [
    {"date": "2024-05-01", "temp_max": 24.0, "temp_min": 20.0, "humidity": 65}
  ]
}"#,
        )
        .expect("forecast should parse");

        assert_eq!(weather.days.len(), 1);
        assert_eq!(weather.days[0].mean_temp(), 22.0);
    }

    #[test]
    fn rejects_empty_forecast() {
        let err = parse_forecast(r#"{"forecast": []}"#).expect_err("empty forecast should fail");
        assert!(matches!(err, AdvisorError::InvalidInput(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_forecast("{not json").expect_err("malformed json should fail");
        assert!(matches!(err, AdvisorError::InvalidInput(_)));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn missing_field_error_names_field_and_record() {
        let err = parse_forecast(
            r#"[
  {"date": "2024-05-01", "temp_max": 20, "temp_min": 12, "humidity": 50},
  {"date": "2024-05-02", "temp_max": 20, "humidity": 50}
]"#,
        )
        .expect_err("record without temp_min should fail");

        assert!(matches!(err, AdvisorError::InvalidInput(_)));
        let message = err.to_string();
        assert!(message.contains("forecast record 2"));
        assert!(message.contains("missing field `temp_min`"));
    }

    #[test]
    fn bad_date_error_keeps_serde_message() {
        let err = parse_forecast(
            r#"{"forecast": [{"date": "May 1", "temp_max": 20, "temp_min": 12, "humidity": 50}]}"#,
        )
        .expect_err("unparseable date should fail");

        let message = err.to_string();
        assert!(message.contains("forecast record 1"));
        assert!(!message.contains("did not match any variant"));
    }

    #[test]
    fn rejects_object_without_forecast_array() {
        let err = parse_forecast(r#"{"current": {"temp": 21.0}}"#)
            .expect_err("object without forecast should fail");
        assert!(err.to_string().contains("missing the `forecast` array"));
    }
}
