use crate::soil::SoilPreset;
use crate::types::crop::CropProfile;
use crate::types::report::Recommendation;

const GROWING_TIPS: [&str; 4] = [
    "Consider crop rotation to maintain soil health",
    "Plant companion crops that benefit each other",
    "Check local seed availability and planting calendars",
    "Monitor weather forecasts for optimal planting times",
];

/// Highlight marker for the first few ranks.
const HIGHLIGHTED_RANKS: usize = 3;
const BENEFITS_SHOWN: usize = 2;

/// Rounded for display; never prints `-0`.
fn whole(value: f64) -> i64 {
    value.round() as i64
}

pub fn to_markdown(report: &Recommendation, top: usize) -> String {
    let mut output = String::new();
    output.push_str("# Crop Recommendations\n\n");
    output.push_str("## Analysis Summary\n\n");
    output.push_str(&format!(
        "- Avg Temp: {}°C\n- Avg Humidity: {}%\n- Soil: {}\n\n",
        whole(report.avg_temp),
        whole(report.avg_humidity),
        report.soil.soil_type.title()
    ));

    output.push_str("## Matches\n\n");
    let crops = report.top(top);
    if crops.is_empty() {
        output.push_str("- none\n\n");
    }
    for (index, crop) in crops.iter().enumerate() {
        let profile = &crop.profile;
        let heading = if profile.icon.is_empty() {
            profile.name.clone()
        } else {
            format!("{} {}", profile.icon, profile.name)
        };
        output.push_str(&format!("### {}. {}", index + 1, heading));
        if index < HIGHLIGHTED_RANKS {
            output.push_str(&format!(" (Top {})", index + 1));
        }
        output.push_str("\n\n");
        output.push_str(&format!("**{}% - {}**\n\n", crop.score, crop.band));
        output.push_str(&format!("{}\n\n", profile.description));
        output.push_str(&format!(
            "- Ideal Temp: {}°C\n- Water Need: {}\n- Season: {}\n",
            profile.ideal_temperature,
            profile.water_requirement.label(),
            profile.growing_season
        ));
        if !profile.benefits.is_empty() {
            let benefits = profile
                .benefits
                .iter()
                .take(BENEFITS_SHOWN)
                .map(String::as_str)
                .collect::<Vec<_>>();
            output.push_str(&format!("- Benefits: {}\n", benefits.join(", ")));
        }
        output.push('\n');
    }

    output.push_str("## Pro Tips\n\n");
    for tip in GROWING_TIPS {
        output.push_str(&format!("- {tip}\n"));
    }

    output
}

pub fn catalog_markdown(catalog: &[CropProfile]) -> String {
    let mut output = String::new();
    output.push_str("# Crop Catalog\n\n");
    output.push_str("| Crop | Temp (°C) | Humidity (%) | Soils | Water | Season |\n");
    output.push_str("|---|---|---|---|---|---|\n");
    for crop in catalog {
        let soils = crop
            .soil_affinity
            .iter()
            .map(|soil| soil.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            crop.name,
            crop.ideal_temperature,
            crop.ideal_humidity,
            soils,
            crop.water_requirement.label(),
            crop.growing_season
        ));
    }
    output
}

pub fn soils_markdown(presets: &[SoilPreset]) -> String {
    let mut output = String::new();
    output.push_str("# Soil Types\n\n");
    for preset in presets {
        output.push_str(&format!(
            "- {} (`{}`, pH {}, {} drainage): {}\n",
            preset.name,
            preset.soil_type,
            preset.ph,
            preset.drainage.label(),
            preset.description
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::soil::PRESETS;
    use crate::types::report::ScoredCrop;
    use crate::types::soil::{Drainage, SoilClassification, SoilType};

    fn sample() -> Recommendation {
        let scores = [100, 72, 55, 40];
        Recommendation {
            avg_temp: 21.6,
            avg_humidity: 64.4,
            soil: SoilClassification {
                soil_type: SoilType::Sandy,
                ph: 6.2,
                drainage: Drainage::Good,
            },
            crops: catalog::builtin()
                .iter()
                .zip(scores)
                .map(|(crop, score)| ScoredCrop::new(crop.clone(), score))
                .collect(),
        }
    }

    #[test]
    fn markdown_report_contains_summary_and_bands() {
        let rendered = to_markdown(&sample(), 6);
        assert!(rendered.contains("## Analysis Summary"));
        assert!(rendered.contains("- Avg Temp: 22°C"));
        assert!(rendered.contains("- Avg Humidity: 64%"));
        assert!(rendered.contains("- Soil: Sandy"));
        assert!(rendered.contains("**100% - Excellent Match**"));
        assert!(rendered.contains("**72% - Good Match**"));
        assert!(rendered.contains("**55% - Fair Match**"));
        assert!(rendered.contains("## Pro Tips"));
    }

    #[test]
    fn markdown_summary_rounds_small_negative_average_to_zero() {
        let mut report = sample();
        report.avg_temp = -0.3;
        let rendered = to_markdown(&report, 6);
        assert!(rendered.contains("- Avg Temp: 0°C\n"));
        assert!(!rendered.contains("-0°C"));
    }

    #[test]
    fn markdown_report_marks_only_first_three_ranks() {
        let rendered = to_markdown(&sample(), 6);
        assert!(rendered.contains("(Top 1)"));
        assert!(rendered.contains("(Top 3)"));
        assert!(!rendered.contains("(Top 4)"));
        assert!(rendered.contains("### 4."));
    }

    #[test]
    fn markdown_report_shows_two_benefits() {
        let rendered = to_markdown(&sample(), 1);
        assert!(rendered.contains("- Benefits: High in Vitamin C, Rich in lycopene\n"));
        assert!(!rendered.contains("Good market value"));
        assert!(!rendered.contains("### 2."));
    }

    #[test]
    fn catalog_markdown_lists_every_crop() {
        let rendered = catalog_markdown(catalog::builtin());
        assert!(rendered.contains("| Tomatoes | 18-26 | 60-70 | loamy, sandy | Medium | Spring to Summer |"));
        assert!(rendered.contains("| Cabbage |"));
    }

    #[test]
    fn soils_markdown_lists_presets() {
        let rendered = soils_markdown(&PRESETS);
        assert!(rendered.contains("Clay Soil (`clay`, pH 6.5, Poor drainage)"));
        assert!(rendered.contains("Silty Soil (`silty`, pH 6.6, Moderate drainage)"));
    }
}
