//! Plain-text rendering of recommendation reports

use std::fmt::Write;

use shared::{Recommendation, RecommendationReport};

/// Render a report for a terminal
pub fn format_report(report: &RecommendationReport) -> String {
    let mut out = String::new();
    let weather = &report.weather;
    let soil = &report.soil;

    let _ = writeln!(out, "Location:      {} ({})", report.region.name, report.region.coordinates);
    let _ = writeln!(out, "Climate zone:  {}", report.climate_zone);
    let _ = writeln!(out);

    let _ = writeln!(out, "Weather");
    let _ = writeln!(out, "  Temperature:   {} °C", weather.temperature_celsius.normalize());
    let _ = writeln!(out, "  Humidity:      {} %", weather.humidity_percent.normalize());
    let _ = writeln!(out, "  Precipitation: {} mm (window total)", weather.precipitation_mm.normalize());
    if let Some(conditions) = &weather.conditions {
        let _ = writeln!(out, "  Conditions:    {}", weather.condition());
        let _ = writeln!(out, "  Wind:          {} km/h", conditions.wind_speed_kmh.normalize());
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Soil");
    let _ = writeln!(out, "  Type:          {}", soil.soil_type);
    let _ = writeln!(
        out,
        "  Fertility:     {} ({})",
        soil.fertility_label(),
        soil.fertility_index.normalize()
    );
    let _ = writeln!(out, "  Erosion risk:  {}", soil.erosion);
    if let Some(notes) = &soil.notes {
        let _ = writeln!(out, "  Notes:         {}", notes);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Recommended crops");
    out.push_str(&format_recommendations(&report.recommendations));
    let _ = writeln!(out);

    let _ = writeln!(out, "Advice");
    for line in &report.advice {
        let _ = writeln!(out, "  - {}", line);
    }

    out
}

/// One line per crop, in rank order
pub fn format_recommendations(recommendations: &[Recommendation]) -> String {
    let mut out = String::new();
    for (rank, rec) in recommendations.iter().enumerate() {
        let unmet = rec.breakdown.unmet_attributes();
        let detail = if unmet.is_empty() {
            "all conditions met".to_string()
        } else {
            format!("outside range: {}", unmet.join(", "))
        };
        let _ = writeln!(
            out,
            "  {:>2}. {:<10} {:>6}  {}",
            rank + 1,
            rec.crop,
            rec.score.round_dp(2).to_string(),
            detail
        );
    }
    out
}
