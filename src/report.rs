//! Exportable assessment report.
//!
//! Text layout mirrors the printed analysis report: location, property,
//! feasibility, potential, structure, economics, environmental impact and a
//! footer citing the data sources. JSON is the full serialized assessment.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logic::Assessment;
use crate::models::{month_name, FeasibilityStatus, StatusTone};
use chrono::NaiveDate;
use crossterm::style::{Color, Stylize};
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

pub const REPORT_TITLE: &str = "RAINWATER HARVESTING ANALYSIS REPORT";
pub const FOOTER_SOURCES: &str =
    "Data sources: IMD, CGWB, NAQUIM | Calculations based on IS 15797:2008 standards";

/// Group digits the Indian way: last three, then pairs (1,02,000).
pub fn format_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn terminal_color(status: FeasibilityStatus) -> Color {
    match status.tone() {
        StatusTone::Positive => Color::Green,
        StatusTone::Caution => Color::Yellow,
        StatusTone::Negative => Color::Red,
    }
}

fn section(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

/// Render the text report. `color` adds ANSI styling to the feasibility status.
pub fn render_text(assessment: &Assessment, color: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_report(&mut out, assessment, color).ok();
    out
}

fn write_report(out: &mut String, assessment: &Assessment, color: bool) -> fmt::Result {
    let Assessment {
        location,
        property,
        rainfall,
        aquifer,
        result,
        generated_at,
    } = assessment;
    let rule = "=".repeat(REPORT_TITLE.len());

    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", REPORT_TITLE)?;
    writeln!(out, "{}", rule)?;

    section(out, "LOCATION DETAILS")?;
    writeln!(out, "Address: {}", location.address)?;
    writeln!(out, "Coordinates: {}", location.coordinates_label())?;
    writeln!(out, "District: {}", location.district)?;

    section(out, "PROPERTY INFORMATION")?;
    if !property.name.is_empty() {
        writeln!(out, "Owner: {}", property.name)?;
    }
    writeln!(out, "Residents: {} people", property.dwellers)?;
    writeln!(
        out,
        "Roof Area: {} sq.m ({})",
        property.roof_area, property.roof_type
    )?;
    writeln!(out, "Soil Type: {}", property.soil_type)?;
    writeln!(out, "Land Area: {} sq.m", property.land_area)?;
    writeln!(out, "Building Type: {}", property.building_type)?;
    if !property.additional_info.is_empty() {
        writeln!(out, "Notes: {}", property.additional_info)?;
    }

    section(out, "SITE DATA")?;
    writeln!(
        out,
        "Annual Rainfall: {} mm ({} {}, next year ~{} mm, {}% confidence)",
        rainfall.annual_rainfall,
        rainfall.prediction.trend,
        rainfall.prediction.trend.symbol(),
        rainfall.prediction.next_year,
        rainfall.prediction.confidence
    )?;
    writeln!(out, "Rainfall Source: {}", rainfall.source)?;
    writeln!(
        out,
        "Aquifer: {} ({}), depth to water {}",
        aquifer.aquifer_name, aquifer.aquifer_type, aquifer.depth_to_water
    )?;
    writeln!(
        out,
        "Permeability: {} | Water Quality: {}",
        aquifer.permeability, aquifer.quality
    )?;
    for warning in &aquifer.warnings {
        writeln!(out, "Warning: {}", warning)?;
    }

    section(out, "FEASIBILITY ASSESSMENT")?;
    let status_label = result.feasibility.status.as_str().to_uppercase();
    let status = if color {
        status_label
            .with(terminal_color(result.feasibility.status))
            .bold()
            .to_string()
    } else {
        status_label
    };
    writeln!(
        out,
        "Status: {}  Score: {}%",
        status, result.feasibility.score
    )?;
    for reason in &result.feasibility.reasons {
        writeln!(out, "  - {}", reason)?;
    }

    section(out, "HARVESTING POTENTIAL")?;
    let potential = &result.potential;
    writeln!(
        out,
        "Annual Harvest Potential: {} liters",
        format_indian(potential.annual_harvest)
    )?;
    writeln!(
        out,
        "Monthly Average: {} liters",
        format_indian(potential.monthly_average)
    )?;
    writeln!(
        out,
        "Daily Average: {} liters",
        format_indian(potential.daily_average)
    )?;
    writeln!(
        out,
        "Peak Month Harvest: {} liters ({})",
        format_indian(potential.peak_month_harvest),
        month_name(potential.peak_month)
    )?;
    writeln!(out, "System Efficiency: {}%", potential.efficiency)?;

    section(out, "RECOMMENDED STRUCTURE")?;
    let rec = &result.recommendation;
    writeln!(out, "Structure Type: {}", rec.primary_structure)?;
    writeln!(
        out,
        "Capacity: {} liters",
        format_indian(rec.dimensions.capacity)
    )?;
    writeln!(
        out,
        "Dimensions: {}m × {}m × {}m",
        rec.dimensions.length, rec.dimensions.width, rec.dimensions.depth
    )?;
    writeln!(
        out,
        "Supporting Components: {}",
        rec.secondary_structures.join(", ")
    )?;
    writeln!(
        out,
        "Suggested Recharge Methods: {}",
        aquifer.suitability.recharge_method.join(", ")
    )?;

    section(out, "ECONOMIC ANALYSIS")?;
    let econ = &result.economics;
    writeln!(
        out,
        "Total Implementation Cost: ₹{}",
        format_indian(econ.total_cost)
    )?;
    writeln!(
        out,
        "Annual Water Bill Savings: ₹{}",
        format_indian(econ.annual_savings)
    )?;
    writeln!(out, "Payback Period: {}", econ.payback_period)?;
    writeln!(out, "Return on Investment: {}% per year", econ.roi)?;

    section(out, "ENVIRONMENTAL IMPACT")?;
    let env = &result.environmental;
    writeln!(out, "Annual CO₂ Reduction: {} kg", env.carbon_reduction)?;
    writeln!(
        out,
        "Groundwater Recharge: {} L/year",
        format_indian(env.groundwater_recharge)
    )?;
    writeln!(out, "Flood Risk Reduction: {}%", env.flood_reduction)?;

    if !result.notices.is_empty() {
        section(out, "NOTES")?;
        for notice in &result.notices {
            writeln!(out, "  - {}", notice.describe())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "Report generated on: {}",
        generated_at.format("%d/%m/%Y")
    )?;
    writeln!(out, "{}", FOOTER_SOURCES)
}

pub fn render_json(assessment: &Assessment) -> Result<String> {
    Ok(serde_json::to_string_pretty(assessment)?)
}

pub fn render(assessment: &Assessment, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(assessment, color)),
        OutputFormat::Json => render_json(assessment),
    }
}

/// `RWH_Analysis_<name>_<date>.<ext>` with whitespace runs collapsed to `_`
pub fn default_file_name(property_name: &str, date: NaiveDate, format: OutputFormat) -> String {
    let name = property_name.split_whitespace().collect::<Vec<_>>().join("_");
    let name = if name.is_empty() {
        "Property".to_string()
    } else {
        name
    };
    let ext = match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
    };
    format!("RWH_Analysis_{}_{}.{}", name, date.format("%Y-%m-%d"), ext)
}

/// Write the report into `dir` under its default file name.
pub fn export(assessment: &Assessment, dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let file_name = default_file_name(
        &assessment.property.name,
        assessment.generated_at.date_naive(),
        format,
    );
    let path = dir.join(file_name);
    write_to(assessment, &path, format)?;
    Ok(path)
}

pub fn write_to(assessment: &Assessment, path: &Path, format: OutputFormat) -> Result<()> {
    let content = render(assessment, format, false)?;
    std::fs::write(path, content)?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::AssessmentService;
    use crate::models::PropertyAttributes;
    use crate::rng::EstimatorRng;

    fn sample() -> Assessment {
        let mut service = AssessmentService::new(EstimatorRng::from_seed_u64(8));
        let property = PropertyAttributes {
            name: "Asha Patel".into(),
            ..PropertyAttributes::default()
        };
        service.assess("Mumbai", property).unwrap()
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_indian(0), "0");
        assert_eq!(format_indian(999), "999");
        assert_eq!(format_indian(1000), "1,000");
        assert_eq!(format_indian(102000), "1,02,000");
        assert_eq!(format_indian(1234567), "12,34,567");
        assert_eq!(format_indian(12345678), "1,23,45,678");
    }

    #[test]
    fn text_report_has_every_block() {
        let text = render_text(&sample(), false);
        for heading in [
            REPORT_TITLE,
            "LOCATION DETAILS",
            "PROPERTY INFORMATION",
            "FEASIBILITY ASSESSMENT",
            "HARVESTING POTENTIAL",
            "RECOMMENDED STRUCTURE",
            "ECONOMIC ANALYSIS",
            "ENVIRONMENTAL IMPACT",
            FOOTER_SOURCES,
        ] {
            assert!(text.contains(heading), "missing {}", heading);
        }
        assert!(text.contains("Coordinates: 19.0760°N, 72.8777°E"));
        assert!(text.contains("Annual Harvest Potential: 2,16,155 liters"));
        assert!(text.contains("Status: EXCELLENT  Score: 90%"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn terminal_colors_follow_status_tone() {
        assert_eq!(terminal_color(FeasibilityStatus::Excellent), Color::Green);
        assert_eq!(terminal_color(FeasibilityStatus::Good), Color::Green);
        assert_eq!(terminal_color(FeasibilityStatus::Fair), Color::Yellow);
        assert_eq!(terminal_color(FeasibilityStatus::Poor), Color::Red);
    }

    #[test]
    fn text_report_ends_with_sources_footer() {
        let text = render_text(&sample(), false);
        assert!(text.starts_with(&"=".repeat(REPORT_TITLE.len())));
        assert!(text.ends_with(&format!("{}\n", FOOTER_SOURCES)));
    }

    #[test]
    fn colored_report_contains_ansi() {
        let text = render_text(&sample(), true);
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn json_report_round_trips() {
        let assessment = sample();
        let json = render_json(&assessment).unwrap();
        let parsed: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result, assessment.result);
        assert!(json.contains("\"annual_harvest\": 216155"));
    }

    #[test]
    fn file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 3).unwrap();
        assert_eq!(
            default_file_name("Asha  Patel", date, OutputFormat::Text),
            "RWH_Analysis_Asha_Patel_2024-12-03.txt"
        );
        assert_eq!(
            default_file_name("", date, OutputFormat::Json),
            "RWH_Analysis_Property_2024-12-03.json"
        );
    }

    #[test]
    fn export_writes_file() {
        let dir = std::env::temp_dir().join(format!("raincatch-report-{}", std::process::id()));
        let path = export(&sample(), &dir, OutputFormat::Text).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(FOOTER_SOURCES));
        std::fs::remove_dir_all(&dir).ok();
    }
}
