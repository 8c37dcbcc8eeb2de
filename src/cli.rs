use crate::models::{BuildingType, PropertyAttributes, RoofType, SoilType};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "raincatch",
    version,
    about = "Rainwater harvesting feasibility calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the site estimators (reproducible results)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one assessment and print or export the report
    Assess(AssessArgs),
    /// Interactive setup of location and property
    Init,
    /// Validate config and show what would be assessed
    Check,
}

#[derive(Args, Debug, Default)]
pub struct AssessArgs {
    /// Address or city name
    #[arg(short, long)]
    pub address: Option<String>,

    /// Owner or property name
    #[arg(long)]
    pub name: Option<String>,

    /// Number of people living on the property
    #[arg(long)]
    pub dwellers: Option<u32>,

    /// Roof catchment area in m²
    #[arg(long)]
    pub roof_area: Option<f64>,

    /// Roof material (concrete, tile, metal, asbestos, thatched)
    #[arg(long)]
    pub roof_type: Option<String>,

    /// Soil type (sandy, loamy, clay, rocky, mixed)
    #[arg(long)]
    pub soil_type: Option<String>,

    /// Total land area in m²
    #[arg(long)]
    pub land_area: Option<f64>,

    /// Building type (residential, apartment, commercial, institutional)
    #[arg(long)]
    pub building_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the report to the configured output directory with the default file name
    #[arg(long, conflicts_with = "output")]
    pub export: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AssessArgs {
    /// Overlay command-line values onto the configured property.
    /// Unrecognized soil or building names are rejected.
    pub fn apply_to(&self, property: &mut PropertyAttributes) -> Result<(), String> {
        if let Some(name) = &self.name {
            property.name = name.clone();
        }
        if let Some(dwellers) = self.dwellers {
            property.dwellers = dwellers;
        }
        if let Some(roof_area) = self.roof_area {
            property.roof_area = roof_area;
        }
        if let Some(roof_type) = &self.roof_type {
            property.roof_type = RoofType::from_str(roof_type);
            if property.roof_type == RoofType::Unknown {
                tracing::warn!(
                    "Unrecognized roof material '{}', using default runoff coefficient",
                    roof_type
                );
            }
        }
        if let Some(soil_type) = &self.soil_type {
            property.soil_type = SoilType::from_str(soil_type)
                .ok_or_else(|| format!("unknown soil type '{}'", soil_type))?;
        }
        if let Some(land_area) = self.land_area {
            property.land_area = land_area;
        }
        if let Some(building_type) = &self.building_type {
            property.building_type = BuildingType::from_str(building_type)
                .ok_or_else(|| format!("unknown building type '{}'", building_type))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_assess_flags() {
        let cli = Cli::try_parse_from([
            "raincatch",
            "--seed",
            "9",
            "assess",
            "--address",
            "Delhi",
            "--roof-area",
            "250",
            "--soil-type",
            "clay",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Some(Commands::Assess(args)) => {
                assert_eq!(args.address.as_deref(), Some("Delhi"));
                assert_eq!(args.roof_area, Some(250.0));
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("expected assess"),
        }
    }

    #[test]
    fn apply_overrides_property() {
        let args = AssessArgs {
            roof_area: Some(320.0),
            roof_type: Some("metal".into()),
            soil_type: Some("Clay".into()),
            ..AssessArgs::default()
        };
        let mut property = PropertyAttributes::default();
        args.apply_to(&mut property).unwrap();
        assert_eq!(property.roof_area, 320.0);
        assert_eq!(property.roof_type, RoofType::Metal);
        assert_eq!(property.soil_type, SoilType::Clay);
        assert_eq!(property.land_area, 200.0);
    }

    #[test]
    fn apply_rejects_unknown_soil() {
        let args = AssessArgs {
            soil_type: Some("peat".into()),
            ..AssessArgs::default()
        };
        assert!(args.apply_to(&mut PropertyAttributes::default()).is_err());
    }
}
