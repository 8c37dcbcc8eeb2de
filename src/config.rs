use crate::error::{RaincatchError, Result};
use crate::models::{BuildingType, PropertyAttributes, RoofType, SoilType};
use crate::rng::SEED_ENV_VAR;
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    pub property: PropertyAttributes,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EstimatorConfig {
    /// Fixed seed for reproducible estimates; OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Where exported reports are written; current directory when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p.clone(),
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(RaincatchError::Config(format!(
                "Config file not found at {:?}. Run `raincatch init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| RaincatchError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str)?;

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| RaincatchError::Config(format!("Failed to parse config: {}", e)))?;

        tracing::debug!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    /// Load the config if one exists, otherwise fall back to defaults.
    pub fn load_or_default(config_override: Option<&PathBuf>) -> Result<Self> {
        if Self::exists(config_override) {
            Self::load(config_override)
        } else if let Some(p) = config_override {
            Err(RaincatchError::Config(format!(
                "Config file not found at {:?}",
                p
            )))
        } else {
            tracing::info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("raincatch").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/raincatch/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RaincatchError::Config("Cannot determine config directory".into()))?
            .join("raincatch");
        Ok(config_dir.join("config.yaml"))
    }

    /// Seed precedence: command line, then RAINCATCH_SEED, then the config file.
    pub fn resolve_seed(&self, cli_seed: Option<u64>) -> Result<Option<u64>> {
        if cli_seed.is_some() {
            return Ok(cli_seed);
        }
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<u64>().map(Some).map_err(|_| {
                RaincatchError::Config(format!(
                    "invalid seed '{}' in {} - expected an unsigned integer",
                    raw, SEED_ENV_VAR
                ))
            }),
            _ => Ok(self.estimator.seed),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.location.address.trim().is_empty() {
            return Err(RaincatchError::InvalidInput(
                "location.address must not be empty".into(),
            ));
        }
        self.property.validate()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.report
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive(target: Option<&PathBuf>) -> Result<(Self, PathBuf)> {
        let defaults = PropertyAttributes::default();

        println!();
        println!("Let's set up raincatch!");
        println!();

        println!("Location");
        let address: String = Input::new()
            .with_prompt("  Address or city")
            .default("Pune".into())
            .interact_text()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        println!();
        println!("Property");
        let name: String = Input::new()
            .with_prompt("  Owner / property name")
            .default("My Home".into())
            .interact_text()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        let dwellers: u32 = Input::new()
            .with_prompt("  Number of dwellers")
            .default(defaults.dwellers)
            .validate_with(|v: &u32| {
                if *v >= 1 {
                    Ok(())
                } else {
                    Err("at least one dweller")
                }
            })
            .interact_text()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        let roof_area: f64 = Input::new()
            .with_prompt("  Roof area (m²)")
            .default(defaults.roof_area)
            .validate_with(positive_area)
            .interact_text()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        let roof_labels: Vec<&str> = RoofType::KNOWN.iter().map(|r| r.as_str()).collect();
        let roof_idx = Select::new()
            .with_prompt("  Roof material")
            .items(&roof_labels[..])
            .default(0)
            .interact()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        let soil_labels: Vec<&str> = SoilType::ALL.iter().map(|s| s.as_str()).collect();
        let soil_idx = Select::new()
            .with_prompt("  Soil type")
            .items(&soil_labels[..])
            .default(1)
            .interact()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        let land_area: f64 = Input::new()
            .with_prompt("  Total land area (m²)")
            .default(defaults.land_area)
            .validate_with(positive_area)
            .interact_text()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        let building_labels: Vec<&str> = BuildingType::ALL.iter().map(|b| b.as_str()).collect();
        let building_idx = Select::new()
            .with_prompt("  Building type")
            .items(&building_labels[..])
            .default(0)
            .interact()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        let additional_info: String = Input::new()
            .with_prompt("  Additional notes (optional)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| RaincatchError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            location: LocationConfig { address },
            property: PropertyAttributes {
                name,
                dwellers,
                roof_area,
                roof_type: RoofType::KNOWN[roof_idx],
                soil_type: SoilType::ALL[soil_idx],
                land_area,
                building_type: BuildingType::ALL[building_idx],
                additional_info,
            },
            estimator: EstimatorConfig::default(),
            report: ReportConfig::default(),
        };

        let config_path = match target {
            Some(p) => p.clone(),
            None => Self::default_config_path()?,
        };
        config.save(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn save(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| RaincatchError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# raincatch configuration\n# Generated by `raincatch init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| RaincatchError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

fn positive_area(v: &f64) -> std::result::Result<(), &'static str> {
    if v.is_finite() && *v > 0.0 {
        Ok(())
    } else {
        Err("area must be greater than zero")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: LocationConfig {
                address: "Pune".into(),
            },
            property: PropertyAttributes {
                name: "My Home".into(),
                ..PropertyAttributes::default()
            },
            estimator: EstimatorConfig::default(),
            report: ReportConfig::default(),
        }
    }
}
