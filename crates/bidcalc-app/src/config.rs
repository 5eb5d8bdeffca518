//! Configuration management for bidcalc
//!
//! Config stored at: <config_dir>/bidcalc/config.toml

use std::path::{Path, PathBuf};

use bidcalc_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Financial defaults applied when a new rental plan is created
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingDefaults {
    pub mpg_per_truck: f64,
    pub dispatch_fee: f64,
    /// Years
    pub payback_period: f64,
    pub target_moic: f64,
    pub annual_utilization: f64,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            mpg_per_truck: 8.0,
            dispatch_fee: 50.0,
            payback_period: 5.0,
            target_moic: 2.0,
            annual_utilization: 0.75,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (table, json)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Catalog CSV overriding the built-in prices
    #[serde(default)]
    pub catalog_csv: Option<PathBuf>,

    #[serde(default)]
    pub pricing: PricingDefaults,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            catalog_csv: None,
            pricing: PricingDefaults::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("bidcalc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or the default config
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bidcalc Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Output format:      {}", self.output_format)?;
        writeln!(
            f,
            "Catalog CSV:        {}",
            self.catalog_csv
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f)?;
        writeln!(f, "New rental plans")?;
        writeln!(f, "  MPG per truck:      {}", self.pricing.mpg_per_truck)?;
        writeln!(f, "  Dispatch fee:       {}", self.pricing.dispatch_fee)?;
        writeln!(f, "  Payback period:     {}", self.pricing.payback_period)?;
        writeln!(f, "  Target MOIC:        {}", self.pricing.target_moic)?;
        writeln!(f, "  Annual utilization: {}", self.pricing.annual_utilization)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:        {}", path.display())?;
        }

        Ok(())
    }
}
