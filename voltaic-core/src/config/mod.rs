//! Configuration types for Voltaic

use crate::VoltaicError;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub printing: PrintingConfig,
    #[serde(default)]
    pub tolerances: ToleranceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintingConfig {
    /// Digits after the decimal point for real numbers
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Never switch to scientific notation for small magnitudes
    #[serde(default = "default_suppress")]
    pub suppress: bool,
    #[serde(default)]
    pub table_style: TableStyle,
}

/// Convergence tolerances reported by the gmin check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    #[serde(default = "default_ver")]
    pub ver: f64,
    #[serde(default = "default_vea")]
    pub vea: f64,
    #[serde(default = "default_ier")]
    pub ier: f64,
    #[serde(default = "default_iea")]
    pub iea: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colour prefixes and headers when writing to a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Column-aligned text with a dashed rule under the header
    #[default]
    Plain,
    /// Box drawing with rounded corners (UTF-8 locales only)
    Rounded,
    Markdown,
}

impl std::str::FromStr for TableStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "simple" => Ok(TableStyle::Plain),
            "rounded" | "utf8" => Ok(TableStyle::Rounded),
            "markdown" | "md" => Ok(TableStyle::Markdown),
            _ => Err(format!("Unknown table style: {}", s)),
        }
    }
}

// Default value functions
fn default_precision() -> usize { 8 }
fn default_suppress() -> bool { false }
fn default_ver() -> f64 { 1e-3 }
fn default_vea() -> f64 { 1e-6 }
fn default_ier() -> f64 { 1e-3 }
fn default_iea() -> f64 { 1e-9 }
fn default_color() -> bool { true }

impl Default for PrintingConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            suppress: default_suppress(),
            table_style: TableStyle::default(),
        }
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            ver: default_ver(),
            vea: default_vea(),
            ier: default_ier(),
            iea: default_iea(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, VoltaicError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| VoltaicError::Configuration(format!("Failed to parse config: {}", e)))?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), VoltaicError> {
    let path = path.as_ref();
    let contents = toml::to_string_pretty(config)
        .map_err(|e| VoltaicError::Configuration(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load the configuration from `explicit` if given, otherwise from the
/// default location when it exists, otherwise fall back to defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, VoltaicError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(VoltaicError::NotFound(path.display().to_string()));
        }
        return load_config(path);
    }

    let default_path = crate::system::config_path();
    if default_path.exists() {
        load_config(default_path)
    } else {
        tracing::debug!("No configuration at {}, using defaults", default_path.display());
        Ok(Config::default())
    }
}

static ACTIVE_CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Make `config` the process-wide configuration read by the printing layer
pub fn install_config(config: Config) {
    *ACTIVE_CONFIG.write() = config;
}

/// Snapshot of the process-wide configuration
pub fn active_config() -> Config {
    ACTIVE_CONFIG.read().clone()
}
