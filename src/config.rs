//! User configuration loaded from `config.toml`.
//!
//! Lives at `$XDG_CONFIG_HOME/mathops/config.toml` unless a path is given on
//! the command line. Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::calculator::MAX_FACTORIAL_INPUT;

/// More digits than this are noise for an f64.
const MAX_DECIMALS: usize = 15;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `mathops=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Decimal places for basic and advanced results.
    pub decimals: usize,
    /// Decimal places for radians and trigonometric results.
    pub trig_decimals: usize,
    /// The advanced menu only computes factorials for `0..=max_factorial`.
    pub max_factorial: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            trig_decimals: 4,
            max_factorial: MAX_FACTORIAL_INPUT,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mathops").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse and validate TOML config text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Err(err) = EnvFilter::try_new(&self.logging.level) {
            anyhow::bail!(
                "logging.level {:?} is not a valid filter: {}",
                self.logging.level,
                err
            );
        }

        let display = &self.display;
        if display.decimals > MAX_DECIMALS || display.trig_decimals > MAX_DECIMALS {
            anyhow::bail!("display decimals must be at most {}", MAX_DECIMALS);
        }
        if !(0..=MAX_FACTORIAL_INPUT).contains(&display.max_factorial) {
            anyhow::bail!(
                "display.max_factorial must be between 0 and {}",
                MAX_FACTORIAL_INPUT
            );
        }
        Ok(())
    }
}
