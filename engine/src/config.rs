//! TOML Configuration File Support
//!
//! Configuration is loaded from `~/.config/pipes/pipes.toml` when present.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments (applied by the binary after loading)
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [animation]
//! variant = "rainbow"
//! seed = 42
//! ```
//!
//! # Environment Variables
//!
//! - `PIPES_VARIANT`: `classic` or `rainbow`
//! - `PIPES_SEED`: unsigned integer seed for reproducible runs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// =============================================================================
// Variants
// =============================================================================

/// Which screensaver to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Free wandering pipe on a dense wrap-around grid
    #[default]
    Classic,
    /// Target-seeking pipe painted in cycling colors
    Rainbow,
}

impl Variant {
    /// Delay between ticks
    #[must_use]
    pub fn frame_interval(self) -> Duration {
        match self {
            Self::Classic => Duration::from_secs(1) / 60,
            Self::Rainbow => Duration::from_secs(1) / 30,
        }
    }

    /// Cells trimmed from each terminal dimension to get the drawing area
    #[must_use]
    pub const fn margin(self) -> u16 {
        match self {
            Self::Classic => 0,
            Self::Rainbow => 2,
        }
    }

    /// Whether the variant draws on the alternate screen
    ///
    /// The rainbow variant paints incrementally and needs the main screen's
    /// contents to persist, so it stays off the alternate screen.
    #[must_use]
    pub const fn uses_alternate_screen(self) -> bool {
        matches!(self, Self::Classic)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Rainbow => write!(f, "rainbow"),
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "rainbow" => Ok(Self::Rainbow),
            other => Err(ConfigError::ValidationError(format!(
                "unknown variant '{other}' (expected 'classic' or 'rainbow')"
            ))),
        }
    }
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    #[default]
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Animation section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationToml {
    /// "classic" or "rainbow"
    pub variant: Option<String>,

    /// Seed for the random walk
    pub seed: Option<u64>,
}

/// Root of the TOML configuration file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipesToml {
    pub animation: AnimationToml,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipesConfig {
    /// Screensaver variant
    pub variant: Variant,

    /// Random seed (`None` seeds from OS entropy)
    pub seed: Option<u64>,

    /// Config file the values were read from, if any
    pub config_file_path: Option<PathBuf>,

    /// Highest-priority source that contributed a value
    pub source: ConfigSource,
}

impl PipesConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/pipes/pipes.toml` or `~/.config/pipes/pipes.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pipes").join("pipes.toml"))
}

/// Load configuration from the default path, then the environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or a value
/// is invalid. A missing config file is not an error.
pub fn load_config() -> Result<PipesConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path, then the environment
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a value is invalid.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<PipesConfig, ConfigError> {
    let mut config = PipesConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: PipesToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config)?;
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(path = %config_path.display(), "Loaded configuration from file");
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config)?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut PipesConfig, toml: &PipesToml) -> Result<(), ConfigError> {
    if let Some(ref variant) = toml.animation.variant {
        config.variant = variant.parse()?;
    }
    if let Some(seed) = toml.animation.seed {
        config.seed = Some(seed);
    }
    Ok(())
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut PipesConfig) -> Result<(), ConfigError> {
    if let Ok(variant) = std::env::var("PIPES_VARIANT") {
        config.variant = variant.parse()?;
        config.source = ConfigSource::Env;
    }
    if let Ok(seed) = std::env::var("PIPES_SEED") {
        let seed = seed.trim().parse::<u64>().map_err(|e| {
            ConfigError::ValidationError(format!("PIPES_SEED must be an unsigned integer: {e}"))
        })?;
        config.seed = Some(seed);
        config.source = ConfigSource::Env;
    }
    Ok(())
}
