//! Command Line Interface
//!
//! Flags sit on top of the engine's configuration: a flag wins over the
//! environment and the config file.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use pipes_engine::{load_config, load_config_from_path, ConfigSource, PipesConfig, Variant};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pipes - a box-drawing pipe screensaver for your terminal
#[derive(Parser, Debug)]
#[command(name = "pipes")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Screensaver variant: classic or rainbow
    #[arg(short = 'v', long, value_name = "VARIANT", value_parser = parse_variant)]
    pub variant: Option<Variant>,

    /// Seed for a reproducible pipe
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, env = "PIPES_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Append logs to this file (logging is off without it)
    #[arg(long, env = "PIPES_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(short = 'l', long, env = "PIPES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse().map_err(|e: pipes_engine::ConfigError| e.to_string())
}

impl Args {
    /// Load the engine configuration and layer the flags on top
    pub fn resolve_config(&self) -> Result<PipesConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_from_path(Some(path.clone()))
                .with_context(|| format!("Failed to load config file: {path:?}"))?,
            None => load_config().context("Failed to load configuration")?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Overwrite config values with any flags given
    pub fn apply(&self, config: &mut PipesConfig) {
        if let Some(variant) = self.variant {
            config.variant = variant;
            config.source = ConfigSource::Cli;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
            config.source = ConfigSource::Cli;
        }
    }
}

/// Install the global tracing subscriber
///
/// The animation owns the terminal, so logs only go to `--log-file`.
pub fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {path:?}"))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
