//! Application configuration loaded from disk and the environment.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

/// Directory under the user's config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "seatline";
/// Prefix for environment overrides, e.g. `SEATLINE_SEAT_COUNT`.
pub const ENV_PREFIX: &str = "SEATLINE";

const DEFAULT_CONFIG: &str = r#"# Seatline configuration.
#
# Number of seats to create at startup. Leave unset to be asked on launch.
# seat_count = 40

# Directory for log files, relative to the working directory unless absolute.
log_dir = "logs"
"#;

/// Settings consumed by the terminal frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Seats to create at startup; prompted for when absent.
    #[serde(default)]
    pub seat_count: Option<i64>,
    /// Where `seatline.log` is written.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seat_count: None,
            log_dir: default_log_dir(),
        }
    }
}

impl AppConfig {
    /// Load from the default config file, overlaid by environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load from `path` (optional on disk), overlaid by environment variables.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::read(
            path.as_ref(),
            Some(Environment::with_prefix(ENV_PREFIX).try_parsing(true)),
        )
    }

    fn read(path: &Path, overlay: Option<Environment>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from(path).required(false));
        if let Some(env) = overlay {
            builder = builder.add_source(env);
        }
        let settings = builder
            .build()
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse configuration {}", path.display()))
    }

    /// Log directory resolved against the current working directory.
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        if self.log_dir.is_absolute() {
            return Ok(self.log_dir.clone());
        }
        Ok(std::env::current_dir()
            .context("failed to read current directory")?
            .join(&self.log_dir))
    }
}

/// Location of the user's `config.toml`.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("config.toml")
}

/// Write the commented default configuration if no file exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    write_default_config(&path)?;
    Ok(path)
}

fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}
