//! Configuration management

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Hosted prediction service the proxy forwards to by default
pub const DEFAULT_PREDICTION_ENDPOINT: &str = "https://cardiopredict-cztq.onrender.com/predict";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub prediction: PredictionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_endpoint() -> String {
    DEFAULT_PREDICTION_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Get config directory (CARDIO_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CARDIO_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/cardio-predict");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("cardio-predict");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/cardio-predict");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("cardio-predict");
        }
    }

    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("prediction.endpoint", DEFAULT_PREDICTION_ENDPOINT)?
        .set_default("prediction.timeout_secs", default_timeout_secs() as i64)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (CARDIO_PREDICTION__ENDPOINT, etc.)
        .add_source(
            ::config::Environment::with_prefix("CARDIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = config.try_deserialize()?;

    url::Url::parse(&config.prediction.endpoint).with_context(|| {
        format!(
            "invalid prediction endpoint: {}",
            config.prediction.endpoint
        )
    })?;

    Ok(config)
}
