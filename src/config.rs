use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;
use crate::ticker::JitterParams;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const CONFIG_PATH_ENV: &str = "CRYPTOTRADER_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ticker: TickerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub interval_ms: u64,
    pub price_jitter: f64,
    pub change_jitter: f64,
    /// Fixed RNG seed for reproducible demos. OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        let params = JitterParams::default();
        Self {
            interval_ms: 3_000,
            price_jitter: params.price_jitter,
            change_jitter: params.change_jitter,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "cryptotrader.log".to_string(),
        }
    }
}

impl TickerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn jitter_params(&self) -> JitterParams {
        JitterParams {
            price_jitter: self.price_jitter,
            change_jitter: self.change_jitter,
        }
    }
}

impl LoggingConfig {
    pub fn create_log_file(&self) -> Result<std::fs::File> {
        std::fs::File::create(&self.file)
            .map_err(AppError::from)
            .with_context(|| format!("failed to create log file {}", self.file))
    }
}

impl Config {
    /// Load `.env`, then the TOML file named by `CRYPTOTRADER_CONFIG` or
    /// `config/default.toml`. Only the default path may be absent.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load_from(Path::new(path.trim())),
            _ => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(AppError::from)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("failed to load {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.ticker.interval_ms == 0 {
            return Err(AppError::Config(
                "ticker.interval_ms must be > 0".to_string(),
            ));
        }
        // A factor of 1 + (U - 0.5) * j stays positive only while j < 2.
        if !(0.0..2.0).contains(&self.ticker.price_jitter) {
            return Err(AppError::Config(format!(
                "ticker.price_jitter must be in [0, 2), got {}",
                self.ticker.price_jitter
            )));
        }
        if !self.ticker.change_jitter.is_finite() || self.ticker.change_jitter < 0.0 {
            return Err(AppError::Config(format!(
                "ticker.change_jitter must be a finite value >= 0, got {}",
                self.ticker.change_jitter
            )));
        }
        if self.ui.refresh_rate_ms == 0 {
            return Err(AppError::Config(
                "ui.refresh_rate_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
