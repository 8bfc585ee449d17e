use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{FitnessError, FitnessResult};

pub const BASE_URL_ENV: &str = "FITPULSE_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "FITPULSE_API_TIMEOUT_SECONDS";
pub const HORIZON_ENV: &str = "FITPULSE_HORIZON_DAYS";

/// Settings for the prediction synthesizer and its remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Days ahead for the projected weight
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_horizon_days() -> u32 {
    28
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            horizon_days: default_horizon_days(),
        }
    }
}

impl PredictionConfig {
    /// Defaults overridden by `FITPULSE_*` environment variables.
    pub fn from_env() -> FitnessResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `FITPULSE_*` environment overrides on top of `self`.
    pub fn with_env_overrides(mut self) -> FitnessResult<Self> {
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        if let Ok(timeout) = env::var(TIMEOUT_ENV) {
            self.timeout_seconds = parse_var(TIMEOUT_ENV, &timeout)?;
        }
        if let Ok(horizon) = env::var(HORIZON_ENV) {
            self.horizon_days = parse_var(HORIZON_ENV, &horizon)?;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> FitnessResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(FitnessError::invalid("base_url must not be empty"));
        }
        if self.timeout_seconds == 0 {
            return Err(FitnessError::invalid("timeout_seconds must be positive"));
        }
        if self.horizon_days == 0 {
            return Err(FitnessError::invalid("horizon_days must be positive"));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> FitnessResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| FitnessError::invalid(format!("{} has an invalid value: {}", name, value)))
}
