use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::telemetry::time::{MAX_DEVICE_TIMESTAMP_MS, MAX_PLAUSIBLE_DELTA_MS};
use crate::telemetry::TimePolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    pub launches: LaunchesConfig,
    #[serde(default)]
    pub time_policy: TimePolicyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchesConfig {
    pub base_folder: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimePolicyConfig {
    #[serde(default = "default_max_device_timestamp_ms")]
    pub max_device_timestamp_ms: i64,
    /// Human duration, e.g. `30days`.
    #[serde(
        default = "default_max_plausible_delta",
        deserialize_with = "deserialize_duration"
    )]
    pub max_plausible_delta: Duration,
}

impl Default for TimePolicyConfig {
    fn default() -> Self {
        Self {
            max_device_timestamp_ms: default_max_device_timestamp_ms(),
            max_plausible_delta: default_max_plausible_delta(),
        }
    }
}

impl TimePolicyConfig {
    pub fn policy(&self) -> TimePolicy {
        TimePolicy {
            max_device_timestamp_ms: self.max_device_timestamp_ms,
            max_plausible_delta_ms: i64::try_from(self.max_plausible_delta.as_millis())
                .unwrap_or(i64::MAX),
        }
    }
}

fn default_max_device_timestamp_ms() -> i64 {
    MAX_DEVICE_TIMESTAMP_MS
}

fn default_max_plausible_delta() -> Duration {
    Duration::from_millis(MAX_PLAUSIBLE_DELTA_MS as u64)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
