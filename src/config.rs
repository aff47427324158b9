use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::constants;
use crate::error::Result;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Fetch-loop tunables. Compiled-in defaults match the constants module;
/// a config.toml `[fetch]` section overrides individual values.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_target_count")]
    pub target_count: usize,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Config {
    /// Loads config.toml from the working directory when present; the
    /// compiled-in defaults apply otherwise.
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        if !Path::new(config_path).exists() {
            debug!("No config.toml found, using built-in defaults");
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

impl FetchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            target_count: default_target_count(),
            delay_ms: default_delay_ms(),
            endpoint: default_endpoint(),
            output_file: default_output_file(),
        }
    }
}

fn default_batch_size() -> usize {
    constants::FETCH_BATCH_SIZE
}

fn default_target_count() -> usize {
    constants::FETCH_TARGET_COUNT
}

fn default_delay_ms() -> u64 {
    constants::FETCH_DELAY_MS
}

fn default_endpoint() -> String {
    constants::TRIVIA_API_URL.to_string()
}

fn default_output_file() -> String {
    constants::OUTPUT_FILE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_constants() {
        let config = FetchConfig::default();
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.target_count, 3000);
        assert_eq!(config.delay(), Duration::from_millis(1000));
        assert_eq!(config.output_file, "trivia_3000.csv");
    }

    #[test]
    fn partial_toml_overrides_only_named_values() {
        let config: Config = toml::from_str(
            r#"
            [fetch]
            target_count = 10
            delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.fetch.target_count, 10);
        assert_eq!(config.fetch.delay_ms, 0);
        assert_eq!(config.fetch.batch_size, 50);
        assert_eq!(config.fetch.endpoint, constants::TRIVIA_API_URL);
    }
}
