//! Runtime settings read from the environment (after `.env` is loaded).

use crate::error::{Result, SubnetError};
use crate::models::MAX_LENGTH;

pub const ENV_DEFAULT_PREFIX: &str = "SUBNET_CALC_DEFAULT_PREFIX";
pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

pub const DEFAULT_PREFIX_LENGTH: u8 = 24;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix length used when the prefix question is left empty.
    pub default_prefix_length: u8,
    pub output: OutputFormat,
    /// Path of the log4rs YAML file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_prefix_length: DEFAULT_PREFIX_LENGTH,
            output: OutputFormat::Text,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_DEFAULT_PREFIX) {
            config.default_prefix_length = value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|p| *p <= MAX_LENGTH)
                .ok_or_else(|| {
                    SubnetError::InvalidArgument(format!(
                        "{ENV_DEFAULT_PREFIX}={value:?} is not a prefix length in 0..={MAX_LENGTH}"
                    ))
                })?;
        }

        if let Some(value) = lookup(ENV_OUTPUT) {
            config.output = match value.trim().to_lowercase().as_str() {
                "text" | "" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(SubnetError::InvalidArgument(format!(
                        "{ENV_OUTPUT}={value:?} must be text or json"
                    )))
                }
            };
        }

        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            if !value.trim().is_empty() {
                config.log_config = value.trim().to_string();
            }
        }

        log::debug!("config {config:?}");
        Ok(config)
    }
}
