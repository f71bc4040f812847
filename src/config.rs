//! Service configuration, loaded from environment variables with
//! defaults suitable for local runs.

use std::env;

use thiserror::Error;

/// Environment variable for the per-service channel capacity.
pub const CHANNEL_CAPACITY_ENV_VAR: &str = "ORDERS_CHANNEL_CAPACITY";
/// Environment variable for the payment settlement currency.
pub const CURRENCY_ENV_VAR: &str = "ORDERS_CURRENCY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_CURRENCY: &str = "eur";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Runtime configuration for the order system.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Buffer size of each service's request channel.
    pub channel_capacity: usize,
    /// Fixed settlement currency sent with every payment session.
    pub currency: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(CHANNEL_CAPACITY_ENV_VAR) {
            let capacity: usize = raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: CHANNEL_CAPACITY_ENV_VAR,
                value: raw.clone(),
            })?;
            if capacity == 0 {
                return Err(ConfigError::InvalidVar {
                    name: CHANNEL_CAPACITY_ENV_VAR,
                    value: raw,
                });
            }
            config.channel_capacity = capacity;
        }

        if let Ok(raw) = env::var(CURRENCY_ENV_VAR) {
            if raw.trim().is_empty() {
                return Err(ConfigError::InvalidVar {
                    name: CURRENCY_ENV_VAR,
                    value: raw,
                });
            }
            config.currency = raw;
        }

        Ok(config)
    }
}
