//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ADSTORE_DATA_PATH` - Path of the slot-store file (default: `adstore.json`)
//! - `ADSTORE_LOGIN_DELAY_MS` - Simulated login/register latency (default: 1000)
//! - `ADSTORE_CARD_NUMBER` - Bank transfer recipient card number
//! - `ADSTORE_CARD_HOLDER` - Bank transfer recipient card holder

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::payment::PaymentDetails;

/// Default simulated latency for login/register, matching the original
/// storefront's one-second fake API call.
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but holds an unusable value; carries
    /// the variable name and what was expected.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the file backing the slot store.
    pub data_path: PathBuf,
    /// Simulated login/register latency.
    pub login_delay: Duration,
    /// Bank transfer recipient details.
    pub payment: PaymentDetails,
}

impl StoreConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `ADSTORE_LOGIN_DELAY_MS` is
    /// set but not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_path = std::env::var("ADSTORE_DATA_PATH")
            .map_or_else(|_| PathBuf::from("adstore.json"), PathBuf::from);

        let login_delay = match std::env::var("ADSTORE_LOGIN_DELAY_MS") {
            Ok(raw) => {
                let ms: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "ADSTORE_LOGIN_DELAY_MS".to_owned(),
                        format!("expected milliseconds, got {raw:?}"),
                    )
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
        };

        let defaults = PaymentDetails::default();
        let payment = PaymentDetails {
            card_number: std::env::var("ADSTORE_CARD_NUMBER").unwrap_or(defaults.card_number),
            card_holder: std::env::var("ADSTORE_CARD_HOLDER").unwrap_or(defaults.card_holder),
        };

        Ok(Self {
            data_path,
            login_delay,
            payment,
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("adstore.json"),
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            payment: PaymentDetails::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.data_path, PathBuf::from("adstore.json"));
        assert_eq!(config.login_delay, Duration::from_millis(1000));
        assert_eq!(config.payment.card_holder, "AdStore");
    }
}
