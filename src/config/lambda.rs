use crate::config::AppConfig;
use crate::core::client::DEFAULT_EXPLORER_ENDPOINT;
use crate::utils::error::{BalanceError, Result, API_KEY_ENV};
use std::env;

pub struct LambdaConfig;

impl LambdaConfig {
    pub fn from_env() -> Result<AppConfig> {
        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                BalanceError::InvalidConfigValueError {
                    field: "REQUEST_TIMEOUT_SECS".to_string(),
                    value: raw.clone(),
                    reason: "Must be a positive integer".to_string(),
                }
            })?),
            Err(_) => None,
        };

        Ok(AppConfig {
            addr: String::new(),
            explorer_endpoint: env::var("EXPLORER_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_EXPLORER_ENDPOINT.to_string()),
            api_key: env::var(API_KEY_ENV).ok(),
            request_timeout_secs,
        })
    }
}
