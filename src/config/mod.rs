#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod toml_config;

use crate::core::client::DEFAULT_EXPLORER_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Resolved runtime configuration shared by the server and the one-shot CLI.
#[derive(Clone)]
pub struct AppConfig {
    pub addr: String,
    pub explorer_endpoint: String,
    pub api_key: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_BIND_ADDR.to_string(),
            explorer_endpoint: DEFAULT_EXPLORER_ENDPOINT.to_string(),
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("addr", &self.addr)
            .field("explorer_endpoint", &self.explorer_endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl ConfigProvider for AppConfig {
    fn explorer_endpoint(&self) -> &str {
        &self.explorer_endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn request_timeout_secs(&self) -> Option<u64> {
        self.request_timeout_secs
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("explorer_endpoint", &self.explorer_endpoint)?;
        if let Some(secs) = self.request_timeout_secs {
            validate_range("request_timeout_secs", secs, 1, 300)?;
        }

        // 缺少 API key 不阻止啟動，請求時回傳 500
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            tracing::warn!("⚠️ No API key configured, balance requests will fail");
        }

        Ok(())
    }
}
