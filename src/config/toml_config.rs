use crate::utils::error::{BalanceError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Optional configuration file. The API key itself never lives here, only the
/// name of the environment variable that holds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub explorer: ExplorerSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub addr: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerSection {
    pub endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub api_key_env: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${EXPLORER_ENDPOINT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        if let Some(addr) = &self.server.addr {
            validate_non_empty_string("server.addr", addr)?;
        }
        if let Some(endpoint) = &self.explorer.endpoint {
            validate_url("explorer.endpoint", endpoint)?;
        }
        if let Some(secs) = self.explorer.request_timeout_secs {
            validate_range("explorer.request_timeout_secs", secs, 1, 300)?;
        }
        if let Some(var) = &self.explorer.api_key_env {
            if var.trim().is_empty() || var.contains('=') {
                return Err(BalanceError::InvalidConfigValueError {
                    field: "explorer.api_key_env".to_string(),
                    value: var.clone(),
                    reason: "Must be a valid environment variable name".to_string(),
                });
            }
        }
        Ok(())
    }
}
