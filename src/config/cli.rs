use crate::config::toml_config::TomlConfig;
use crate::config::{AppConfig, DEFAULT_BIND_ADDR};
use crate::core::client::DEFAULT_EXPLORER_ENDPOINT;
use crate::utils::error::{Result, API_KEY_ENV};
use crate::utils::validation::Validate;
use clap::{Args, Parser};

/// Server binary arguments: the listen address plus the shared explorer options.
#[derive(Debug, Clone, Parser)]
#[command(name = "eth-balance")]
#[command(about = "HTTP service returning the ether balance of an address")]
pub struct CliConfig {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR")]
    pub addr: Option<String>,

    #[command(flatten)]
    pub explorer: ExplorerArgs,
}

/// Options every binary needs to reach the balance service.
#[derive(Debug, Clone, Args)]
pub struct ExplorerArgs {
    /// Etherscan-compatible balance endpoint
    #[arg(long, env = "EXPLORER_ENDPOINT")]
    pub explorer_endpoint: Option<String>,

    /// Block explorer API key
    #[arg(long, env = "ETHERSCAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Upstream request timeout; the transport default applies when unset
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<AppConfig> {
        self.explorer.resolve_with_addr(self.addr.as_deref())
    }
}

impl ExplorerArgs {
    pub fn resolve(&self) -> Result<AppConfig> {
        self.resolve_with_addr(None)
    }

    /// Merges the optional TOML file under the command line. Flags win over the file.
    fn resolve_with_addr(&self, addr: Option<&str>) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let api_key = match (&self.api_key, &file.explorer.api_key_env) {
            (Some(key), _) => Some(key.clone()),
            (None, Some(var)) => std::env::var(var).ok(),
            (None, None) => std::env::var(API_KEY_ENV).ok(),
        };

        let config = AppConfig {
            addr: addr
                .map(str::to_string)
                .or(file.server.addr)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            explorer_endpoint: self
                .explorer_endpoint
                .clone()
                .or(file.explorer.endpoint)
                .unwrap_or_else(|| DEFAULT_EXPLORER_ENDPOINT.to_string()),
            api_key,
            request_timeout_secs: self
                .request_timeout_secs
                .or(file.explorer.request_timeout_secs),
        };

        config.validate()?;
        Ok(config)
    }
}
