pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, ExplorerArgs};

pub use config::AppConfig;
pub use crate::core::{client::EtherscanClient, handler::BalanceHandler};
pub use server::BalanceServer;
pub use utils::error::{BalanceError, ClientError, Result};
