pub mod client;
pub mod converter;
pub mod handler;

pub use crate::domain::model::{
    Address, BalanceResponse, HandlerResult, RawBalance, UpstreamEnvelope,
};
pub use crate::domain::ports::{BalanceSource, ConfigProvider};
pub use crate::utils::error::Result;
