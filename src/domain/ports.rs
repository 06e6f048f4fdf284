use crate::domain::model::{Address, RawBalance};
use crate::utils::error::ClientError;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn explorer_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn request_timeout_secs(&self) -> Option<u64>;
}

#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn fetch_balance(
        &self,
        address: &Address,
        api_key: &str,
    ) -> std::result::Result<RawBalance, ClientError>;
}
