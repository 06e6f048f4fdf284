use crate::core::converter::format_ether;
use crate::core::{Address, BalanceSource, ConfigProvider, HandlerResult};
use crate::utils::error::{BalanceError, ErrorCategory, Result, API_KEY_ENV};

/// Validates the request, queries the balance source once and formats the result.
pub struct BalanceHandler<S: BalanceSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: BalanceSource, C: ConfigProvider> BalanceHandler<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Every outcome, including internal faults, becomes a status plus JSON body.
    pub async fn handle(&self, body: Option<&serde_json::Value>) -> HandlerResult {
        match self.balance_of(body).await {
            Ok(balance_ether) => HandlerResult::success(balance_ether),
            Err(e) => {
                match e.category() {
                    ErrorCategory::Input => tracing::debug!("Rejected request: {}", e),
                    ErrorCategory::Upstream => tracing::warn!("Upstream failure: {}", e),
                    ErrorCategory::Configuration => tracing::error!("❌ {}", e),
                    ErrorCategory::Internal => tracing::error!("❌ Unexpected error: {}", e),
                }
                HandlerResult::failure(&e)
            }
        }
    }

    async fn balance_of(&self, body: Option<&serde_json::Value>) -> Result<String> {
        let input = body
            .and_then(|b| b.get("address"))
            .and_then(|a| a.as_str())
            .ok_or(BalanceError::MissingAddress)?;

        let address = Address::parse(input)?;

        // 啟動時注入的憑證，每次請求都檢查
        let api_key = self
            .config
            .api_key()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| BalanceError::MissingCredential {
                variable: API_KEY_ENV.to_string(),
            })?;

        let raw = self
            .source
            .fetch_balance(&address, api_key)
            .await
            .map_err(BalanceError::Upstream)?;

        let balance_ether = format_ether(&raw);
        tracing::info!("Balance of {}: {} ETH", address, balance_ether);
        Ok(balance_ether)
    }

    /// Convenience for callers that only have the raw request bytes.
    /// A body that is not valid JSON counts as an absent body.
    pub async fn handle_bytes(&self, body: &[u8]) -> HandlerResult {
        let parsed = serde_json::from_slice::<serde_json::Value>(body).ok();
        if parsed.is_none() && !body.is_empty() {
            tracing::debug!("Request body is not valid JSON");
        }
        self.handle(parsed.as_ref()).await
    }
}
