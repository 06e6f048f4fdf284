use crate::core::{Address, BalanceSource, ConfigProvider, RawBalance, UpstreamEnvelope};
use crate::utils::error::{ClientError, DEFAULT_REJECTION_MESSAGE};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_EXPLORER_ENDPOINT: &str = "https://api.etherscan.io/api";

/// Etherscan-compatible `account/balance` client.
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    endpoint: String,
    client: Client,
}

impl EtherscanClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs() {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            endpoint: config.explorer_endpoint().to_string(),
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl BalanceSource for EtherscanClient {
    async fn fetch_balance(
        &self,
        address: &Address,
        api_key: &str,
    ) -> Result<RawBalance, ClientError> {
        tracing::debug!("Requesting balance for {} from {}", address, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("module", "account"),
                ("action", "balance"),
                ("address", address.as_str()),
                ("tag", "latest"),
                ("apikey", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);
        if !status.is_success() {
            return Err(ClientError::UpstreamUnavailable(status.as_u16()));
        }

        let body = response.bytes().await?;
        let envelope: UpstreamEnvelope = serde_json::from_slice(&body)?;

        let result = match &envelope.result {
            Some(serde_json::Value::String(result)) if envelope.is_success() && !result.is_empty() => {
                result.clone()
            }
            _ => {
                let message = envelope
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
                return Err(ClientError::UpstreamRejected(message));
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const ADDRESS: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";

    fn address() -> Address {
        Address::parse(ADDRESS).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_balance_sends_expected_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api")
                .query_param("module", "account")
                .query_param("action", "balance")
                .query_param("address", ADDRESS)
                .query_param("tag", "latest")
                .query_param("apikey", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": "1",
                    "message": "OK",
                    "result": "1000000000000000000"
                }));
        });

        let client = EtherscanClient::new(server.url("/api"));
        let balance = client.fetch_balance(&address(), "test-key").await.unwrap();

        api_mock.assert();
        assert_eq!(balance, "1000000000000000000");
    }

    #[tokio::test]
    async fn test_non_success_status_is_unavailable() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(503);
        });

        let client = EtherscanClient::new(server.url("/api"));
        let result = client.fetch_balance(&address(), "test-key").await;

        api_mock.assert();
        assert!(matches!(result, Err(ClientError::UpstreamUnavailable(503))));
    }

    #[tokio::test]
    async fn test_rejected_envelope_uses_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(200).json_body(serde_json::json!({
                "status": "0",
                "message": "NOTOK",
                "result": "Invalid API Key"
            }));
        });

        let client = EtherscanClient::new(server.url("/api"));
        match client.fetch_balance(&address(), "bad-key").await {
            Err(ClientError::UpstreamRejected(message)) => assert_eq!(message, "NOTOK"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_result_without_message_uses_default() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(200).json_body(serde_json::json!({ "status": "1" }));
        });

        let client = EtherscanClient::new(server.url("/api"));
        match client.fetch_balance(&address(), "test-key").await {
            Err(ClientError::UpstreamRejected(message)) => {
                assert_eq!(message, DEFAULT_REJECTION_MESSAGE)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = EtherscanClient::new(server.url("/api"));
        let result = client.fetch_balance(&address(), "test-key").await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_result_is_returned_unconverted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(200).json_body(serde_json::json!({
                "status": "1",
                "message": "OK",
                "result": "0042"
            }));
        });

        let client = EtherscanClient::new(server.url("/api"));
        let balance = client.fetch_balance(&address(), "test-key").await.unwrap();
        assert_eq!(balance, "0042");
    }

    #[tokio::test]
    async fn test_empty_result_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(200)
                .json_body(serde_json::json!({ "status": "1", "result": "" }));
        });

        let client = EtherscanClient::new(server.url("/api"));
        match client.fetch_balance(&address(), "test-key").await {
            Err(ClientError::UpstreamRejected(message)) => {
                assert_eq!(message, DEFAULT_REJECTION_MESSAGE)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
