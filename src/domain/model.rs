use crate::utils::error::BalanceError;
use crate::utils::validation::{is_valid_address, trim_input};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, trimmed `0x`-prefixed 20-byte hex address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    pub fn parse(input: &str) -> Result<Self, BalanceError> {
        if is_valid_address(input) {
            Ok(Self(trim_input(input).to_string()))
        } else {
            Err(BalanceError::InvalidAddress)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Balance in wei exactly as returned by the upstream, not yet validated as digits.
pub type RawBalance = String;

/// Response wrapper of an Etherscan-compatible `account/balance` call.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl UpstreamEnvelope {
    pub fn is_success(&self) -> bool {
        match &self.status {
            Some(serde_json::Value::String(s)) => s == "1",
            Some(serde_json::Value::Number(n)) => n.as_u64() == Some(1),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BalanceResponse {
    Success {
        #[serde(rename = "balanceEther")]
        balance_ether: String,
    },
    Failure {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResult {
    pub status: u16,
    pub body: BalanceResponse,
}

impl HandlerResult {
    pub fn success(balance_ether: String) -> Self {
        Self {
            status: 200,
            body: BalanceResponse::Success { balance_ether },
        }
    }

    pub fn failure(error: &BalanceError) -> Self {
        Self {
            status: error.status_code(),
            body: BalanceResponse::Failure {
                error: error.public_message(),
            },
        }
    }
}
