use thiserror::Error;

pub const API_KEY_ENV: &str = "ETHERSCAN_API_KEY";
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to fetch balance.";

/// Outcome of a single call to the balance service.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Etherscan request failed with status {0}.")]
    UpstreamUnavailable(u16),

    #[error("{0}")]
    UpstreamRejected(String),

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("Missing 'address' in request body.")]
    MissingAddress,

    #[error("Invalid Ethereum address format.")]
    InvalidAddress,

    #[error("Server misconfiguration: {variable} not set.")]
    MissingCredential { variable: String },

    #[error(transparent)]
    Upstream(#[from] ClientError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Upstream,
    Internal,
}

impl BalanceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BalanceError::MissingAddress | BalanceError::InvalidAddress => ErrorCategory::Input,
            BalanceError::MissingCredential { .. }
            | BalanceError::ConfigError { .. }
            | BalanceError::MissingConfigError { .. }
            | BalanceError::InvalidConfigValueError { .. }
            | BalanceError::TomlError(_) => ErrorCategory::Configuration,
            BalanceError::Upstream(ClientError::UpstreamUnavailable(_))
            | BalanceError::Upstream(ClientError::UpstreamRejected(_)) => ErrorCategory::Upstream,
            BalanceError::Upstream(_) | BalanceError::IoError(_) => ErrorCategory::Internal,
        }
    }

    /// HTTP status reported to the caller.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Input => 400,
            ErrorCategory::Upstream => 502,
            ErrorCategory::Configuration | ErrorCategory::Internal => 500,
        }
    }

    /// Message safe to return to the caller. Internal faults never expose their detail.
    pub fn public_message(&self) -> String {
        match self {
            BalanceError::MissingAddress
            | BalanceError::InvalidAddress
            | BalanceError::MissingCredential { .. }
            | BalanceError::Upstream(ClientError::UpstreamUnavailable(_))
            | BalanceError::Upstream(ClientError::UpstreamRejected(_)) => self.to_string(),
            _ => "Unexpected server error.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BalanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_bad_request() {
        assert_eq!(BalanceError::MissingAddress.status_code(), 400);
        assert_eq!(BalanceError::InvalidAddress.status_code(), 400);
        assert_eq!(
            BalanceError::InvalidAddress.public_message(),
            "Invalid Ethereum address format."
        );
    }

    #[test]
    fn test_missing_credential_message() {
        let err = BalanceError::MissingCredential {
            variable: API_KEY_ENV.to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.public_message(),
            "Server misconfiguration: ETHERSCAN_API_KEY not set."
        );
    }

    #[test]
    fn test_upstream_errors_map_to_bad_gateway() {
        let unavailable = BalanceError::from(ClientError::UpstreamUnavailable(503));
        assert_eq!(unavailable.status_code(), 502);
        assert_eq!(
            unavailable.public_message(),
            "Etherscan request failed with status 503."
        );

        let rejected = BalanceError::from(ClientError::UpstreamRejected("NOTOK".to_string()));
        assert_eq!(rejected.status_code(), 502);
        assert_eq!(rejected.public_message(), "NOTOK");
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let decode = serde_json::from_str::<serde_json::Value>("{not json")
            .map_err(ClientError::from)
            .unwrap_err();
        let err = BalanceError::from(decode);
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), "Unexpected server error.");

        let config = BalanceError::ConfigError {
            message: "bad toml at line 3".to_string(),
        };
        assert_eq!(config.public_message(), "Unexpected server error.");
    }
}
