use crate::utils::error::{BalanceError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address pattern is valid"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Strips surrounding Unicode whitespace and the byte order mark.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Returns true iff `input`, once trimmed, is `0x` followed by 40 hex digits.
pub fn is_valid_address(input: &str) -> bool {
    ADDRESS_RE.is_match(trim_input(input))
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BalanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BalanceError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BalanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BalanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BalanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_address("0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe"));
        assert!(is_valid_address("0x0000000000000000000000000000000000000000"));
        assert!(is_valid_address("0xABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD"));
        assert!(is_valid_address("  0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae\n"));
    }

    #[test]
    fn test_trim_strips_bom_and_unicode_spaces() {
        assert!(is_valid_address("\u{FEFF}0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"));
        assert!(is_valid_address("\u{00A0}0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae\u{2003}"));
        assert_eq!(trim_input("\u{FEFF}\t0xabc \u{FEFF}"), "0xabc");
        // Only the ends are trimmed
        assert!(!is_valid_address("0xde0b295669a9fd93d5f2\u{FEFF}8d9ec85e40f4cb697bae"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("not-an-address"));
        // 39 and 41 hex digits
        assert!(!is_valid_address("0xde0b295669a9fd93d5f28d9ec85e40f4cb697ba"));
        assert!(!is_valid_address("0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae1"));
        assert!(!is_valid_address("de0b295669a9fd93d5f28d9ec85e40f4cb697bae00"));
        assert!(!is_valid_address("0Xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"));
        assert!(!is_valid_address("0xde0b295669a9fd93d5f28d9ec85e40f4cb697bag"));
        assert!(!is_valid_address("0xde0b2956 9a9fd93d5f28d9ec85e40f4cb697bae"));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("explorer_endpoint", "https://api.etherscan.io/api").is_ok());
        assert!(validate_url("explorer_endpoint", "http://localhost:8080/api").is_ok());
        assert!(validate_url("explorer_endpoint", "").is_err());
        assert!(validate_url("explorer_endpoint", "invalid-url").is_err());
        assert!(validate_url("explorer_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("request_timeout_secs", 30u64, 1, 300).is_ok());
        assert!(validate_range("request_timeout_secs", 0u64, 1, 300).is_err());
        assert!(validate_range("request_timeout_secs", 301u64, 1, 300).is_err());
    }
}
