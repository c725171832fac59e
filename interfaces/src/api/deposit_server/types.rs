use std::{fmt, str::FromStr};

use alloy::primitives::B256;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const INVALID_REQUEST_PARAMETERS: &str = "Invalid request parameters";
pub const DEPOSIT_FAILED: &str = "Deposit failed";

/// Which asset a deposit moves. On the wire this is `0` for the native asset
/// and `1` for the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepositOption {
    Native,
    Token,
}

impl DepositOption {
    pub fn as_u8(self) -> u8 {
        match self {
            DepositOption::Native => 0,
            DepositOption::Token => 1,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(DepositOption::Native),
            1 => Some(DepositOption::Token),
            _ => None,
        }
    }

    /// Label shown in the deposit form.
    pub fn label(self) -> &'static str {
        match self {
            DepositOption::Native => "ETH",
            DepositOption::Token => "USDT",
        }
    }
}

impl fmt::Display for DepositOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepositOption::Native => write!(f, "native"),
            DepositOption::Token => write!(f, "token"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown deposit option: {0}")]
pub struct ParseDepositOptionError(String);

impl FromStr for DepositOption {
    type Err = ParseDepositOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "native" | "eth" => Ok(DepositOption::Native),
            "1" | "token" | "usdt" => Ok(DepositOption::Token),
            _ => Err(ParseDepositOptionError(s.to_string())),
        }
    }
}

/// Body of `POST /deposit`.
///
/// Both fields are kept as raw JSON so that the server, not the extractor,
/// decides what counts as a malformed request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_option: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
}

impl DepositRequest {
    /// Request with the amount forwarded verbatim as text.
    pub fn new(option: DepositOption, amount: &str) -> Self {
        Self {
            deposit_option: Some(Value::from(option.as_u8())),
            amount: Some(Value::String(amount.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResponse {
    pub success: bool,
    pub tx_hash: B256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn invalid_request() -> Self {
        Self {
            error: INVALID_REQUEST_PARAMETERS.to_string(),
            details: None,
        }
    }

    pub fn deposit_failed(details: impl Into<String>) -> Self {
        Self {
            error: DEPOSIT_FAILED.to_string(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deposit_option_parse() {
        assert_eq!("eth".parse::<DepositOption>().unwrap(), DepositOption::Native);
        assert_eq!("Token".parse::<DepositOption>().unwrap(), DepositOption::Token);
        assert_eq!("1".parse::<DepositOption>().unwrap(), DepositOption::Token);
        assert!("2".parse::<DepositOption>().is_err());
        assert_eq!(DepositOption::from_u8(2), None);
    }

    #[test]
    fn test_request_wire_format() {
        let request = DepositRequest::new(DepositOption::Token, "50");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "depositOption": 1, "amount": "50" }));
    }

    #[test]
    fn test_request_missing_fields() {
        let request: DepositRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.deposit_option.is_none());
        assert!(request.amount.is_none());
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let value = serde_json::to_value(ErrorResponse::invalid_request()).unwrap();
        assert_eq!(value, json!({ "error": "Invalid request parameters" }));

        let value = serde_json::to_value(ErrorResponse::deposit_failed("nonce too low")).unwrap();
        assert_eq!(
            value,
            json!({ "error": "Deposit failed", "details": "nonce too low" })
        );
    }

    #[test]
    fn test_deposit_response_hash_is_hex() {
        let response = DepositResponse {
            success: true,
            tx_hash: B256::repeat_byte(0xab),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(
            value["txHash"],
            json!(format!("0x{}", "ab".repeat(32)))
        );
    }
}
