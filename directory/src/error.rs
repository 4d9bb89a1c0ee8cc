use serde::Serialize;
use thiserror::Error;

/// Why a customer fetch produced no data.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    /// Request never completed: connection refused, DNS, timeout, truncated body
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Service answered outside the 2xx range
    #[error("customer service returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not JSON or did not carry a `data` field of customers
    #[error("unexpected customer payload: {message}")]
    Payload { message: String },
}

impl FetchError {
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }

    pub fn payload(err: serde_json::Error) -> Self {
        Self::Payload {
            message: err.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Payload { .. } => "payload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_serializes_with_kind_tag() {
        let value = serde_json::to_value(FetchError::Status { status: 500 }).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "status", "status": 500 }));
        assert_eq!(
            FetchError::Status { status: 500 }.to_string(),
            "customer service returned HTTP 500"
        );
    }

    #[test]
    fn payload_error_keeps_parser_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = FetchError::payload(parse_err);
        assert_eq!(err.kind(), "payload");
        assert!(err.to_string().starts_with("unexpected customer payload:"));
    }
}
