//! Error type shared by every gateway implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured failure returned by [`Gateway`](crate::Gateway) operations.
///
/// Every provider maps its own failures into this shape so callers can show
/// the message directly and key off the code without knowing which vendor
/// produced it.
///
/// - Vendor rejections keep the vendor's code (e.g. `"1903"` for Onno Rokom).
/// - Transport faults carry the fault's native code when the remote side
///   supplied one (a SOAP `faultcode`), otherwise a symbolic code such as
///   `"http_request"`.
///
/// # Examples
///
/// ```rust
/// use sms_gateways::GatewayError;
///
/// let error = GatewayError::new("1903", "Not enough balance");
/// assert_eq!(error.code(), "1903");
/// assert_eq!(error.to_string(), "1903: Not enough balance");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct GatewayError {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable message, suitable for direct display.
    pub message: String,
}

impl GatewayError {
    /// Create a new gateway error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The error code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_code_and_message() {
        let error = GatewayError::new("1908", "Sms body too long");
        assert_eq!(error.to_string(), "1908: Sms body too long");
    }

    #[test]
    fn test_serializes_as_code_and_message() {
        let error = GatewayError::new("soap:Client", "Server was unable to read request.");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": "soap:Client",
                "message": "Server was unable to read request."
            })
        );
    }
}
