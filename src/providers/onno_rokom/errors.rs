//! Error types for the Onno Rokom provider.

use crate::errors::GatewayError;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Delimiter the service places after every status code in its result text.
const CODE_DELIMITER: &str = "||";

/// Error codes embedded by the Onno Rokom service in its result strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnnoRokomErrorCode {
    /// A required request parameter was empty.
    ParameterContentMissing,
    /// Wrong user name or password.
    InvalidCredentials,
    /// Account balance does not cover the request.
    NotEnoughBalance,
    /// Destination number is malformed.
    InvalidDestination,
    /// No operator serves the destination number.
    OperatorNotFound,
    /// Mask name not approved for the account.
    InvalidMaskName,
    /// Message text exceeds the allowed length.
    SmsBodyTooLong,
    /// Campaign name already used.
    DuplicateCampaignName,
    /// Message text rejected.
    InvalidMessage,
    /// Too many messages in one request.
    TooManyRequests,
}

impl OnnoRokomErrorCode {
    /// Every known code, in scan order.
    pub const ALL: [Self; 10] = [
        Self::ParameterContentMissing,
        Self::InvalidCredentials,
        Self::NotEnoughBalance,
        Self::InvalidDestination,
        Self::OperatorNotFound,
        Self::InvalidMaskName,
        Self::SmsBodyTooLong,
        Self::DuplicateCampaignName,
        Self::InvalidMessage,
        Self::TooManyRequests,
    ];

    /// Numeric code as sent by the service.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ParameterContentMissing => "1901",
            Self::InvalidCredentials => "1902",
            Self::NotEnoughBalance => "1903",
            Self::InvalidDestination => "1905",
            Self::OperatorNotFound => "1906",
            Self::InvalidMaskName => "1907",
            Self::SmsBodyTooLong => "1908",
            Self::DuplicateCampaignName => "1909",
            Self::InvalidMessage => "1910",
            Self::TooManyRequests => "1911",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ParameterContentMissing => "Parameter content missing",
            Self::InvalidCredentials => "Invalid user/pass",
            Self::NotEnoughBalance => "Not enough balance",
            Self::InvalidDestination => "Invalid destination number",
            Self::OperatorNotFound => "Operator Not found",
            Self::InvalidMaskName => "Invalid mask Name",
            Self::SmsBodyTooLong => "Sms body too long",
            Self::DuplicateCampaignName => "Duplicate campaign Name",
            Self::InvalidMessage => "Invalid message",
            Self::TooManyRequests => {
                "Too many Sms Request Please try less then 10000 in one request"
            }
        }
    }

    /// Look up a code by its numeric string.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code.trim())
    }

    /// Check whether `response` carries this code's `<code>||` token.
    fn is_in(&self, response: &str) -> bool {
        let mut token = String::with_capacity(6);
        token.push_str(self.code());
        token.push_str(CODE_DELIMITER);
        response.contains(&token)
    }
}

impl Display for OnnoRokomErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rejection reported by the Onno Rokom service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Onno Rokom service error: code={code}, description={description}")]
pub struct OnnoRokomServiceError {
    /// Error code from the service.
    pub code: OnnoRokomErrorCode,
    /// Human-readable description.
    pub description: String,
    /// Raw result text.
    pub raw: String,
}

impl OnnoRokomServiceError {
    /// Create new service error from code and raw result text.
    pub fn new(code: OnnoRokomErrorCode, raw: impl Into<String>) -> Self {
        Self {
            code,
            description: code.description().to_string(),
            raw: raw.into(),
        }
    }
}

/// Scan a result string for an embedded error code.
///
/// Codes are tried in [`OnnoRokomErrorCode::ALL`] order and the first whose
/// `<code>||` token occurs anywhere in `response` wins. `None` means the
/// response is treated as a success.
pub fn parse_response_for_error(response: &str) -> Option<OnnoRokomServiceError> {
    let code = OnnoRokomErrorCode::ALL
        .into_iter()
        .find(|code| code.is_in(response))?;
    let error = OnnoRokomServiceError::new(code, response);

    #[cfg(feature = "tracing")]
    warn!(
        code = %error.code,
        description = %error.description,
        raw = %response,
        "Onno Rokom service returned error"
    );

    Some(error)
}

/// Main error type for Onno Rokom client operations.
#[derive(Debug, Error)]
pub enum OnnoRokomError {
    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// Endpoint is not a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[source] url::ParseError),

    /// Failed to send HTTP request.
    #[error("Failed to send HTTP request: {0}")]
    HttpRequest(#[from] reqwest_middleware::Error),

    /// Failed to read response body.
    #[error("Failed to read response: {0}")]
    ReadResponse(#[source] reqwest::Error),

    /// Non-success HTTP status without a SOAP fault.
    #[error("Unexpected HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Response body is not a SOAP envelope.
    #[error("Invalid SOAP envelope: {0}")]
    InvalidEnvelope(String),

    /// SOAP body lacks the expected result element.
    #[error("SOAP response has no <{element}> element")]
    MissingResult { element: String },

    /// The service answered with a SOAP fault.
    #[error("SOAP fault {code}: {message}")]
    SoapFault { code: String, message: String },

    /// The service rejected the request.
    #[error("Onno Rokom service error: {0}")]
    Service(#[source] OnnoRokomServiceError),
}

pub type Result<T> = std::result::Result<T, OnnoRokomError>;

impl OnnoRokomError {
    /// Returns true when the remote call itself failed, as opposed to the
    /// service rejecting the request.
    pub fn is_transport_fault(&self) -> bool {
        !matches!(self, Self::Service(_))
    }

    /// Code reported through [`GatewayError`].
    pub fn code(&self) -> String {
        match self {
            Self::BuildHttpClient(_) => "build_http_client".to_string(),
            Self::InvalidEndpoint(_) => "invalid_endpoint".to_string(),
            Self::HttpRequest(_) => "http_request".to_string(),
            Self::ReadResponse(_) => "read_response".to_string(),
            Self::HttpStatus { .. } => "http_status".to_string(),
            Self::InvalidEnvelope(_) => "invalid_envelope".to_string(),
            Self::MissingResult { .. } => "missing_result".to_string(),
            Self::SoapFault { code, .. } => code.clone(),
            Self::Service(error) => error.code.code().to_string(),
        }
    }
}

impl From<OnnoRokomError> for GatewayError {
    fn from(error: OnnoRokomError) -> Self {
        let code = error.code();
        let message = match &error {
            OnnoRokomError::SoapFault { message, .. } => message.clone(),
            OnnoRokomError::Service(service) => service.description.clone(),
            other => other.to_string(),
        };
        GatewayError::new(code, message)
    }
}
