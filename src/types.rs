//! Core types shared by gateway implementations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Display, Formatter};

// =============================================================================
// Credentials
// =============================================================================

/// Credentials for an SMS provider account.
///
/// Every field defaults to an empty string when the source record lacks it,
/// so a partially configured provider still yields a complete record.
///
/// # Example
///
/// ```rust
/// use sms_gateways::Credentials;
///
/// let creds = Credentials::from_value(&serde_json::json!({ "username": "shop" }));
/// assert_eq!(creds.username, "shop");
/// assert_eq!(creds.password, "");
/// assert_eq!(creds.mask_name, "");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Account user name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Sender mask (alphanumeric sender id) approved for the account.
    pub mask_name: String,
}

impl Credentials {
    /// Create credentials from their parts.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        mask_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            mask_name: mask_name.into(),
        }
    }

    /// Build credentials from a loosely typed settings record.
    ///
    /// Missing keys, `null` and non-scalar values become empty strings.
    /// Numbers are rendered with their JSON representation.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| match value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        };

        Self {
            username: field("username"),
            password: field("password"),
            mask_name: field("mask_name"),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("mask_name", &self.mask_name)
            .finish()
    }
}

/// Credentials confirmed usable by a successful `validate` call.
///
/// This is the `{username, password}` pair exactly as it was supplied; nothing
/// in it is derived from the remote response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedCredentials {
    pub username: String,
    pub password: String,
}

impl From<&Credentials> for ValidatedCredentials {
    fn from(creds: &Credentials) -> Self {
        Self {
            username: creds.username.clone(),
            password: creds.password.clone(),
        }
    }
}

impl fmt::Debug for ValidatedCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Settings schema
// =============================================================================

/// Input type of a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked input.
    Password,
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Password => write!(f, "password"),
        }
    }
}

/// One configurable credential, as rendered by a settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsField {
    /// Settings key the value is stored under.
    pub id: String,
    /// Display label.
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Currently stored value, empty when unset.
    pub value: String,
    /// Help text shown next to the input, may be empty.
    pub help: String,
}

impl SettingsField {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        field_type: FieldType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type,
            value: value.into(),
            help: String::new(),
        }
    }

    /// Attach help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}

// =============================================================================
// MobileNumber
// =============================================================================

/// Destination mobile number, passed to the provider as given (trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Create a new MobileNumber.
    pub fn new(number: impl AsRef<str>) -> Self {
        Self(number.as_ref().trim().to_string())
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MobileNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for MobileNumber {
    fn from(number: String) -> Self {
        Self::new(number)
    }
}

impl From<&str> for MobileNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

// =============================================================================
// ValidateRequest
// =============================================================================

/// Parameters of an inbound "validate credentials" request.
///
/// Providers look up their own credential object by namespace, so a single
/// request body can carry settings for several providers at once.
///
/// # Example
///
/// ```rust
/// use sms_gateways::ValidateRequest;
///
/// let request = ValidateRequest::new().with_param(
///     "onno_rokom",
///     serde_json::json!({ "username": "shop", "password": "secret" }),
/// );
///
/// let creds = request.credentials("onno_rokom");
/// assert_eq!(creds.username, "shop");
/// assert_eq!(creds.mask_name, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidateRequest {
    params: Map<String, Value>,
}

impl ValidateRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Get a raw parameter.
    pub fn get_param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Extract the credential object stored under `namespace`.
    ///
    /// A missing parameter yields empty credentials.
    pub fn credentials(&self, namespace: &str) -> Credentials {
        self.get_param(namespace)
            .map(Credentials::from_value)
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for ValidateRequest {
    fn from(params: Map<String, Value>) -> Self {
        Self { params }
    }
}
