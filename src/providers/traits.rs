//! Gateway trait definition.

use crate::errors::Result;
use crate::types::{Credentials, MobileNumber, SettingsField, ValidateRequest, ValidatedCredentials};
use async_trait::async_trait;

/// Core trait that all SMS gateways must implement.
///
/// A gateway exposes:
/// - Identity and display metadata (`id`, `name`, `description`, `logo`)
/// - The settings schema needed to configure it, with stored values
/// - Sending a single message
/// - Validating a set of credentials against the remote service
///
/// The trait is object safe, so gateways can be kept as `Arc<dyn Gateway>`
/// in a [`GatewayRegistry`](crate::GatewayRegistry).
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateways::{Gateway, MobileNumber, Result};
///
/// struct MyGateway;
///
/// #[async_trait::async_trait]
/// impl Gateway for MyGateway {
///     fn id(&self) -> &str { "my_gateway" }
///     fn name(&self) -> String { "My Gateway".into() }
///     fn description(&self) -> String { "Send SMS with My Gateway.".into() }
///     fn logo(&self) -> String { "/assets/images/my.png".into() }
///     fn get_settings(&self) -> Vec<SettingsField> { vec![] }
///
///     async fn send(&self, to: &MobileNumber, message: &str) -> Result<()> {
///         // Deliver the message
///     }
///
///     async fn validate(&self, credentials: &Credentials) -> Result<ValidatedCredentials> {
///         // Check the credentials against the remote service
///     }
/// }
/// ```
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Stable identifier, also the settings namespace for this gateway.
    fn id(&self) -> &str;

    /// Human-readable provider name.
    fn name(&self) -> String;

    /// Usage and help text. May contain HTML links.
    fn description(&self) -> String;

    /// URL or path of the provider logo.
    fn logo(&self) -> String;

    /// Describe every configurable field, in display order, with its
    /// currently stored value.
    fn get_settings(&self) -> Vec<SettingsField>;

    /// Send `message` to `to` using the stored credentials.
    async fn send(&self, to: &MobileNumber, message: &str) -> Result<()>;

    /// Verify that `credentials` are usable against the remote service.
    ///
    /// On success the username/password pair is returned unchanged.
    async fn validate(&self, credentials: &Credentials) -> Result<ValidatedCredentials>;

    /// Validate the credentials carried by an inbound request under this
    /// gateway's [`id`](Gateway::id).
    async fn validate_request(&self, request: &ValidateRequest) -> Result<ValidatedCredentials> {
        let credentials = request.credentials(self.id());
        self.validate(&credentials).await
    }
}
