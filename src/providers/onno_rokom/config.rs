//! Onno Rokom provider configuration.

use std::time::Duration;
use url::Url;

/// Default Onno Rokom SOAP service URL.
pub const DEFAULT_API_URL: &str = "https://api2.onnorokomsms.com/sendsms.asmx";

/// Path of the provider logo below the assets URL.
pub const LOGO_PATH: &str = "/assets/images/onnorokom.png";

/// How `send` treats failures of the remote call itself.
///
/// Rejections reported by the service (error codes in the result text) are
/// always returned as errors. `validate` always surfaces transport faults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportFaultPolicy {
    /// Return transport faults as errors.
    #[default]
    Surface,
    /// Log transport faults and report the send as successful.
    Suppress,
}

/// Configuration for the Onno Rokom gateway.
#[derive(Debug, Clone)]
pub struct OnnoRokomConfig {
    /// SOAP service endpoint.
    pub endpoint: Url,
    /// Request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
    /// Base URL the logo path is appended to.
    pub assets_url: String,
    /// Handling of transport faults in `send`.
    pub transport_faults: TransportFaultPolicy,
}

impl Default for OnnoRokomConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_API_URL).expect("Invalid default URL"),
            timeout: None,
            assets_url: String::new(),
            transport_faults: TransportFaultPolicy::default(),
        }
    }
}

impl OnnoRokomConfig {
    /// Create a new builder for OnnoRokomConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sms_gateways::onno_rokom::{OnnoRokomConfig, TransportFaultPolicy};
    /// use std::time::Duration;
    ///
    /// let config = OnnoRokomConfig::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .assets_url("https://example.com/wp-content/plugins/texty")
    ///     .transport_faults(TransportFaultPolicy::Suppress)
    ///     .build();
    ///
    /// assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    /// assert_eq!(
    ///     config.logo_url(),
    ///     "https://example.com/wp-content/plugins/texty/assets/images/onnorokom.png"
    /// );
    /// ```
    pub fn builder() -> OnnoRokomConfigBuilder {
        OnnoRokomConfigBuilder::default()
    }

    /// Full logo URL.
    pub fn logo_url(&self) -> String {
        format!("{}{}", self.assets_url.trim_end_matches('/'), LOGO_PATH)
    }
}

/// Builder for OnnoRokomConfig.
#[derive(Debug, Clone, Default)]
pub struct OnnoRokomConfigBuilder {
    config: OnnoRokomConfig,
}

impl OnnoRokomConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SOAP endpoint.
    ///
    /// Default: [`DEFAULT_API_URL`]
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.config.endpoint = endpoint;
        self
    }

    /// Set a request timeout.
    ///
    /// Default: none
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the base URL for static assets.
    ///
    /// Default: empty, giving a root-relative logo path
    pub fn assets_url(mut self, assets_url: impl Into<String>) -> Self {
        self.config.assets_url = assets_url.into();
        self
    }

    /// Set how `send` treats transport faults.
    ///
    /// Default: [`TransportFaultPolicy::Surface`]
    pub fn transport_faults(mut self, policy: TransportFaultPolicy) -> Self {
        self.config.transport_faults = policy;
        self
    }

    pub fn build(self) -> OnnoRokomConfig {
        self.config
    }
}
