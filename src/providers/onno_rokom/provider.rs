//! Onno Rokom gateway implementation.

use super::client::OnnoRokomClient;
use super::config::{OnnoRokomConfig, TransportFaultPolicy};
use super::errors::Result;
use super::types::{GetBalanceRequest, OneToOneRequest};
use crate::errors::{GatewayError, Result as GatewayResult};
use crate::providers::traits::Gateway;
use crate::settings::SettingsStore;
use crate::types::{Credentials, FieldType, MobileNumber, SettingsField, ValidatedCredentials};
use async_trait::async_trait;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Identifier and settings namespace of this gateway.
pub const GATEWAY_ID: &str = "onno_rokom";

const SIGNUP_URL: &str = "https://www.onnorokomsms.com/";
const SOAP_TOOLKIT_URL: &str = "https://sourceforge.net/projects/phpsoaptoolkit/";

/// Onno Rokom gateway.
///
/// This wraps the [`OnnoRokomClient`] and implements the generic [`Gateway`]
/// trait. Credentials are read from the settings store on every call.
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateways::onno_rokom::OnnoRokomGateway;
/// use sms_gateways::{Gateway, MemorySettingsStore, Credentials};
/// use std::sync::Arc;
///
/// let settings = MemorySettingsStore::new()
///     .with_credentials("onno_rokom", &Credentials::new("user", "password", "MASK"));
/// let gateway = OnnoRokomGateway::new(Arc::new(settings))?;
///
/// gateway.send(&"01711000000".into(), "Your order has shipped").await?;
/// ```
#[derive(Clone)]
pub struct OnnoRokomGateway {
    client: OnnoRokomClient,
    settings: Arc<dyn SettingsStore>,
    config: OnnoRokomConfig,
}

impl Debug for OnnoRokomGateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnnoRokomGateway")
            .field("client", &self.client)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OnnoRokomGateway {
    /// Create a gateway with the default configuration.
    pub fn new(settings: Arc<dyn SettingsStore>) -> Result<Self> {
        Self::with_config(settings, OnnoRokomConfig::default())
    }

    /// Create a gateway with custom configuration.
    pub fn with_config(settings: Arc<dyn SettingsStore>, config: OnnoRokomConfig) -> Result<Self> {
        let client = OnnoRokomClient::from_config(&config)?;
        Ok(Self::with_client(settings, client, config))
    }

    /// Create a gateway around an existing client.
    ///
    /// The client's endpoint takes precedence over `config.endpoint`.
    pub fn with_client(
        settings: Arc<dyn SettingsStore>,
        client: OnnoRokomClient,
        config: OnnoRokomConfig,
    ) -> Self {
        Self {
            client,
            settings,
            config,
        }
    }

    /// Get reference to the inner client.
    pub fn client(&self) -> &OnnoRokomClient {
        &self.client
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &OnnoRokomConfig {
        &self.config
    }

    fn stored_credentials(&self) -> Credentials {
        self.settings.credentials(GATEWAY_ID)
    }
}

#[async_trait]
impl Gateway for OnnoRokomGateway {
    fn id(&self) -> &str {
        GATEWAY_ID
    }

    fn name(&self) -> String {
        "Onno Rokom SMS".to_string()
    }

    fn description(&self) -> String {
        format!(
            "Send SMS with Onno Rokom SMS Service. Follow <a href=\"{}\" target=\"_blank\">this link</a> \
             to get the username and password. Make sure your server has installed \
             <a href=\"{}\" target=\"_blank\">SOAP extension</a>.",
            SIGNUP_URL, SOAP_TOOLKIT_URL
        )
    }

    fn logo(&self) -> String {
        self.config.logo_url()
    }

    fn get_settings(&self) -> Vec<SettingsField> {
        let creds = self.stored_credentials();

        vec![
            SettingsField::new("username", "Username", FieldType::Text, creds.username),
            SettingsField::new("password", "Password", FieldType::Password, creds.password),
            SettingsField::new("mask_name", "Mask Name", FieldType::Text, creds.mask_name)
                .with_help("Mask Name which is allowed to your client panel"),
        ]
    }

    async fn send(&self, to: &MobileNumber, message: &str) -> GatewayResult<()> {
        let creds = self.stored_credentials();
        let request = OneToOneRequest::new(&creds, to, message);

        match self.client.one_to_one(&request).await {
            Ok(_response) => {
                #[cfg(feature = "tracing")]
                debug!(mobile_number = %to, result = %_response.raw, "SMS sent");
                Ok(())
            }
            Err(error)
                if error.is_transport_fault()
                    && self.config.transport_faults == TransportFaultPolicy::Suppress =>
            {
                #[cfg(feature = "tracing")]
                warn!(
                    mobile_number = %to,
                    error = %error,
                    "Suppressed transport fault while sending SMS"
                );
                let _ = error;
                Ok(())
            }
            Err(error) => Err(GatewayError::from(error)),
        }
    }

    async fn validate(&self, credentials: &Credentials) -> GatewayResult<ValidatedCredentials> {
        let request = GetBalanceRequest::new(credentials);
        let _balance = self.client.get_balance(&request).await?;

        #[cfg(feature = "tracing")]
        debug!(user_name = %credentials.username, balance = %_balance, "Credentials validated");

        Ok(ValidatedCredentials::from(credentials))
    }
}
