//! Onno Rokom SOAP client.

use super::config::{DEFAULT_API_URL, OnnoRokomConfig};
use super::errors::{OnnoRokomError, Result, parse_response_for_error};
use super::response::SoapResponse;
use super::soap::{SOAP_CONTENT_TYPE, build_envelope};
use super::types::{Balance, GetBalanceRequest, OneToOneRequest, OneToOneResponse, Operation};
use reqwest::header::CONTENT_TYPE;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::time::Duration;
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::{Span, debug};
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Onno Rokom SOAP client.
///
/// The client holds no credentials; every request carries the account it is
/// made for, so one client serves any number of accounts.
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateways::Credentials;
/// use sms_gateways::onno_rokom::{GetBalanceRequest, OnnoRokomClient};
///
/// let client = OnnoRokomClient::with_default_endpoint()?;
/// let creds = Credentials::new("user", "password", "MASK");
///
/// let balance = client.get_balance(&GetBalanceRequest::new(&creds)).await?;
/// println!("Balance: {}", balance);
/// ```
#[derive(Debug, Clone)]
pub struct OnnoRokomClient {
    http_client: ClientWithMiddleware,
    endpoint: Url,
}

/// Builder for configuring an [`OnnoRokomClient`].
#[derive(Default)]
pub struct OnnoRokomClientBuilder {
    endpoint: Option<Url>,
    timeout: Option<Duration>,
    http_client: Option<ClientWithMiddleware>,
}

impl OnnoRokomClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom API endpoint.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set a request timeout. Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client with middleware.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`OnnoRokomClient`].
    pub fn build(self) -> Result<OnnoRokomClient> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| Url::parse(DEFAULT_API_URL).expect("Invalid default URL"));

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder.build().map_err(OnnoRokomError::BuildHttpClient)?;
                ClientBuilder::new(client).build()
            }
        };

        Ok(OnnoRokomClient {
            http_client,
            endpoint,
        })
    }
}

impl OnnoRokomClient {
    /// Create a new client for the given endpoint.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(endpoint.as_ref()).map_err(OnnoRokomError::InvalidEndpoint)?;
        Self::builder().endpoint(url).build()
    }

    /// Create a new client with the default API URL.
    pub fn with_default_endpoint() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client from gateway configuration.
    pub fn from_config(config: &OnnoRokomConfig) -> Result<Self> {
        let mut builder = Self::builder().endpoint(config.endpoint.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> OnnoRokomClientBuilder {
        OnnoRokomClientBuilder::new()
    }

    /// The SOAP endpoint in use.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post a SOAP envelope and return the operation's result text.
    async fn call(&self, operation: Operation, envelope: String) -> Result<String> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header("SOAPAction", operation.soap_action())
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(OnnoRokomError::ReadResponse)?;

        // Servers answer faults with HTTP 500, so the body is checked first.
        match SoapResponse::from_text(&text, operation) {
            Ok(SoapResponse::Fault { code, message }) => {
                Err(OnnoRokomError::SoapFault { code, message })
            }
            _ if !status.is_success() => Err(OnnoRokomError::HttpStatus {
                status: status.as_u16(),
                body: text,
            }),
            Ok(parsed) => parsed.into_result(),
            Err(error) => Err(error),
        }
    }

    /// Send one message to one number.
    ///
    /// Error codes embedded in the result text are returned as
    /// [`OnnoRokomError::Service`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "OnnoRokomClient::one_to_one",
            skip_all,
            fields(mobile_number = %request.mobile_number, result = tracing::field::Empty)
        )
    )]
    pub async fn one_to_one(&self, request: &OneToOneRequest) -> Result<OneToOneResponse> {
        let operation = Operation::OneToOne;
        let raw = self
            .call(operation, build_envelope(operation, &request.params()))
            .await?;

        if let Some(error) = parse_response_for_error(&raw) {
            return Err(OnnoRokomError::Service(error));
        }

        #[cfg(feature = "tracing")]
        {
            debug!(result = %raw, "Message accepted");
            Span::current()
                .record("result", raw.as_str())
                .set_status(Status::Ok);
        }

        Ok(OneToOneResponse { raw })
    }

    /// Query the account balance.
    ///
    /// Error codes embedded in the result text are returned as
    /// [`OnnoRokomError::Service`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "OnnoRokomClient::get_balance",
            skip_all,
            fields(user_name = %request.user_name)
        )
    )]
    pub async fn get_balance(&self, request: &GetBalanceRequest) -> Result<Balance> {
        let operation = Operation::GetBalance;
        let raw = self
            .call(operation, build_envelope(operation, &request.params()))
            .await?;

        if let Some(error) = parse_response_for_error(&raw) {
            return Err(OnnoRokomError::Service(error));
        }

        #[cfg(feature = "tracing")]
        Span::current().set_status(Status::Ok);

        Ok(Balance { raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::onno_rokom::errors::OnnoRokomErrorCode;
    use crate::types::Credentials;
    use wiremock::matchers::{body_string_contains, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn soap_result(operation: Operation, value: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><{op}Response xmlns="https://api2.onnorokomsms.com/"><{op}Result>{value}</{op}Result></{op}Response></soap:Body></soap:Envelope>"#,
            op = operation.name(),
        )
    }

    fn credentials() -> Credentials {
        Credentials::new("shop", "pw", "SHOP")
    }

    #[tokio::test]
    async fn test_one_to_one_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("SOAPAction", "\"https://api2.onnorokomsms.com/OneToOne\""))
            .and(body_string_contains("<mobileNumber>01711000000</mobileNumber>"))
            .and(body_string_contains("<type>1</type>"))
            .and(body_string_contains("<campaignName></campaignName>"))
            .respond_with(ResponseTemplate::new(200).set_body_string(soap_result(
                Operation::OneToOne,
                "1900||01711000000||987654/",
            )))
            .mount(&mock_server)
            .await;

        let client = OnnoRokomClient::new(mock_server.uri()).unwrap();
        let request = OneToOneRequest::new(&credentials(), &"01711000000".into(), "Hello");
        let result = client.one_to_one(&request).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().raw, "1900||01711000000||987654/");
    }

    #[tokio::test]
    async fn test_one_to_one_service_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(soap_result(Operation::OneToOne, "1907||")),
            )
            .mount(&mock_server)
            .await;

        let client = OnnoRokomClient::new(mock_server.uri()).unwrap();
        let request = OneToOneRequest::new(&credentials(), &"01711000000".into(), "Hello");

        match client.one_to_one(&request).await.unwrap_err() {
            OnnoRokomError::Service(error) => {
                assert_eq!(error.code, OnnoRokomErrorCode::InvalidMaskName);
            }
            other => panic!("Expected Service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_balance_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("SOAPAction", "\"https://api2.onnorokomsms.com/GetBalance\""))
            .and(body_string_contains("<userName>shop</userName>"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(soap_result(Operation::GetBalance, "125.50")),
            )
            .mount(&mock_server)
            .await;

        let client = OnnoRokomClient::new(mock_server.uri()).unwrap();
        let balance = client
            .get_balance(&GetBalanceRequest::new(&credentials()))
            .await
            .unwrap();

        assert_eq!(balance.raw, "125.50");
        assert_eq!(balance.amount(), Some(125.5));
    }

    #[tokio::test]
    async fn test_soap_fault_with_server_error_status() {
        let mock_server = MockServer::start().await;

        let fault = r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><soap:Fault><faultcode>soap:Server</faultcode><faultstring>Server was unable to process request.</faultstring></soap:Fault></soap:Body></soap:Envelope>"#;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string(fault))
            .mount(&mock_server)
            .await;

        let client = OnnoRokomClient::new(mock_server.uri()).unwrap();
        let error = client
            .get_balance(&GetBalanceRequest::new(&credentials()))
            .await
            .unwrap_err();

        match error {
            OnnoRokomError::SoapFault { code, message } => {
                assert_eq!(code, "soap:Server");
                assert_eq!(message, "Server was unable to process request.");
            }
            other => panic!("Expected SoapFault, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_error_without_fault() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let client = OnnoRokomClient::new(mock_server.uri()).unwrap();
        let error = client
            .get_balance(&GetBalanceRequest::new(&credentials()))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            OnnoRokomError::HttpStatus { status: 503, ref body } if body == "Service Unavailable"
        ));
        assert!(error.is_transport_fault());
    }

    #[test]
    fn test_invalid_endpoint() {
        let error = OnnoRokomClient::new("not a url").unwrap_err();
        assert!(matches!(error, OnnoRokomError::InvalidEndpoint(_)));
    }
}
