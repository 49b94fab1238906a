//! Request and response types for the Onno Rokom SOAP API.

use crate::types::{Credentials, MobileNumber};
use secrecy::{ExposeSecret, SecretString};
use std::fmt::{self, Debug, Display, Formatter};

/// Target namespace of the Onno Rokom web service.
pub const SERVICE_NAMESPACE: &str = "https://api2.onnorokomsms.com/";

/// `type` discriminator for plain text messages.
pub const TEXT_SMS_TYPE: &str = "1";

/// Remote operations used by this provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Send one message to one number.
    OneToOne,
    /// Query the account balance.
    GetBalance,
}

impl Operation {
    /// Operation name, also the SOAP body element.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OneToOne => "OneToOne",
            Self::GetBalance => "GetBalance",
        }
    }

    /// Element carrying the result inside the response body.
    pub fn result_element(&self) -> &'static str {
        match self {
            Self::OneToOne => "OneToOneResult",
            Self::GetBalance => "GetBalanceResult",
        }
    }

    /// Value of the `SOAPAction` header, including the quotes.
    pub fn soap_action(&self) -> String {
        format!("\"{}{}\"", SERVICE_NAMESPACE, self.name())
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters of the `OneToOne` operation.
#[derive(Clone)]
pub struct OneToOneRequest {
    pub user_name: String,
    pub user_password: SecretString,
    pub mobile_number: MobileNumber,
    pub sms_text: String,
    pub sms_type: String,
    pub mask_name: String,
    pub campaign_name: String,
}

impl OneToOneRequest {
    /// Build a plain text message request from stored credentials.
    pub fn new(creds: &Credentials, to: &MobileNumber, text: impl Into<String>) -> Self {
        Self {
            user_name: creds.username.clone(),
            user_password: SecretString::from(creds.password.clone()),
            mobile_number: to.clone(),
            sms_text: text.into(),
            sms_type: TEXT_SMS_TYPE.to_string(),
            mask_name: creds.mask_name.clone(),
            campaign_name: String::new(),
        }
    }

    /// Parameters in wire order.
    pub(crate) fn params(&self) -> [(&'static str, &str); 7] {
        [
            ("userName", self.user_name.as_str()),
            ("userPassword", self.user_password.expose_secret()),
            ("mobileNumber", self.mobile_number.as_str()),
            ("smsText", self.sms_text.as_str()),
            ("type", self.sms_type.as_str()),
            ("maskName", self.mask_name.as_str()),
            ("campaignName", self.campaign_name.as_str()),
        ]
    }
}

impl Debug for OneToOneRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneToOneRequest")
            .field("user_name", &self.user_name)
            .field("user_password", &"[REDACTED]")
            .field("mobile_number", &self.mobile_number)
            .field("sms_text", &self.sms_text)
            .field("sms_type", &self.sms_type)
            .field("mask_name", &self.mask_name)
            .field("campaign_name", &self.campaign_name)
            .finish()
    }
}

/// Parameters of the `GetBalance` operation.
#[derive(Clone)]
pub struct GetBalanceRequest {
    pub user_name: String,
    pub user_password: SecretString,
}

impl GetBalanceRequest {
    pub fn new(creds: &Credentials) -> Self {
        Self {
            user_name: creds.username.clone(),
            user_password: SecretString::from(creds.password.clone()),
        }
    }

    /// Parameters in wire order.
    pub(crate) fn params(&self) -> [(&'static str, &str); 2] {
        [
            ("userName", self.user_name.as_str()),
            ("userPassword", self.user_password.expose_secret()),
        ]
    }
}

impl Debug for GetBalanceRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetBalanceRequest")
            .field("user_name", &self.user_name)
            .field("user_password", &"[REDACTED]")
            .finish()
    }
}

/// Result text of an accepted `OneToOne` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneToOneResponse {
    /// `OneToOneResult` exactly as returned.
    pub raw: String,
}

/// Result of an accepted `GetBalance` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    /// `GetBalanceResult` exactly as returned.
    pub raw: String,
}

impl Balance {
    /// Numeric balance, when the result is a plain number.
    pub fn amount(&self) -> Option<f64> {
        self.raw.trim().parse().ok()
    }
}

impl Display for Balance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_to_one_params_in_wire_order() {
        let creds = Credentials::new("shop", "pw", "SHOP");
        let request = OneToOneRequest::new(&creds, &"01711000000".into(), "Hello");

        assert_eq!(
            request.params(),
            [
                ("userName", "shop"),
                ("userPassword", "pw"),
                ("mobileNumber", "01711000000"),
                ("smsText", "Hello"),
                ("type", "1"),
                ("maskName", "SHOP"),
                ("campaignName", ""),
            ]
        );
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let creds = Credentials::new("shop", "hunter2", "SHOP");
        let one_to_one = OneToOneRequest::new(&creds, &"01711000000".into(), "Hello");
        let balance = GetBalanceRequest::new(&creds);

        assert!(!format!("{:?}", one_to_one).contains("hunter2"));
        assert!(!format!("{:?}", balance).contains("hunter2"));
    }

    #[test]
    fn test_soap_action_is_quoted() {
        assert_eq!(
            Operation::GetBalance.soap_action(),
            "\"https://api2.onnorokomsms.com/GetBalance\""
        );
        assert_eq!(Operation::OneToOne.result_element(), "OneToOneResult");
    }

    #[test]
    fn test_balance_amount() {
        assert_eq!(Balance { raw: " 125.50 ".into() }.amount(), Some(125.5));
        assert_eq!(Balance { raw: "n/a".into() }.amount(), None);
    }
}
