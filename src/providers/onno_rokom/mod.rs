//! Onno Rokom SMS provider implementation.
//!
//! This module provides integration with the Onno Rokom SOAP web service
//! (<https://www.onnorokomsms.com/>) for sending SMS and checking account
//! credentials.
//!
//! The service reports failures inside its result strings: a status code
//! followed by `||` (e.g. `1902||` for a wrong user name or password). See
//! [`parse_response_for_error`].
//!
//! # Example
//!
//! ```rust,ignore
//! use sms_gateways::onno_rokom::{OnnoRokomConfig, OnnoRokomGateway, TransportFaultPolicy};
//! use sms_gateways::{EnvSettingsStore, Gateway};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! // Credentials come from ONNO_ROKOM_USERNAME, ONNO_ROKOM_PASSWORD, ONNO_ROKOM_MASK_NAME
//! let settings = Arc::new(EnvSettingsStore::from_env());
//!
//! let config = OnnoRokomConfig::builder()
//!     .timeout(Duration::from_secs(30))
//!     .transport_faults(TransportFaultPolicy::Surface)
//!     .build();
//! let gateway = OnnoRokomGateway::with_config(settings, config)?;
//!
//! gateway.send(&"01711000000".into(), "Hello from Rust").await?;
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod provider;
mod response;
mod soap;
pub mod types;

// Re-export commonly used types
pub use client::{OnnoRokomClient, OnnoRokomClientBuilder};
pub use config::{OnnoRokomConfig, OnnoRokomConfigBuilder, TransportFaultPolicy};
pub use errors::{
    OnnoRokomError, OnnoRokomErrorCode, OnnoRokomServiceError, parse_response_for_error,
};
pub use provider::{GATEWAY_ID, OnnoRokomGateway};
pub use types::{Balance, GetBalanceRequest, OneToOneRequest, OneToOneResponse, Operation};
