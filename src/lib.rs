//! # SMS Gateways
//!
//! A pluggable SMS gateway contract and provider adapters.
//!
//! Every provider implements the [`Gateway`] trait: display metadata, the
//! settings schema needed to configure it, sending a message and validating
//! credentials. Callers keep providers in a [`GatewayRegistry`] and treat
//! them uniformly; failures always come back as a [`GatewayError`] carrying a
//! code and a message ready for display.
//!
//! ## Supported Providers
//!
//! | Provider | Feature | Website |
//! |----------|---------|---------|
//! | Onno Rokom | `onno-rokom` (default) | <https://www.onnorokomsms.com> |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sms_gateways::{Credentials, GatewayRegistry, MemorySettingsStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Credentials live in the caller's settings store
//!     let settings = MemorySettingsStore::new()
//!         .with_credentials("onno_rokom", &Credentials::new("user", "password", "MASK"));
//!
//!     let registry = GatewayRegistry::with_defaults(Arc::new(settings))?;
//!     let gateway = registry.get("onno_rokom").expect("enabled by default");
//!
//!     // Render settings
//!     for field in gateway.get_settings() {
//!         println!("{} ({}): {}", field.name, field.field_type, field.value);
//!     }
//!
//!     // Send a message
//!     gateway.send(&"01711000000".into(), "Your order has shipped").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! GatewayRegistry
//!         │
//!         ▼
//!     Gateway            (trait: OnnoRokomGateway, ...)
//!         │
//!         ├── SettingsStore   (credentials, read on every call)
//!         ▼
//! OnnoRokomClient        (SOAP over reqwest)
//! ```
//!
//! ## Features
//!
//! - `onno-rokom` - Onno Rokom provider support (enabled by default)
//! - `tracing` - OpenTelemetry tracing instrumentation (enabled by default)

pub mod errors;
pub mod providers;
pub mod settings;
pub mod types;

// Re-export commonly used types at the crate root
pub use errors::GatewayError;
pub use providers::{Gateway, GatewayRegistry};
pub use settings::{EnvSettingsStore, MemorySettingsStore, SettingsStore};
pub use types::{
    Credentials, FieldType, MobileNumber, SettingsField, ValidateRequest, ValidatedCredentials,
};

#[cfg(feature = "onno-rokom")]
pub use providers::onno_rokom;
