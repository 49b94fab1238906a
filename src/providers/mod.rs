//! SMS gateway implementations.

pub(crate) mod registry;
pub(crate) mod traits;

#[cfg(feature = "onno-rokom")]
pub mod onno_rokom;

pub use registry::GatewayRegistry;
pub use traits::Gateway;
