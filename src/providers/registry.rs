//! Registry mapping gateway identifiers to instances.

use super::traits::Gateway;
use crate::settings::SettingsStore;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Collection of gateways keyed by [`Gateway::id`].
///
/// Iteration is ordered by id.
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateways::{GatewayRegistry, MemorySettingsStore};
/// use std::sync::Arc;
///
/// let settings = Arc::new(MemorySettingsStore::new());
/// let registry = GatewayRegistry::with_defaults(settings)?;
///
/// let gateway = registry.get("onno_rokom").expect("registered by default");
/// gateway.send(&"01711000000".into(), "Hello").await?;
/// ```
#[derive(Clone, Default)]
pub struct GatewayRegistry {
    gateways: BTreeMap<String, Arc<dyn Gateway>>,
}

impl Debug for GatewayRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayRegistry")
            .field("gateways", &self.gateways.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GatewayRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in gateway enabled by features.
    #[cfg(feature = "onno-rokom")]
    pub fn with_defaults(
        settings: Arc<dyn SettingsStore>,
    ) -> Result<Self, crate::onno_rokom::OnnoRokomError> {
        let mut registry = Self::new();
        registry.register(crate::onno_rokom::OnnoRokomGateway::new(settings)?);
        Ok(registry)
    }

    /// Create a registry holding every built-in gateway enabled by features.
    #[cfg(not(feature = "onno-rokom"))]
    pub fn with_defaults(settings: Arc<dyn SettingsStore>) -> Result<Self, std::convert::Infallible> {
        let _ = settings;
        Ok(Self::new())
    }

    /// Register a gateway, replacing any gateway with the same id.
    ///
    /// Returns the replaced gateway, if any.
    pub fn register<G>(&mut self, gateway: G) -> Option<Arc<dyn Gateway>>
    where
        G: Gateway + 'static,
    {
        self.register_arc(Arc::new(gateway))
    }

    /// Register an already shared gateway.
    pub fn register_arc(&mut self, gateway: Arc<dyn Gateway>) -> Option<Arc<dyn Gateway>> {
        let id = gateway.id().to_string();

        #[cfg(feature = "tracing")]
        debug!(gateway = %id, "Registering SMS gateway");

        self.gateways.insert(id, gateway)
    }

    /// Look up a gateway by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Gateway>> {
        self.gateways.get(id).cloned()
    }

    /// Check whether a gateway is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.gateways.contains_key(id)
    }

    /// Registered ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.gateways.keys().map(String::as_str)
    }

    /// Iterate over registered gateways in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Gateway>)> {
        self.gateways.iter().map(|(id, gateway)| (id.as_str(), gateway))
    }

    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{GatewayError, Result};
    use crate::types::{Credentials, MobileNumber, SettingsField, ValidatedCredentials};
    use async_trait::async_trait;

    struct StaticGateway {
        id: &'static str,
        name: &'static str,
    }

    #[async_trait]
    impl Gateway for StaticGateway {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> String {
            self.name.to_string()
        }

        fn description(&self) -> String {
            String::new()
        }

        fn logo(&self) -> String {
            String::new()
        }

        fn get_settings(&self) -> Vec<SettingsField> {
            Vec::new()
        }

        async fn send(&self, _to: &MobileNumber, _message: &str) -> Result<()> {
            Ok(())
        }

        async fn validate(&self, credentials: &Credentials) -> Result<ValidatedCredentials> {
            if credentials.username.is_empty() {
                return Err(GatewayError::new("empty", "Username is required"));
            }
            Ok(credentials.into())
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = GatewayRegistry::new();
        assert!(registry.is_empty());

        registry.register(StaticGateway { id: "b", name: "B" });
        registry.register(StaticGateway { id: "a", name: "A" });

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("a"));
        assert_eq!(registry.get("b").unwrap().name(), "B");
        assert!(registry.get("c").is_none());
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = GatewayRegistry::new();
        assert!(registry.register(StaticGateway { id: "a", name: "Old" }).is_none());

        let previous = registry.register(StaticGateway { id: "a", name: "New" });
        assert_eq!(previous.unwrap().name(), "Old");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().name(), "New");
    }

    #[tokio::test]
    async fn test_validate_request_uses_gateway_namespace() {
        let gateway = StaticGateway { id: "static", name: "Static" };
        let request = crate::ValidateRequest::new()
            .with_param("static", serde_json::json!({ "username": "shop", "password": "pw" }))
            .with_param("other", serde_json::json!({ "username": "wrong" }));

        let validated = gateway.validate_request(&request).await.unwrap();
        assert_eq!(validated.username, "shop");
        assert_eq!(validated.password, "pw");

        let error = gateway
            .validate_request(&crate::ValidateRequest::new())
            .await
            .unwrap_err();
        assert_eq!(error.code(), "empty");
    }

    #[cfg(feature = "onno-rokom")]
    #[test]
    fn test_with_defaults_registers_onno_rokom() {
        let settings = Arc::new(crate::MemorySettingsStore::new());
        let registry = GatewayRegistry::with_defaults(settings).unwrap();
        assert!(registry.contains("onno_rokom"));
    }
}
