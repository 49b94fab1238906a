//! Caller-side settings stores that gateways read credentials from.

use crate::types::Credentials;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Read access to persisted provider settings.
///
/// Settings are grouped by namespace, one per provider (e.g. `"onno_rokom"`).
/// Gateways only ever read from the store.
pub trait SettingsStore: Send + Sync {
    /// Get the raw settings record stored for `namespace`.
    fn get(&self, namespace: &str) -> Option<Value>;

    /// Get the credentials stored for `namespace`.
    ///
    /// Missing records and missing keys become empty strings.
    fn credentials(&self, namespace: &str) -> Credentials {
        self.get(namespace)
            .map(|value| Credentials::from_value(&value))
            .unwrap_or_default()
    }
}

/// In-memory settings store.
///
/// # Example
///
/// ```rust
/// use sms_gateways::{MemorySettingsStore, SettingsStore};
///
/// let store = MemorySettingsStore::new();
/// store.insert("onno_rokom", serde_json::json!({ "username": "shop" }));
///
/// assert_eq!(store.credentials("onno_rokom").username, "shop");
/// assert_eq!(store.credentials("other").username, "");
/// ```
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store credentials under `namespace`.
    pub fn with_credentials(self, namespace: impl Into<String>, creds: &Credentials) -> Self {
        self.insert(namespace, credentials_to_value(creds));
        self
    }

    /// Insert or replace the record for `namespace`, returning the previous one.
    pub fn insert(&self, namespace: impl Into<String>, value: Value) -> Option<Value> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(namespace.into(), value)
    }

    /// Remove the record for `namespace`.
    pub fn remove(&self, namespace: &str) -> Option<Value> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(namespace)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, namespace: &str) -> Option<Value> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(namespace)
            .cloned()
    }
}

/// Settings store backed by environment variables.
///
/// The record for a namespace is assembled from `<NAMESPACE>_USERNAME`,
/// `<NAMESPACE>_PASSWORD` and `<NAMESPACE>_MASK_NAME`, with the namespace
/// upper-cased (`onno_rokom` reads `ONNO_ROKOM_USERNAME`, ...).
///
/// Variables are captured when the store is created.
#[derive(Debug, Clone, Default)]
pub struct EnvSettingsStore {
    vars: HashMap<String, String>,
}

impl EnvSettingsStore {
    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build a store from explicit variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SettingsStore for EnvSettingsStore {
    fn get(&self, namespace: &str) -> Option<Value> {
        let prefix = namespace.to_ascii_uppercase();
        let mut record = Map::new();

        for key in ["username", "password", "mask_name"] {
            let var = format!("{}_{}", prefix, key.to_ascii_uppercase());
            if let Some(value) = self.vars.get(&var) {
                record.insert(key.to_string(), Value::String(value.clone()));
            }
        }

        if record.is_empty() {
            None
        } else {
            Some(Value::Object(record))
        }
    }
}

fn credentials_to_value(creds: &Credentials) -> Value {
    serde_json::json!({
        "username": creds.username,
        "password": creds.password,
        "mask_name": creds.mask_name,
    })
}
