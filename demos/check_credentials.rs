//! Print the Onno Rokom settings schema and validate the stored credentials.
//!
//! # Running
//!
//! ```bash
//! ONNO_ROKOM_USERNAME=user ONNO_ROKOM_PASSWORD=password \
//!     cargo run --example check_credentials
//! ```

use sms_gateways::{EnvSettingsStore, FieldType, GatewayRegistry, ValidateRequest};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let registry = GatewayRegistry::with_defaults(Arc::new(EnvSettingsStore::from_env()))?;

    for (id, gateway) in registry.iter() {
        println!("{} ({})", gateway.name(), id);
        println!("  Logo: {}", gateway.logo());

        // Build a validate request the way a settings form would submit it
        let mut params = serde_json::Map::new();
        for field in gateway.get_settings() {
            let shown = match field.field_type {
                FieldType::Password if !field.value.is_empty() => "********".to_string(),
                _ => field.value.clone(),
            };
            println!("  {}: {}", field.name, shown);
            params.insert(field.id, serde_json::Value::String(field.value));
        }
        let request = ValidateRequest::new().with_param(id, serde_json::Value::Object(params));

        match gateway.validate_request(&request).await {
            Ok(validated) => println!("  Credentials valid for {}", validated.username),
            Err(error) => println!("  Validation failed: [{}] {}", error.code(), error.message()),
        }
    }

    Ok(())
}
