//! Send a single SMS through the Onno Rokom gateway.
//!
//! # Running
//!
//! ```bash
//! ONNO_ROKOM_USERNAME=user ONNO_ROKOM_PASSWORD=password ONNO_ROKOM_MASK_NAME=MASK \
//!     cargo run --example send_sms -- 01711000000 "Hello from Rust"
//! ```

use sms_gateways::onno_rokom::{OnnoRokomConfig, OnnoRokomGateway};
use sms_gateways::{EnvSettingsStore, Gateway};
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up credentials from a local .env file if there is one
    dotenvy::dotenv().ok();

    let mut args = env::args().skip(1);
    let to = args.next().expect("usage: send_sms <number> <message>");
    let message = args.next().unwrap_or_else(|| "Hello from sms-gateways".to_string());

    let settings = Arc::new(EnvSettingsStore::from_env());
    let config = OnnoRokomConfig::builder()
        .timeout(Duration::from_secs(30))
        .build();
    let gateway = OnnoRokomGateway::with_config(settings, config)?;

    println!("Sending via {} to {}...", gateway.name(), to);
    match gateway.send(&to.as_str().into(), &message).await {
        Ok(()) => println!("Sent."),
        Err(error) => println!("Failed: [{}] {}", error.code(), error.message()),
    }

    Ok(())
}
