//! Entry point for the HR Engine binary.
//!
//! Running this binary starts an HTTP server exposing the payroll
//! calculator, entitlement lookup and HR record endpoints.  A JSON
//! file overriding the default statutory rates may be specified via
//! the `HR_RATES_FILE` environment variable; the bind address via
//! `HR_BIND_ADDR`.

use hr_engine::config::{load_rate_config, RateConfig};
use std::path::PathBuf;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match std::env::var("HR_RATES_FILE") {
        Ok(path) => {
            let path = PathBuf::from(path);
            match load_rate_config(&path) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded rate configuration");
                    config
                }
                Err(err) => {
                    error!(path = %path.display(), %err, "failed to load rate configuration");
                    return;
                }
            }
        }
        Err(_) => RateConfig::default(),
    };

    let addr = std::env::var("HR_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    if let Err(err) = hr_engine::api::serve(&addr, config).await {
        error!(%err, "error running server");
    }
}
