//! Overtime Engine HTTP server.
//!
//! Environment:
//! - `OT_CONFIG_DIR`: policy directory (built-in defaults when unset)
//! - `OT_BIND`: listen address, default `127.0.0.1:8080`
//! - `OT_LOG_JSON`: emit JSON log lines
//! - `RUST_LOG`: log filter, default `info`

use std::env;

use overtime_engine::api::{AppState, create_router};
use overtime_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("OT_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config = match env::var("OT_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(&dir).map_err(|e| format!("config load failed: {e}"))?,
        Err(_) => {
            info!("OT_CONFIG_DIR not set, using built-in policy");
            ConfigLoader::default()
        }
    };
    info!(
        employer = %config.employer().name,
        pay_cap = %config.policy().payslip_period.pay_cap,
        "Policy loaded"
    );

    let app = create_router(AppState::new(config));

    let bind_addr = env::var("OT_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("overtime-engine listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
