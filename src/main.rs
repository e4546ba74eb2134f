//! HTTP server for the Finiquito Settlement Engine.
//!
//! Environment:
//! - `FINIQUITO_CONFIG_DIR`: rule table directory (default `./config/bo_general_labor_law`)
//! - `FINIQUITO_PORT`: listen port (default 3000)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::error::Error;
use std::net::SocketAddr;

use finiquito_engine::api::{AppState, ENGINE_VERSION, create_router};
use finiquito_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/bo_general_labor_law";
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("FINIQUITO_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let port: u16 = std::env::var("FINIQUITO_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        rule_table = %config.metadata().code,
        schedules = config.table().schedules().len(),
        "Rule table loaded"
    );

    let app = create_router(AppState::new(config));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(version = ENGINE_VERSION, "finiquito-engine listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
