//! Alert Enrichment Relay - Main Entry Point

use api::{init_logging, run_server, RelayConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Alert Enrichment Relay v{} ===", env!("CARGO_PKG_VERSION"));

    let config = RelayConfig::from_env()?;
    run_server(config).await?;

    Ok(())
}
