//! Settlement gateway binary

use settlement_gateway::{serve, telemetry, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match std::env::var("GATEWAY_CONFIG") {
        Ok(path) => Config::from_file(path)?,
        Err(_) => Config::from_env()?,
    };

    telemetry::init(&config.log)?;

    info!(
        "Starting {} v{}",
        config.service_name, config.service_version
    );

    serve(&config, AppState::from_config(&config)).await?;

    Ok(())
}
