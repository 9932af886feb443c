use std::error::Error;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fuel_server::config::AppConfig;
use fuel_server::finder::{FinderClient, MockFinderClient, PageSource};
use fuel_server::lookup::FuelPriceLookup;
use fuel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Fixture pages when FUEL_MOCK_DIR is set, otherwise the live site
    match &config.mock_dir {
        Some(dir) => {
            let source = MockFinderClient::new(dir)?;
            info!(
                dir = %dir.display(),
                postcodes = source.available_postcodes().len(),
                "serving mock fuel finder pages"
            );
            serve(source, config.bind_addr).await
        }
        None => {
            let source = FinderClient::new(config.finder.clone())?;
            info!(endpoint = source.endpoint(), "using live fuel finder");
            serve(source, config.bind_addr).await
        }
    }
}

async fn serve<S>(source: S, addr: SocketAddr) -> Result<(), Box<dyn Error>>
where
    S: PageSource + Send + Sync + 'static,
{
    let state = AppState::new(FuelPriceLookup::new(source));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Fuel price bot listening on http://{addr}");
    info!("  GET  /health           - Health check");
    info!("  GET  /commands         - Command help");
    info!("  POST /message          - Answer a chat message");
    info!("  GET  /fuel/{{postcode}}  - Fuel report as JSON");

    axum::serve(listener, app).await?;
    Ok(())
}
