use std::process::ExitCode;

use station_map::config::AppConfig;
use station_map::dataset;
use station_map::store::{FileStore, seed_if_empty};
use station_map::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("station_map=info,tower_http=info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if config.widget.api_key.is_none() {
        warn!("MAPS_API_KEY not set; the map widget will not load");
    }

    // Load the dataset once; a failure is shown on the map page
    let loaded = dataset::load(&config.dataset).await;
    let store = FileStore::new(&config.cache_path);
    match &loaded {
        Ok(stations) => {
            // Mirror the dataset into the demo cache on first run
            if let Err(e) = seed_if_empty(&store, stations) {
                warn!(path = %config.cache_path.display(), "could not seed station cache: {e}");
            }
        }
        Err(e) => error!(source = %config.dataset, "failed to load stations: {e}"),
    }

    let state = AppState::from_load(loaded, store, config.widget.clone());
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Station map listening on http://{}", config.addr);
    info!("  GET  /                              - Map");
    info!("  GET  /admin                         - Cache admin");
    info!("  GET  /api/stations/search?q=        - Search by name");
    info!("  GET  /api/stations/type/{{type}}      - Filter by category");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
