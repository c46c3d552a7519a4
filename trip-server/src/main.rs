use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trip_server::config::ServerConfig;
use trip_server::locations::us_cities;
use trip_server::planner::DutyConfig;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let locations = us_cities();
    info!(cities = locations.len(), "Loaded city table");

    // Build app state
    let state = AppState::new(locations, DutyConfig::default(), config.log_header);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.addr;
    info!("Trip planner listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /health          - Health check");
    info!("  GET  /api/cities      - Search known cities");
    info!("  POST /api/plan-trip   - Simulate a trip");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
