//! Inventory Service — standalone binary tracking perishable stock and expiry dates.
//!
//! State lives in memory and is mirrored to a flat JSON snapshot file.
//! Default: http://0.0.0.0:5000/

mod config;
mod date;
mod error;
mod extract;
mod inventory;
mod routes;
mod snapshot;
mod store;

use config::Config;
use inventory::Inventory;
use routes::AppState;
use snapshot::Snapshot;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    log::info!("Loading snapshot from: {}", config.db_path);
    let inventory = match Inventory::open(Snapshot::new(&config.db_path)) {
        Ok(inventory) => inventory,
        Err(e) => {
            log::error!("Failed to load snapshot {}: {}", config.db_path, e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(inventory));

    let cors = tower_http::cors::CorsLayer::permissive();
    let app = routes::router(state).layer(cors);

    let addr = config.bind_addr();
    log::info!("Inventory Service listening on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
