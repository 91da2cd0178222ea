use crate::api::AppState;
use crate::app_config::AppConfig;
use crate::repository::{InMemoryCandidateRepository, load_fleet_from};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

mod api;
mod app_config;
mod domain;
mod geo_point_deserializer;
mod matching;
mod provider;
mod repository;
mod retry_policy;
mod route_planner;
mod travel_time;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = provider::new_client(&config)?;

    let fleet = load_fleet_from(config.fleet().file()).await?;
    let repository = InMemoryCandidateRepository::new(fleet);
    if repository.is_empty() {
        warn!("⚠️ The fleet at '{}' is empty, every search will come back empty", config.fleet().file());
    }
    info!("✅  Loaded {} ambulance(s)", repository.len());

    let state = AppState::new(&config, client, Arc::new(repository));
    let listener = TcpListener::bind(config.server().bind_address()).await?;

    info!("🔥 {} is up and running on {}", env!("CARGO_PKG_NAME"), listener.local_addr()?);

    axum::serve(listener, api::router(state)).with_graceful_shutdown(shutdown_signal()).await?;

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("⚠️ Could not listen for the shutdown signal: {}", e);
    }
}
