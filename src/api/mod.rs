mod error;
mod geocode;
mod nearby;
mod query;
mod reverse_geocode;
mod route;
mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ambulances/nearby", get(nearby::nearby))
        .route("/geocode", get(geocode::geocode))
        .route("/reverse-geocode", get(reverse_geocode::reverse_geocode))
        .route("/route", get(route::route))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
