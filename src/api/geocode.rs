use crate::api::query::ApiQuery;
use crate::api::{ApiError, AppState};
use crate::domain::GeoPoint;
use axum::Json;
use axum::extract::State;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeParams {
    address: String,
}

pub(super) async fn geocode(State(state): State<AppState>, ApiQuery(params): ApiQuery<GeocodeParams>) -> Result<Json<GeoPoint>, ApiError> {
    let point = state.geocoder.geocode(&params.address).await?;
    Ok(Json(point))
}
