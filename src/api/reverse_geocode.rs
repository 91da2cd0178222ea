use crate::api::query::ApiQuery;
use crate::api::{ApiError, AppState};
use crate::domain::GeoPoint;
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct ReverseGeocodeParams {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct ReverseGeocodeBody {
    address: Option<String>,
}

pub(super) async fn reverse_geocode(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ReverseGeocodeParams>,
) -> Result<Json<ReverseGeocodeBody>, ApiError> {
    let point = GeoPoint::new(params.lat, params.lon)?;
    let address = state.reverse_geocoder.reverse_geocode(point).await;

    Ok(Json(ReverseGeocodeBody { address }))
}
