use crate::api::query::ApiQuery;
use crate::api::{ApiError, AppState};
use crate::domain::{GeoPoint, RouteSource};
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct RouteParams {
    from_lat: f64,
    from_lon: f64,
    to_lat: f64,
    to_lon: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RouteBody {
    distance_km: f64,
    duration_minutes: u32,
    source: RouteSource,
}

pub(super) async fn route(State(state): State<AppState>, ApiQuery(params): ApiQuery<RouteParams>) -> Result<Json<RouteBody>, ApiError> {
    let origin = GeoPoint::new(params.from_lat, params.from_lon)?;
    let destination = GeoPoint::new(params.to_lat, params.to_lon)?;

    let planned = state.route_planner.plan(origin, destination).await;

    Ok(Json(RouteBody {
        distance_km: planned.route.distance_km,
        duration_minutes: planned.route.duration_minutes,
        source: planned.source,
    }))
}
