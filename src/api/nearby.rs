use crate::api::query::ApiQuery;
use crate::api::{ApiError, AppState};
use crate::domain::{GeoPoint, RankedMatch, SearchRequest};
use crate::travel_time::TravelTimeHeuristic;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NearbyAmbulance {
    ambulance_id: String,
    distance_km: f64,
    latitude: f64,
    longitude: f64,
    equipment: Vec<String>,
    estimated_minutes: u32,
}

impl NearbyAmbulance {
    fn from_match(ranked: RankedMatch, heuristic: &TravelTimeHeuristic) -> Self {
        NearbyAmbulance {
            ambulance_id: ranked.ambulance.id,
            distance_km: ranked.distance_km,
            latitude: ranked.ambulance.location.latitude(),
            longitude: ranked.ambulance.location.longitude(),
            equipment: ranked.ambulance.equipment.into_iter().collect(),
            estimated_minutes: heuristic.estimate_now(ranked.distance_km),
        }
    }
}

/// `equipment` may repeat, so the query is read as raw pairs.
#[derive(Debug, PartialEq)]
struct NearbyQuery {
    latitude: f64,
    longitude: f64,
    radius_km: f64,
    equipment: Vec<String>,
}

impl NearbyQuery {
    fn from_pairs(pairs: Vec<(String, String)>, default_radius_km: f64) -> Result<Self, ApiError> {
        let mut latitude = None;
        let mut longitude = None;
        let mut radius_km = None;
        let mut equipment = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "latitude" => latitude = Some(parse_number(&key, &value)?),
                "longitude" => longitude = Some(parse_number(&key, &value)?),
                "radius_km" => radius_km = Some(parse_number(&key, &value)?),
                "equipment" => equipment.extend(value.split(',').map(str::to_string)),
                _ => {}
            }
        }

        Ok(NearbyQuery {
            latitude: latitude.ok_or_else(|| missing("latitude"))?,
            longitude: longitude.ok_or_else(|| missing("longitude"))?,
            radius_km: radius_km.unwrap_or(default_radius_km),
            equipment,
        })
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ApiError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("query parameter '{}' must be a number, got '{}'", key, value)))
}

fn missing(key: &str) -> ApiError {
    ApiError::BadRequest(format!("missing query parameter '{}'", key))
}

pub(super) async fn nearby(State(state): State<AppState>, ApiQuery(pairs): ApiQuery<Vec<(String, String)>>) -> Result<Json<Vec<NearbyAmbulance>>, ApiError> {
    let query = NearbyQuery::from_pairs(pairs, state.default_radius_km)?;
    let origin = GeoPoint::new(query.latitude, query.longitude)?;
    let request = SearchRequest::new(origin, query.radius_km, &query.equipment)?;

    let ranked = state.nearby_search.search(&request).await?;

    Ok(Json(
        ranked
            .into_iter()
            .map(|ranked| NearbyAmbulance::from_match(ranked, &state.heuristic))
            .collect(),
    ))
}
