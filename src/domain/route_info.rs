use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub distance_km: f64,
    pub duration_minutes: u32,
}

impl RouteInfo {
    /// Converts a provider answer in meters and seconds. Minutes are rounded up so an ETA is never optimistic.
    pub fn from_meters_and_seconds(meters: f64, seconds: f64) -> Self {
        RouteInfo {
            distance_km: meters.max(0.0) / 1000.0,
            duration_minutes: (seconds.max(0.0) / 60.0).ceil() as u32,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    Provider,
    Heuristic,
}
