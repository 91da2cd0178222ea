use crate::domain::{GeoPoint, RouteInfo, RouteSource};
use crate::matching::haversine_km;
use crate::provider::RouteEstimator;
use crate::travel_time::TravelTimeHeuristic;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlannedRoute {
    pub route: RouteInfo,
    pub source: RouteSource,
}

/// Live route estimate, degraded to a straight-line heuristic when the directions provider fails.
pub struct RoutePlanner {
    estimator: RouteEstimator,
    heuristic: Arc<TravelTimeHeuristic>,
}

impl RoutePlanner {
    pub fn new(estimator: RouteEstimator, heuristic: Arc<TravelTimeHeuristic>) -> Self {
        RoutePlanner { estimator, heuristic }
    }

    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    pub async fn plan(&self, origin: GeoPoint, destination: GeoPoint) -> PlannedRoute {
        match self.estimator.estimate_route(origin, destination).await {
            Ok(route) => PlannedRoute {
                route,
                source: RouteSource::Provider,
            },
            Err(error) => {
                let distance_km = haversine_km(origin, destination);
                let route = RouteInfo {
                    distance_km,
                    duration_minutes: self.heuristic.estimate_now(distance_km),
                };
                info!("🧭 Falling back to the travel time heuristic after: {}", error);
                PlannedRoute {
                    route,
                    source: RouteSource::Heuristic,
                }
            }
        }
    }
}
