use crate::app_config::AppConfig;
use crate::matching::NearbySearch;
use crate::provider::{GeocodingClient, ReverseGeocodingClient, RouteEstimator};
use crate::repository::CandidateRepository;
use crate::route_planner::RoutePlanner;
use crate::travel_time::TravelTimeHeuristic;
use reqwest::Client;
use std::sync::Arc;

/// Everything the handlers need. Components are stateless, so one instance serves every request.
#[derive(Clone)]
pub struct AppState {
    pub(super) nearby_search: Arc<NearbySearch>,
    pub(super) geocoder: Arc<GeocodingClient>,
    pub(super) reverse_geocoder: Arc<ReverseGeocodingClient>,
    pub(super) route_planner: Arc<RoutePlanner>,
    pub(super) heuristic: Arc<TravelTimeHeuristic>,
    pub(super) default_radius_km: f64,
}

impl AppState {
    pub fn new(config: &AppConfig, client: Client, repository: Arc<dyn CandidateRepository>) -> Self {
        let heuristic = Arc::new(config.travel_time().heuristic());
        let estimator = RouteEstimator::new(client.clone(), config.provider(), config.retry().default_policy());

        AppState {
            nearby_search: Arc::new(NearbySearch::new(repository)),
            geocoder: Arc::new(GeocodingClient::new(client.clone(), config.provider(), config.retry().geocoding_policy())),
            reverse_geocoder: Arc::new(ReverseGeocodingClient::new(client, config.reverse_geocoding())),
            route_planner: Arc::new(RoutePlanner::new(estimator, heuristic.clone())),
            heuristic,
            default_radius_km: config.search().default_radius_km(),
        }
    }
}
