use crate::app_config::Provider;
use crate::domain::{GeoPoint, RouteInfo};
use crate::provider::ProviderError;
use crate::provider::client::{endpoint, read_json};
use crate::provider::domain::DirectionsResponse;
use crate::retry_policy::RetryPolicy;
use reqwest::Client;
use tracing::{info, instrument, warn};

const PROVIDER: &str = "directions";

/// Point-to-point driving distance and duration from the directions endpoint.
pub struct RouteEstimator {
    client: Client,
    base_url: String,
    access_token: String,
    retry_policy: RetryPolicy,
}

impl RouteEstimator {
    pub fn new(client: Client, provider: &Provider, retry_policy: RetryPolicy) -> Self {
        RouteEstimator {
            client,
            base_url: provider.base_url().to_string(),
            access_token: provider.access_token().to_string(),
            retry_policy,
        }
    }

    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    pub async fn estimate_route(&self, origin: GeoPoint, destination: GeoPoint) -> Result<RouteInfo, ProviderError> {
        info!("🧭 Estimating route...");
        let result = self.retry_policy.run(PROVIDER, || self.route_once(origin, destination)).await;
        match &result {
            Ok(route) => info!("🧭 Estimating route... OK, {:.2} km in {} min", route.distance_km, route.duration_minutes),
            Err(error) => warn!("🧭 Estimating route... failed, {}", error),
        }
        result
    }

    async fn route_once(&self, origin: GeoPoint, destination: GeoPoint) -> Result<RouteInfo, ProviderError> {
        // The provider expects longitude first
        let waypoints = format!(
            "{},{};{},{}",
            origin.longitude(),
            origin.latitude(),
            destination.longitude(),
            destination.latitude()
        );
        let url = endpoint(PROVIDER, &self.base_url, &["directions", "v5", "mapbox", "driving", &waypoints])?;

        let response = self
            .client
            .get(url)
            .query(&[("access_token", self.access_token.as_str()), ("overview", "false")])
            .send()
            .await?;
        let body = read_json::<DirectionsResponse>(PROVIDER, response).await?;

        let Some(route) = body.routes.first() else {
            let reason = body.message.or(body.code).unwrap_or_else(|| "empty route list".to_string());
            return Err(ProviderError::NoRoute(reason));
        };

        Ok(RouteInfo::from_meters_and_seconds(route.distance, route.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use test_log::test;

    const ROUTE_PATH: &str = "/directions/v5/mapbox/driving/2.3522,48.8566;2.35,48.86";

    fn estimator(server: &Server) -> RouteEstimator {
        let config = AppConfigBuilder::new().provider_url(server.url()).build();
        RouteEstimator::new(Client::new(), config.provider(), RetryPolicy::new(3, Duration::ZERO))
    }

    fn origin() -> GeoPoint {
        GeoPoint::new(48.8566, 2.3522).unwrap()
    }

    fn destination() -> GeoPoint {
        GeoPoint::new(48.86, 2.35).unwrap()
    }

    #[test(tokio::test)]
    async fn estimate_route_converts_the_first_route() -> Result<(), ProviderError> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", ROUTE_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("access_token".to_string(), "token".to_string()),
                Matcher::UrlEncoded("overview".to_string(), "false".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/directions_paris.json"))
            .create_async()
            .await;

        let route = estimator(&server).estimate_route(origin(), destination()).await?;

        mock.assert_async().await;
        assert_eq!(
            route,
            RouteInfo {
                distance_km: 1.2345,
                duration_minutes: 3,
            }
        );
        Ok(())
    }

    #[test(tokio::test)]
    async fn estimate_route_fails_when_no_route_is_returned() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", ROUTE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code": "NoRoute", "message": "No route found", "routes": []}"#)
            .expect(1)
            .create_async()
            .await;

        let result = estimator(&server).estimate_route(origin(), destination()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ProviderError::NoRoute(reason)) if reason == "No route found"));
    }

    #[test(tokio::test)]
    async fn estimate_route_retries_server_errors() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", ROUTE_PATH)
            .match_query(Matcher::Any)
            .with_status(502)
            .expect(3)
            .create_async()
            .await;

        let result = estimator(&server).estimate_route(origin(), destination()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ProviderError::Status { .. })));
    }
}
