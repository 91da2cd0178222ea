use crate::app_config::Provider;
use crate::domain::{GeoPoint, ValidationError};
use crate::provider::ProviderError;
use crate::provider::client::{endpoint, read_json};
use crate::provider::domain::GeocodingResponse;
use crate::retry_policy::RetryPolicy;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

const PROVIDER: &str = "geocoding";

/// Resolves free-text addresses through the forward geocoding endpoint.
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    access_token: String,
    retry_policy: RetryPolicy,
}

impl GeocodingClient {
    pub fn new(client: Client, provider: &Provider, retry_policy: RetryPolicy) -> Self {
        GeocodingClient {
            client,
            base_url: provider.base_url().to_string(),
            access_token: provider.access_token().to_string(),
            retry_policy,
        }
    }

    /// Returns the position of the best match for `address`.
    ///
    /// A blank address fails with [`ProviderError::Validation`] without calling the provider.
    /// Fails with [`ProviderError::NotFound`] when the provider knows no such place. Transient provider
    /// failures are retried according to the retry policy.
    #[instrument(skip(self))]
    pub async fn geocode(&self, address: &str) -> Result<GeoPoint, ProviderError> {
        info!("🌍 Geocoding address...");
        let address = address.trim();
        if address.is_empty() {
            warn!("🌍 Geocoding address... failed, address is blank");
            return Err(ValidationError::BlankAddress.into());
        }

        let result = self.retry_policy.run(PROVIDER, || self.geocode_once(address)).await;
        match &result {
            Ok(point) => info!("🌍 Geocoding address... OK, {}", point),
            Err(ProviderError::NotFound(_)) => info!("🌍 Geocoding address... OK, not found"),
            Err(error) => warn!("🌍 Geocoding address... failed, {}", error),
        }
        result
    }

    async fn geocode_once(&self, address: &str) -> Result<GeoPoint, ProviderError> {
        let place = format!("{}.json", address);
        let url = endpoint(PROVIDER, &self.base_url, &["geocoding", "v5", "mapbox.places", &place])?;

        let response = self
            .client
            .get(url)
            .query(&[("access_token", self.access_token.as_str()), ("limit", "1")])
            .send()
            .await?;
        let body = read_json::<GeocodingResponse>(PROVIDER, response).await?;

        let feature = body.features.first().ok_or_else(|| ProviderError::NotFound(address.to_string()))?;
        debug!(place_name = ?feature.place_name, "Best match");

        let (longitude, latitude) = feature.lon_lat().ok_or_else(|| ProviderError::MalformedResponse {
            provider: PROVIDER,
            reason: "feature without coordinates".to_string(),
        })?;

        GeoPoint::new(latitude, longitude).map_err(|e| ProviderError::MalformedResponse {
            provider: PROVIDER,
            reason: e.to_string(),
        })
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

    const PARIS_PATH: &str = "/geocoding/v5/mapbox.places/Paris.json";

    fn geocoding_client(server: &Server) -> GeocodingClient {
        let config = AppConfigBuilder::new().provider_url(server.url()).build();
        GeocodingClient::new(Client::new(), config.provider(), RetryPolicy::new(3, Duration::ZERO))
    }

    fn query() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("access_token".to_string(), "token".to_string()),
            Matcher::UrlEncoded("limit".to_string(), "1".to_string()),
        ])
    }

    #[test(tokio::test)]
    async fn geocode_returns_the_first_feature_as_latitude_longitude() -> Result<(), ProviderError> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PARIS_PATH)
            .match_query(query())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/geocoding_paris.json"))
            .create_async()
            .await;

        let point = geocoding_client(&server).geocode("  Paris ").await?;

        mock.assert_async().await;
        assert_eq!(point, GeoPoint::new(48.8566, 2.3522).unwrap());
        Ok(())
    }

    #[test(tokio::test)]
    async fn geocode_fails_with_not_found_without_retrying() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PARIS_PATH)
            .match_query(query())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"type": "FeatureCollection", "features": []}"#)
            .expect(1)
            .create_async()
            .await;

        let result = geocoding_client(&server).geocode("Paris").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ProviderError::NotFound(address)) if address == "Paris"));
    }

    #[test(tokio::test)]
    async fn geocode_retries_server_errors_and_returns_the_last_one() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PARIS_PATH)
            .match_query(Matcher::Any)
            .with_status(503)
            .expect(3)
            .create_async()
            .await;

        let result = geocoding_client(&server).geocode("Paris").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(ProviderError::Status { status, .. }) if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[test(tokio::test)]
    async fn geocode_does_not_retry_client_errors() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PARIS_PATH)
            .match_query(Matcher::Any)
            .with_status(401)
            .expect(1)
            .create_async()
            .await;

        let result = geocoding_client(&server).geocode("Paris").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ProviderError::Status { .. })));
    }

    #[test(tokio::test)]
    async fn geocode_rejects_a_malformed_payload() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", PARIS_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"features": "oops"}"#)
            .create_async()
            .await;

        let result = geocoding_client(&server).geocode("Paris").await;

        assert!(matches!(result, Err(ProviderError::MalformedResponse { .. })));
    }

    #[test(tokio::test)]
    async fn geocode_rejects_coordinates_out_of_range() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", PARIS_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"features": [{"center": [48.8566, 182.0]}]}"#)
            .create_async()
            .await;

        let result = geocoding_client(&server).geocode("Paris").await;

        assert!(matches!(result, Err(ProviderError::MalformedResponse { .. })));
    }

    #[test(tokio::test)]
    async fn geocode_rejects_a_blank_address_without_calling_the_provider() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .match_query(Matcher::Any)
            .with_status(200)
            .expect(0)
            .create_async()
            .await;

        let result = geocoding_client(&server).geocode("   ").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ProviderError::Validation(ValidationError::BlankAddress))));
    }
}
