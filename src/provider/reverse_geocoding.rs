use crate::app_config::ReverseGeocoding;
use crate::domain::GeoPoint;
use crate::provider::ProviderError;
use crate::provider::client::{endpoint, read_json};
use crate::provider::domain::ReverseGeocodingResponse;
use reqwest::Client;
use tracing::{info, instrument, warn};

const PROVIDER: &str = "reverse geocoding";

/// Turns coordinates into a display address. Failures never propagate, the address is then unknown.
pub struct ReverseGeocodingClient {
    client: Client,
    url: String,
    language: String,
}

impl ReverseGeocodingClient {
    pub fn new(client: Client, config: &ReverseGeocoding) -> Self {
        ReverseGeocodingClient {
            client,
            url: config.url().to_string(),
            language: config.language().to_string(),
        }
    }

    #[instrument(skip(self), fields(point = %point))]
    pub async fn reverse_geocode(&self, point: GeoPoint) -> Option<String> {
        info!("📍 Reverse geocoding...");
        match self.lookup(point).await {
            Ok(address) => {
                info!("📍 Reverse geocoding... OK");
                Some(address)
            }
            Err(error) => {
                warn!("⚠️ Reverse geocoding... failed, {}", error);
                None
            }
        }
    }

    async fn lookup(&self, point: GeoPoint) -> Result<String, ProviderError> {
        let url = endpoint(PROVIDER, &self.url, &["reverse"])?;
        let latitude = point.latitude().to_string();
        let longitude = point.longitude().to_string();

        let response = self
            .client
            .get(url)
            .query(&[
                ("format", "json"),
                ("lat", latitude.as_str()),
                ("lon", longitude.as_str()),
                ("accept-language", self.language.as_str()),
            ])
            .send()
            .await?;
        let body = read_json::<ReverseGeocodingResponse>(PROVIDER, response).await?;

        if let Some(error) = body.error {
            return Err(ProviderError::NotFound(error));
        }

        body.display_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ProviderError::MalformedResponse {
                provider: PROVIDER,
                reason: "missing display_name".to_string(),
            })
    }
}
