use crate::app_config::AppConfig;
use crate::provider::ProviderError;
use reqwest::header::HeaderValue;
use reqwest::{Client, Response, Url, header};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Builds the HTTP client shared by every provider. Each request is bounded by the configured timeout.
pub fn new_client(config: &AppConfig) -> Result<Client, ClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .timeout(config.http().request_timeout())
        .user_agent(HeaderValue::from_str(config.http().user_agent())?)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Appends `segments` to the provider base url. Each segment is percent-encoded on its own.
pub(super) fn endpoint(provider: &'static str, base_url: &str, segments: &[&str]) -> Result<Url, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidUrl { provider, reason };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid(format!("'{}' cannot be a base url", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Decodes a successful JSON answer. Non-success statuses and undecodable bodies become provider errors.
pub(super) async fn read_json<T: DeserializeOwned>(provider: &'static str, response: Response) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status { provider, status });
    }

    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            ProviderError::MalformedResponse {
                provider,
                reason: e.to_string(),
            }
        } else {
            ProviderError::Request(e)
        }
    })
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("invalid user agent: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
