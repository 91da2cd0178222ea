use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReverseGeocodingResponse {
    pub display_name: Option<String>,
    pub error: Option<String>,
}
