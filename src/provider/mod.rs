mod client;
mod directions;
mod domain;
mod error;
mod geocoding;
mod reverse_geocoding;

pub use client::new_client;
pub use directions::RouteEstimator;
pub use error::ProviderError;
pub use geocoding::GeocodingClient;
pub use reverse_geocoding::ReverseGeocodingClient;
