mod directions_response;
mod geocoding_response;
mod reverse_geocoding_response;

pub use directions_response::DirectionsResponse;
pub use geocoding_response::GeocodingResponse;
pub use reverse_geocoding_response::ReverseGeocodingResponse;
