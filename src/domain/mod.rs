mod ambulance;
mod bounding_box;
mod equipment;
mod geo_point;
mod route_info;
mod search_request;
mod validation_error;

pub use ambulance::{AmbulanceCandidate, RankedMatch};
pub use bounding_box::BoundingBox;
pub use equipment::{EquipmentSet, equipment_set};
pub use geo_point::{EARTH_RADIUS_KM, GeoPoint};
pub use route_info::{RouteInfo, RouteSource};
pub use search_request::{DEFAULT_RADIUS_KM, SearchRequest};
pub use validation_error::ValidationError;
