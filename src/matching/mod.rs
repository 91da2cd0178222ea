mod equipment_matcher;
mod haversine;
mod nearby_search;

pub use equipment_matcher::filter_by_equipment;
pub use haversine::{haversine_km, rank_within};
pub use nearby_search::NearbySearch;
