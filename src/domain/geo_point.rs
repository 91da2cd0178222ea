use crate::domain::ValidationError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Mean Earth radius used by every distance computation, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated WGS84 coordinate. Latitude always comes first, whatever order a provider uses.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::Latitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::Longitude(longitude));
        }

        Ok(GeoPoint { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(48.8566, 2.3522)]
    fn new_accepts_coordinates_in_range(#[case] latitude: f64, #[case] longitude: f64) {
        let point = GeoPoint::new(latitude, longitude).unwrap();
        assert_eq!(point.latitude(), latitude);
        assert_eq!(point.longitude(), longitude);
    }

    #[rstest]
    #[case::too_far_north(90.1, 0.0, ValidationError::Latitude(90.1))]
    #[case::too_far_south(-91.0, 0.0, ValidationError::Latitude(-91.0))]
    #[case::too_far_east(0.0, 180.5, ValidationError::Longitude(180.5))]
    #[case::too_far_west(0.0, -200.0, ValidationError::Longitude(-200.0))]
    fn new_rejects_coordinates_out_of_range(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: ValidationError) {
        assert_eq!(GeoPoint::new(latitude, longitude), Err(expected));
    }

    #[test]
    fn new_rejects_nan() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }
}
