use crate::domain::{EARTH_RADIUS_KM, GeoPoint};

/// Rectangular coordinate range used to prefilter candidates before exact distances are computed.
///
/// A box built with [`BoundingBox::around`] always contains the whole search disk. Longitudes may
/// leave the `[-180, 180]` range when the disk crosses the antimeridian; [`BoundingBox::contains`]
/// accounts for that.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn around(origin: GeoPoint, radius_km: f64) -> Self {
        let angular_radius = radius_km / EARTH_RADIUS_KM;
        let delta_lat = angular_radius.to_degrees();
        let lat_min = origin.latitude() - delta_lat;
        let lat_max = origin.latitude() + delta_lat;

        // The disk covers a pole, every meridian crosses it
        if lat_min <= -90.0 || lat_max >= 90.0 {
            return BoundingBox {
                lat_min: lat_min.max(-90.0),
                lat_max: lat_max.min(90.0),
                lon_min: -180.0,
                lon_max: 180.0,
            };
        }

        let delta_lon = longitude_delta(origin.latitude(), angular_radius);
        if delta_lon >= 180.0 {
            return BoundingBox {
                lat_min,
                lat_max,
                lon_min: -180.0,
                lon_max: 180.0,
            };
        }

        BoundingBox {
            lat_min,
            lat_max,
            lon_min: origin.longitude() - delta_lon,
            lon_max: origin.longitude() + delta_lon,
        }
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        let latitude = point.latitude();
        if latitude < self.lat_min || latitude > self.lat_max {
            return false;
        }

        let longitude = point.longitude();
        [longitude, longitude - 360.0, longitude + 360.0]
            .into_iter()
            .any(|lon| lon >= self.lon_min && lon <= self.lon_max)
    }
}

/// Half-width of the box in degrees of longitude.
///
/// The meridian-convergence correction `Δlat / cos(lat)` slightly underestimates the extent of a
/// spherical cap away from the equator, so the exact tangent extent `asin(sin(r) / cos(lat))` wins
/// when it is larger.
fn longitude_delta(latitude: f64, angular_radius: f64) -> f64 {
    let cos_lat = latitude.to_radians().cos();
    let corrected = angular_radius.to_degrees() / cos_lat;

    let ratio = angular_radius.sin() / cos_lat;
    if ratio >= 1.0 {
        return 180.0;
    }

    corrected.max(ratio.asin().to_degrees())
}
