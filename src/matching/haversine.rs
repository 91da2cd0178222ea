use crate::domain::{AmbulanceCandidate, EARTH_RADIUS_KM, GeoPoint, RankedMatch};
use ordered_float::OrderedFloat;
use std::collections::HashSet;

/// Great-circle distance between two points, in kilometers.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.latitude() - from.latitude()).to_radians();
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + from.latitude().to_radians().cos() * to.latitude().to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` marginally above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Ranks candidates by their distance to `origin`, dropping every candidate further than `radius_km`.
///
/// The sort is stable, equidistant candidates keep their input order. An ambulance id listed more than
/// once only keeps its nearest entry.
pub fn rank_within(candidates: Vec<AmbulanceCandidate>, origin: GeoPoint, radius_km: f64) -> Vec<RankedMatch> {
    let mut matches = candidates
        .into_iter()
        .map(|ambulance| {
            let distance_km = haversine_km(origin, ambulance.location);
            RankedMatch { ambulance, distance_km }
        })
        .filter(|ranked| ranked.distance_km <= radius_km)
        .collect::<Vec<_>>();

    matches.sort_by_key(|ranked| OrderedFloat(ranked.distance_km));

    let mut seen = HashSet::with_capacity(matches.len());
    matches.retain(|ranked| seen.insert(ranked.ambulance.id.clone()));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    fn candidate(id: &str, latitude: f64, longitude: f64) -> AmbulanceCandidate {
        AmbulanceCandidate::new(id, point(latitude, longitude), Vec::<String>::new(), false)
    }

    fn ids(matches: &[RankedMatch]) -> Vec<&str> {
        matches.iter().map(|ranked| ranked.ambulance.id.as_str()).collect()
    }

    #[test]
    fn haversine_km_is_zero_for_the_same_point() {
        let paris = point(48.8566, 2.3522);
        assert_eq!(haversine_km(paris, paris), 0.0);
    }

    #[test]
    fn haversine_km_matches_a_known_distance() {
        // Paris to London is roughly 343.5 km
        let distance = haversine_km(point(48.8566, 2.3522), point(51.5074, -0.1278));
        assert!((distance - 343.5).abs() < 1.0, "unexpected distance {distance}");
    }

    #[test]
    fn haversine_km_is_symmetric() {
        let a = point(-33.8688, 151.2093);
        let b = point(35.6762, 139.6503);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn haversine_km_handles_antipodal_points() {
        let distance = haversine_km(point(0.0, 0.0), point(0.0, 180.0));
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn rank_within_sorts_by_ascending_distance() {
        let origin = point(0.0, 0.0);
        // One degree of latitude is ~111.19 km, 0.009 degree is ~1 km
        let candidates = vec![candidate("one", 0.009, 0.0), candidate("three", 0.027, 0.0), candidate("two", 0.018, 0.0)];

        let ranked = rank_within(candidates, origin, 5.0);

        assert_eq!(ids(&ranked), vec!["one", "two", "three"]);
        assert!(ranked.windows(2).all(|pair| pair[0].distance_km <= pair[1].distance_km));
    }

    #[test]
    fn rank_within_keeps_input_order_for_ties() {
        let origin = point(0.0, 0.0);
        let candidates = vec![candidate("north", 0.01, 0.0), candidate("south", -0.01, 0.0), candidate("again", 0.01, 0.0)];

        assert_eq!(ids(&rank_within(candidates, origin, 5.0)), vec!["north", "south", "again"]);
    }

    #[test]
    fn rank_within_drops_candidates_outside_the_radius() {
        let origin = point(48.8566, 2.3522);
        let candidates = vec![candidate("far", 48.90, 2.40), candidate("near", 48.86, 2.35)];

        let ranked = rank_within(candidates, origin, 5.0);

        assert_eq!(ids(&ranked), vec!["near"]);
        assert!(ranked[0].distance_km < 1.0);
    }

    #[test]
    fn rank_within_keeps_the_nearest_entry_of_a_duplicated_id() {
        let origin = point(0.0, 0.0);
        let candidates = vec![candidate("dup", 0.02, 0.0), candidate("other", 0.015, 0.0), candidate("dup", 0.01, 0.0)];

        let ranked = rank_within(candidates, origin, 5.0);

        assert_eq!(ids(&ranked), vec!["dup", "other"]);
        assert!(ranked[0].distance_km < 1.2);
    }

    #[test]
    fn rank_within_returns_an_empty_list_without_candidates() {
        assert!(rank_within(Vec::new(), point(0.0, 0.0), 5.0).is_empty());
    }

    proptest! {
        #[test]
        fn rank_within_never_exceeds_the_radius(
            radius_km in 0.1f64..50.0,
            offsets in prop::collection::vec((-0.5f64..0.5, -0.5f64..0.5), 0..40),
        ) {
            let origin = point(45.0, 7.0);
            let candidates = offsets
                .iter()
                .enumerate()
                .map(|(index, (d_lat, d_lon))| candidate(&index.to_string(), 45.0 + d_lat, 7.0 + d_lon))
                .collect::<Vec<_>>();

            let ranked = rank_within(candidates, origin, radius_km);

            prop_assert!(ranked.iter().all(|ranked| ranked.distance_km <= radius_km));
            prop_assert!(ranked.windows(2).all(|pair| pair[0].distance_km <= pair[1].distance_km));
        }
    }
}
