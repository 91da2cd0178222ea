use crate::domain::{EquipmentSet, GeoPoint, ValidationError, equipment_set};

pub const DEFAULT_RADIUS_KM: f64 = 5.0;

#[derive(Clone, PartialEq, Debug)]
pub struct SearchRequest {
    origin: GeoPoint,
    radius_km: f64,
    required_equipment: EquipmentSet,
}

impl SearchRequest {
    pub fn new<I, S>(origin: GeoPoint, radius_km: f64, required_equipment: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !(radius_km > 0.0 && radius_km.is_finite()) {
            return Err(ValidationError::Radius(radius_km));
        }

        Ok(SearchRequest {
            origin,
            radius_km,
            required_equipment: equipment_set(required_equipment),
        })
    }

    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn required_equipment(&self) -> &EquipmentSet {
        &self.required_equipment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn paris() -> GeoPoint {
        GeoPoint::new(48.8566, 2.3522).unwrap()
    }

    #[test]
    fn new_normalizes_the_required_equipment() {
        let request = SearchRequest::new(paris(), DEFAULT_RADIUS_KM, ["Oxygen ", "stretcher", ""]).unwrap();

        assert_eq!(request.radius_km(), 5.0);
        assert_eq!(request.required_equipment().iter().collect::<Vec<_>>(), vec!["oxygen", "stretcher"]);
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-1.5)]
    #[case::infinite(f64::INFINITY)]
    fn new_rejects_invalid_radius(#[case] radius_km: f64) {
        let result = SearchRequest::new(paris(), radius_km, Vec::<String>::new());
        assert_eq!(result, Err(ValidationError::Radius(radius_km)));
    }

    #[test]
    fn new_rejects_nan_radius() {
        assert!(SearchRequest::new(paris(), f64::NAN, Vec::<String>::new()).is_err());
    }
}
