use crate::domain::{EquipmentSet, GeoPoint, equipment_set};

/// An ambulance as supplied by the candidate repository.
#[derive(Clone, PartialEq, Debug)]
pub struct AmbulanceCandidate {
    pub id: String,
    pub location: GeoPoint,
    pub equipment: EquipmentSet,
    /// `false` when no course is assigned or the assigned course is completed.
    pub has_active_course: bool,
}

impl AmbulanceCandidate {
    pub fn new<I, S>(id: impl Into<String>, location: GeoPoint, equipment: I, has_active_course: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        AmbulanceCandidate {
            id: id.into(),
            location,
            equipment: equipment_set(equipment),
            has_active_course,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RankedMatch {
    pub ambulance: AmbulanceCandidate,
    pub distance_km: f64,
}
