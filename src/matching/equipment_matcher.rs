use crate::domain::{AmbulanceCandidate, EquipmentSet};

/// Keeps the candidates carrying every required tag. Tags compare as whole tokens, never as substrings.
pub fn filter_by_equipment(candidates: Vec<AmbulanceCandidate>, required: &EquipmentSet) -> Vec<AmbulanceCandidate> {
    if required.is_empty() {
        return candidates;
    }

    candidates.into_iter().filter(|candidate| candidate.equipment.is_superset(required)).collect()
}
