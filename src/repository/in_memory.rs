use crate::domain::{AmbulanceCandidate, BoundingBox};
use crate::repository::{CandidateRepository, RepositoryError};
use async_trait::async_trait;
use tracing::{instrument, trace};

/// Fleet held in memory, typically loaded once at startup.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    ambulances: Vec<AmbulanceCandidate>,
}

impl InMemoryCandidateRepository {
    pub fn new(ambulances: Vec<AmbulanceCandidate>) -> Self {
        InMemoryCandidateRepository { ambulances }
    }

    pub fn len(&self) -> usize {
        self.ambulances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ambulances.is_empty()
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    #[instrument(skip(self))]
    async fn find_candidates(&self, bbox: &BoundingBox) -> Result<Vec<AmbulanceCandidate>, RepositoryError> {
        let candidates = self
            .ambulances
            .iter()
            .filter(|ambulance| !ambulance.has_active_course && bbox.contains(&ambulance.location))
            .cloned()
            .collect::<Vec<_>>();

        trace!("Found {} candidate(s) out of {} ambulance(s)", candidates.len(), self.ambulances.len());
        Ok(candidates)
    }
}
