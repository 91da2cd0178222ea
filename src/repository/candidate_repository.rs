use crate::domain::{AmbulanceCandidate, BoundingBox};
use async_trait::async_trait;
use thiserror::Error;

/// Source of dispatchable ambulances.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Returns the ambulances located inside `bbox` that have no active course.
    async fn find_candidates(&self, bbox: &BoundingBox) -> Result<Vec<AmbulanceCandidate>, RepositoryError>;
}

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Raised by repositories backed by an external store, the in-memory fleet never fails.
    #[allow(dead_code)]
    #[error("candidate repository unavailable: {0}")]
    Unavailable(String),
}
