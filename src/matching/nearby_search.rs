use crate::domain::{BoundingBox, RankedMatch, SearchRequest};
use crate::matching::{filter_by_equipment, rank_within};
use crate::repository::{CandidateRepository, RepositoryError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Finds available ambulances around a pickup point: bounding box prefilter, equipment filter, exact ranking.
pub struct NearbySearch {
    repository: Arc<dyn CandidateRepository>,
}

impl NearbySearch {
    pub fn new(repository: Arc<dyn CandidateRepository>) -> Self {
        NearbySearch { repository }
    }

    #[instrument(skip_all, fields(origin = %request.origin(), radius_km = request.radius_km()))]
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<RankedMatch>, RepositoryError> {
        let bbox = BoundingBox::around(request.origin(), request.radius_km());
        debug!(bbox = ?bbox, "🚑 Searching ambulances...");

        let candidates = self.repository.find_candidates(&bbox).await?;
        let num_candidates = candidates.len();

        let equipped = filter_by_equipment(candidates, request.required_equipment());
        let ranked = rank_within(equipped, request.origin(), request.radius_km());

        info!("🚑 Searching ambulances... OK, {} of {} candidate(s) matched", ranked.len(), num_candidates);
        Ok(ranked)
    }
}
