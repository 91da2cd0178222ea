mod candidate_repository;
mod fleet_loader;
mod in_memory;

pub use candidate_repository::{CandidateRepository, RepositoryError};
pub use fleet_loader::load_fleet_from;
pub use in_memory::InMemoryCandidateRepository;
