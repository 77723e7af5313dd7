//! Criteria storage boundary and the HTTP surface over the readiness engine.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CriteriaUpdate, StudentId, StudentProfile};
pub use repository::{InMemoryProfileRepository, ProfileRepository, RepositoryError};
pub use router::profile_router;
pub use service::{ReadinessService, ReadinessServiceError, StudentReadiness};
