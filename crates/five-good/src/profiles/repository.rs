use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{StudentId, StudentProfile};

/// Storage abstraction for the criteria store so the service can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    /// Inserts or replaces the profile, returning what was stored.
    fn upsert(&self, profile: StudentProfile) -> Result<StudentProfile, RepositoryError>;
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentProfile>, RepositoryError>;
    fn list(&self) -> Result<Vec<StudentProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("profile not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local store used by the API binary and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProfileRepository {
    profiles: Arc<Mutex<BTreeMap<StudentId, StudentProfile>>>,
}

impl InMemoryProfileRepository {
    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<StudentId, StudentProfile>>, RepositoryError> {
        self.profiles
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store lock poisoned".to_string()))
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn upsert(&self, profile: StudentProfile) -> Result<StudentProfile, RepositoryError> {
        let mut guard = self.lock()?;
        guard.insert(profile.student_id.clone(), profile.clone());
        Ok(profile)
    }

    fn fetch(&self, id: &StudentId) -> Result<Option<StudentProfile>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<StudentProfile>, RepositoryError> {
        Ok(self.lock()?.values().cloned().collect())
    }
}
