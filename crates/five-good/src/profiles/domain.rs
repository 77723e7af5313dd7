use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::readiness::{CriteriaInput, StudentClass};

/// Student identifier as issued by the university registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stored criteria for one student. Evaluations are never persisted alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: StudentId,
    pub student_class: StudentClass,
    pub criteria: CriteriaInput,
    pub updated_at: DateTime<Utc>,
}

/// Payload for replacing a student's criteria.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CriteriaUpdate {
    #[serde(default)]
    pub student_class: StudentClass,
    #[serde(default)]
    pub criteria: CriteriaInput,
}
