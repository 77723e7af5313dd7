//! Bulk evaluation of a class roster exported by the faculty office.

mod parser;
mod report;

pub use report::{CategoryPassEntry, CohortEntry, CohortReport, StatusCounts};

use std::io::Read;
use std::path::Path;

use crate::profiles::StudentId;
use crate::readiness::{ReadinessEngine, StudentClass, UnknownStudentClass};

#[derive(Debug, thiserror::Error)]
pub enum CohortImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster row for {student_id}: {source}")]
    StudentClass {
        student_id: String,
        source: UnknownStudentClass,
    },
}

/// Reads a roster CSV and evaluates every student in it.
pub struct CohortImporter;

impl CohortImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        engine: &ReadinessEngine,
    ) -> Result<CohortReport, CohortImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, engine)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        engine: &ReadinessEngine,
    ) -> Result<CohortReport, CohortImportError> {
        let records = parser::parse_records(reader)?;
        let mut evaluations = Vec::with_capacity(records.len());

        for record in records {
            // Rows without a class are treated as university students.
            let student_class = match record.student_class.as_deref() {
                Some(raw) => raw
                    .parse::<StudentClass>()
                    .map_err(|source| CohortImportError::StudentClass {
                        student_id: record.student_id.clone(),
                        source,
                    })?,
                None => StudentClass::University,
            };
            let result = engine.evaluate(&record.criteria, student_class);
            evaluations.push((StudentId(record.student_id), student_class, result));
        }

        Ok(CohortReport::from_evaluations(evaluations))
    }
}
