//! Readiness evaluation for the Student 5 Good recognition programme.

pub mod cohort;
pub mod config;
pub mod error;
pub mod profiles;
pub mod readiness;
pub mod telemetry;
