use five_good::config::AppConfig;
use five_good::error::AppError;
use five_good::readiness::{ReadinessEngine, StudentClass};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<ReadinessEngine>,
}

/// Engine built from the deployment's configured thresholds.
pub(crate) fn configured_engine() -> Result<ReadinessEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(ReadinessEngine::new(config.readiness))
}

pub(crate) fn parse_student_class(raw: &str) -> Result<StudentClass, String> {
    raw.parse::<StudentClass>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_class_argument_reports_bad_values() {
        assert_eq!(parse_student_class("college"), Ok(StudentClass::College));
        let err = parse_student_class("lyceum").expect_err("rejected");
        assert!(err.contains("lyceum"));
    }
}
