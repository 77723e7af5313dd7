use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::readiness::ReadinessThresholds;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub readiness: ReadinessThresholds,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            readiness: load_thresholds()?,
        })
    }
}

/// Policy thresholds may be overridden per deployment; everything else keeps its default.
fn load_thresholds() -> Result<ReadinessThresholds, ConfigError> {
    let defaults = ReadinessThresholds::default();

    Ok(ReadinessThresholds {
        training_points_min: threshold_var(
            "FIVE_GOOD_TRAINING_POINTS_MIN",
            defaults.training_points_min,
        )?,
        gpa_min_university: gpa_var("FIVE_GOOD_GPA_MIN_UNIVERSITY", defaults.gpa_min_university)?,
        gpa_min_college: gpa_var("FIVE_GOOD_GPA_MIN_COLLEGE", defaults.gpa_min_college)?,
        volunteer_days_min: threshold_var(
            "FIVE_GOOD_VOLUNTEER_DAYS_MIN",
            defaults.volunteer_days_min,
        )?,
        ..defaults
    })
}

fn threshold_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidThreshold { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// GPA floors live on the 4-point scale; NaN or infinity would disable the study check.
fn gpa_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let value = threshold_var(name, default)?;
    if value.is_finite() && (0.0..=4.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidThreshold {
            name,
            value: env::var(name).unwrap_or_else(|_| value.to_string()),
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { name, value } => {
                write!(f, "{name} has an invalid value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidThreshold { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "FIVE_GOOD_TRAINING_POINTS_MIN",
            "FIVE_GOOD_GPA_MIN_UNIVERSITY",
            "FIVE_GOOD_GPA_MIN_COLLEGE",
            "FIVE_GOOD_VOLUNTEER_DAYS_MIN",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.readiness, ReadinessThresholds::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn threshold_overrides_are_applied() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("FIVE_GOOD_TRAINING_POINTS_MIN", "85");
        env::set_var("FIVE_GOOD_GPA_MIN_COLLEGE", "3.0");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.readiness.training_points_min, 85);
        assert_eq!(config.readiness.gpa_min_college, 3.0);
        assert_eq!(config.readiness.gpa_min_university, 3.4);
        reset_env();
    }

    #[test]
    fn rejects_malformed_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("FIVE_GOOD_VOLUNTEER_DAYS_MIN", "five");
        let err = AppConfig::load().expect_err("invalid threshold rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidThreshold {
                name: "FIVE_GOOD_VOLUNTEER_DAYS_MIN",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn rejects_gpa_threshold_outside_the_grade_scale() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        for raw in ["NaN", "inf", "-1", "4.5"] {
            reset_env();
            env::set_var("FIVE_GOOD_GPA_MIN_UNIVERSITY", raw);
            let err = AppConfig::load().expect_err("out-of-scale GPA rejected");
            match err {
                ConfigError::InvalidThreshold { name, value } => {
                    assert_eq!(name, "FIVE_GOOD_GPA_MIN_UNIVERSITY");
                    assert_eq!(value, raw);
                }
                other => panic!("expected invalid threshold for {raw}, got {other:?}"),
            }
        }

        reset_env();
        env::set_var("FIVE_GOOD_GPA_MIN_COLLEGE", "4.0");
        let config = AppConfig::load().expect("top of the scale is allowed");
        assert_eq!(config.readiness.gpa_min_college, 4.0);
        reset_env();
    }
}
