use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_readiness_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use five_good::config::AppConfig;
use five_good::error::AppError;
use five_good::profiles::{InMemoryProfileRepository, ReadinessService};
use five_good::readiness::ReadinessEngine;
use five_good::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let engine = ReadinessEngine::new(config.readiness.clone());
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: Arc::new(engine.clone()),
    };

    let repository = Arc::new(InMemoryProfileRepository::default());
    let service = Arc::new(ReadinessService::new(repository, engine));

    let app = with_readiness_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        training_points_min = config.readiness.training_points_min,
        "readiness service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
