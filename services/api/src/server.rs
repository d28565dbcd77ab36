use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCheckInRepository};
use crate::routes::with_wellbeing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use safespace::config::AppConfig;
use safespace::error::AppError;
use safespace::history::CheckInHistoryService;
use safespace::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryCheckInRepository::default());
    let history_service = Arc::new(CheckInHistoryService::new(
        repository,
        config.history,
    ));

    let app = with_wellbeing_routes(history_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        history_limit = config.history.max_entries,
        "safespace check-in service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
