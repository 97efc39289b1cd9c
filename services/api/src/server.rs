use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReportRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use esgen::config::AppConfig;
use esgen::error::AppError;
use esgen::telemetry;
use esgen::workflows::assessment::AssessmentService;
use esgen::workflows::reports::ReportService;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let assessment_service = Arc::new(AssessmentService::new(config.assessment.counts));
    let repository = Arc::new(InMemoryReportRepository::default());
    let report_service = Arc::new(ReportService::new(repository, config.billing.pricing()));

    let app = with_service_routes(assessment_service, report_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        questions = config.assessment.counts.total(),
        price = config.billing.price,
        currency = %config.billing.currency,
        "esg assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
