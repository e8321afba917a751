use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_decision_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_decision::config::AppConfig;
use loan_decision::decision::{DecisionConfig, DecisionEngine};
use loan_decision::error::AppError;
use loan_decision::telemetry;
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

    let decision_config = DecisionConfig::default();
    info!(
        min_amount = decision_config.min_loan_amount,
        max_amount = decision_config.max_loan_amount,
        min_period = decision_config.min_loan_period,
        max_period = decision_config.max_loan_period,
        "decision limits loaded"
    );
    let engine = Arc::new(DecisionEngine::new(decision_config));

    let app = with_decision_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan decision service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
