use crate::cli::ServeArgs;
use crate::infra::{AppState, CandidateService};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_search::config::AppConfig;
use talent_search::error::AppError;
use talent_search::telemetry;
use talent_search::workflows::candidates::{CandidateDataSource, HttpCsvFeed};
use talent_search::workflows::intake::HttpIntakeWebhook;
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

    let sources = &config.sources;
    let feed = HttpCsvFeed::new(sources.sheet_url.clone(), sources.fetch_timeout)?;
    let webhook = HttpIntakeWebhook::new(sources.webhook_url.clone(), sources.fetch_timeout)?;
    let service =
        Arc::new(CandidateService::bootstrap(CandidateDataSource::new(feed), webhook).await);

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "talent search dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
