use crate::cli::ServeArgs;
use crate::infra::{AppState, ModelClient, Services};
use crate::routes::application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use conselho::config::AppConfig;
use conselho::error::AppError;
use conselho::store::InMemoryUserStore;
use conselho::telemetry;
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

    let store = Arc::new(InMemoryUserStore::default());
    let client = Arc::new(ModelClient::from_config(&config.insight));
    let analysis_enabled = client.is_enabled();
    let services = Arc::new(Services::new(store, client));

    let app = application_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, analysis_enabled, "management dashboard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
