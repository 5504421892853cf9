use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use conselho::config::InsightConfig;
use conselho::dashboard::DashboardService;
use conselho::diagnostics::DiagnosticsService;
use conselho::finance::FinanceService;
use conselho::insight::{AnalysisClient, AnalysisError, DisabledClient, GeminiClient};
use conselho::people::PeopleService;
use conselho::personas::PersonaService;
use conselho::projects::ProjectsService;
use conselho::store::InMemoryUserStore;
use conselho::strategy::{IdentityService, SwotService};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Concrete analysis client picked at startup from the configured key.
pub(crate) enum ModelClient {
    Gemini(GeminiClient),
    Disabled(DisabledClient),
}

impl ModelClient {
    pub(crate) fn from_config(config: &InsightConfig) -> Self {
        match GeminiClient::from_config(config) {
            Some(client) => Self::Gemini(client),
            None => Self::Disabled(DisabledClient),
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        matches!(self, Self::Gemini(_))
    }
}

impl AnalysisClient for ModelClient {
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        match self {
            Self::Gemini(client) => client.generate(prompt),
            Self::Disabled(client) => client.generate(prompt),
        }
    }
}

/// Every domain service wired over one shared store and model client.
pub(crate) struct Services {
    pub(crate) diagnostics: Arc<DiagnosticsService<InMemoryUserStore, ModelClient>>,
    pub(crate) identity: Arc<IdentityService<InMemoryUserStore>>,
    pub(crate) swot: Arc<SwotService<InMemoryUserStore, ModelClient>>,
    pub(crate) finance: Arc<FinanceService<InMemoryUserStore>>,
    pub(crate) personas: Arc<PersonaService<InMemoryUserStore>>,
    pub(crate) people: Arc<PeopleService<InMemoryUserStore>>,
    pub(crate) projects: Arc<ProjectsService<InMemoryUserStore>>,
    pub(crate) dashboard: Arc<DashboardService<InMemoryUserStore>>,
}

impl Services {
    pub(crate) fn new(store: Arc<InMemoryUserStore>, client: Arc<ModelClient>) -> Self {
        Self {
            diagnostics: Arc::new(DiagnosticsService::new(
                Arc::clone(&store),
                Arc::clone(&client),
            )),
            identity: Arc::new(IdentityService::new(Arc::clone(&store))),
            swot: Arc::new(SwotService::new(Arc::clone(&store), client)),
            finance: Arc::new(FinanceService::new(Arc::clone(&store))),
            personas: Arc::new(PersonaService::new(Arc::clone(&store))),
            people: Arc::new(PeopleService::new(Arc::clone(&store))),
            projects: Arc::new(ProjectsService::new(Arc::clone(&store))),
            dashboard: Arc::new(DashboardService::new(store)),
        }
    }
}
