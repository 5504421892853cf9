use std::sync::Arc;

use conselho::dashboard::DashboardService;
use conselho::finance::{FinanceError, FinanceService, PlanImportError};
use conselho::insight::{AnalysisClient, AnalysisError};
use conselho::store::{InMemoryUserStore, UserId};
use conselho::strategy::{Scenario, SwotService};

fn owner() -> UserId {
    UserId::from("owner-1")
}

#[test]
fn imported_plan_feeds_the_annual_rollup_and_overview() {
    let store = Arc::new(InMemoryUserStore::default());
    let finance = FinanceService::new(Arc::clone(&store));

    let csv = "month,line,planned,real\n\
               2026-08,revProducts,20000,18500\n\
               2026-08,revServices,5000,6100\n\
               2026-08,taxes,3000,2900\n\
               2026-08,costFixed,8000,8000\n";
    assert_eq!(finance.import_csv(&owner(), csv.as_bytes()).unwrap(), 4);

    let plan = finance.annual_plan(&owner(), 2026).unwrap();
    assert_eq!(plan.total_revenue.real, 24600.0);
    assert_eq!(plan.net_profit.real, 13700.0);

    let dashboard = DashboardService::new(store);
    let overview = dashboard.overview(&owner(), 2026, 8).unwrap();
    assert_eq!(overview.current_revenue, 24600.0);
}

#[test]
fn a_bad_row_rejects_the_whole_file() {
    let store = Arc::new(InMemoryUserStore::default());
    let finance = FinanceService::new(store);

    let csv = "month,line,planned,real\n\
               2026-08,revProducts,20000,18500\n\
               2026-8,revServices,5000,6100\n";
    let error = finance.import_csv(&owner(), csv.as_bytes()).unwrap_err();
    assert!(matches!(
        error,
        FinanceError::Import(PlanImportError::InvalidMonth { row: 3, .. })
    ));
    assert_eq!(finance.annual_plan(&owner(), 2026).unwrap().total_revenue.real, 0.0);
}

struct CannedClient(&'static str);

impl AnalysisClient for CannedClient {
    fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
        Ok(self.0.to_string())
    }
}

#[test]
fn generated_swot_is_persisted_with_its_reading() {
    let store = Arc::new(InMemoryUserStore::default());
    let reply = r#"{"strengths":[{"text":"recurring revenue","score":70}],
                    "weaknesses":[{"text":"single supplier","score":50}],
                    "opportunities":[{"text":"adjacent market","score":60}],
                    "threats":[{"text":"price war","score":40}]}"#;
    let swot = SwotService::new(Arc::clone(&store), Arc::new(CannedClient(reply)));

    let report = swot.generate(&owner()).unwrap();
    // (130 - 90) / 220 = 18% -> balanced
    assert_eq!(report.favorability_index, 18);
    assert_eq!(report.scenario, Scenario::Balanced);

    let reloaded = swot.load(&owner()).unwrap();
    assert_eq!(reloaded.favorability_index, 18);
    assert_eq!(reloaded.matrix.strengths.len(), 1);
}
