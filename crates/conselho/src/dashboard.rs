//! Home-panel overview: one composite read across diagnostics, finance,
//! people and projects.

use std::sync::Arc;

use serde::Serialize;

use crate::diagnostics::PhaseAssessment;
use crate::finance::{FinanceError, FinanceService};
use crate::people::{PeopleError, PeopleService};
use crate::projects::{ProjectsError, ProjectsService};
use crate::store::{collections, Saved, StoreError, UserId, UserStore};

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub company_phase: String,
    pub current_revenue: f64,
    pub team_health: f64,
    pub next_priority: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Finance(#[from] FinanceError),
    #[error(transparent)]
    People(#[from] PeopleError),
    #[error(transparent)]
    Projects(#[from] ProjectsError),
}

pub struct DashboardService<S> {
    store: Arc<S>,
    finance: FinanceService<S>,
    people: PeopleService<S>,
    projects: ProjectsService<S>,
}

impl<S: UserStore + 'static> DashboardService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            finance: FinanceService::new(Arc::clone(&store)),
            people: PeopleService::new(Arc::clone(&store)),
            projects: ProjectsService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Builds the overview for the given reporting month.
    pub fn overview(
        &self,
        user: &UserId,
        year: i32,
        month: u32,
    ) -> Result<Overview, DashboardError> {
        let company_phase = self
            .latest_phase(user)?
            .map(|assessment| assessment.phase_name)
            .unwrap_or_else(|| "Start your diagnostics".to_string());
        Ok(Overview {
            company_phase,
            current_revenue: self.finance.realized_revenue(user, year, month)?,
            team_health: self.people.team_health(user)?,
            next_priority: self.projects.next_priority(user)?,
        })
    }

    fn latest_phase(&self, user: &UserId) -> Result<Option<PhaseAssessment>, DashboardError> {
        let mut documents = self.store.list(user, collections::DIAGNOSE_PHASES)?;
        if documents.is_empty() {
            return Ok(None);
        }
        let saved = Saved::<PhaseAssessment>::from_document(documents.remove(0))?;
        Ok(Some(saved.record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsService;
    use crate::finance::{LineAmount, MonthlyStatement};
    use crate::insight::DisabledClient;
    use crate::projects::{Lane, ProjectTask};
    use crate::store::InMemoryUserStore;

    #[test]
    fn empty_account_yields_placeholder_overview() {
        let store = Arc::new(InMemoryUserStore::default());
        let dashboard = DashboardService::new(store);
        let overview = dashboard
            .overview(&UserId::from("owner-1"), 2026, 8)
            .unwrap();

        assert_eq!(overview.company_phase, "Start your diagnostics");
        assert_eq!(overview.current_revenue, 0.0);
        assert_eq!(overview.team_health, 0.0);
        assert_eq!(overview.next_priority, None);
    }

    #[test]
    fn overview_reflects_each_module() {
        let store = Arc::new(InMemoryUserStore::default());
        let user = UserId::from("owner-1");

        let diagnostics =
            DiagnosticsService::new(Arc::clone(&store), Arc::new(DisabledClient));
        diagnostics.save_phase(&user, (0..17).collect()).unwrap();

        let finance = FinanceService::new(Arc::clone(&store));
        let mut august = MonthlyStatement::default();
        august.rev_services = LineAmount {
            planned: 5000.0,
            real: 5400.0,
        };
        finance.upsert_month(&user, 2026, 8, &august).unwrap();

        let projects = ProjectsService::new(Arc::clone(&store));
        projects
            .add_task(
                &user,
                &ProjectTask {
                    title: "Review pricing".to_string(),
                    responsible: String::new(),
                    due_date: String::new(),
                    status: Lane::Todo,
                },
            )
            .unwrap();

        let dashboard = DashboardService::new(store);
        let overview = dashboard.overview(&user, 2026, 8).unwrap();
        assert_eq!(overview.company_phase, "Phase 3 - Growth");
        assert_eq!(overview.current_revenue, 5400.0);
        assert_eq!(overview.next_priority, Some("Review pricing".to_string()));
    }
}
