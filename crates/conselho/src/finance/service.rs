use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;

use tracing::info;

use crate::store::{collections, DocumentId, StoreError, UserId, UserStore};

use super::dre::{month_id, AnnualPlan, MonthlyStatement};
use super::import::{from_reader, PlanImportError};

#[derive(Debug, thiserror::Error)]
pub enum FinanceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Import(#[from] PlanImportError),
}

/// Monthly income statements stored one document per `YYYY-MM`.
pub struct FinanceService<S> {
    store: Arc<S>,
}

impl<S: UserStore + 'static> FinanceService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn upsert_month(
        &self,
        user: &UserId,
        year: i32,
        month: u32,
        statement: &MonthlyStatement,
    ) -> Result<(), FinanceError> {
        self.store.put(
            user,
            collections::FINANCE_DRE,
            &DocumentId(month_id(year, month)),
            crate::store::encode(statement)?,
        )?;
        Ok(())
    }

    /// A single month's statement; absent months read as all zeroes.
    pub fn month(
        &self,
        user: &UserId,
        year: i32,
        month: u32,
    ) -> Result<MonthlyStatement, FinanceError> {
        let document = self.store.get(
            user,
            collections::FINANCE_DRE,
            &DocumentId(month_id(year, month)),
        )?;
        Ok(match document {
            Some(document) => document.decode()?,
            None => MonthlyStatement::default(),
        })
    }

    /// All twelve months of a year with annual rollups.
    pub fn annual_plan(&self, user: &UserId, year: i32) -> Result<AnnualPlan, FinanceError> {
        let mut statements = Vec::with_capacity(12);
        for month in 1..=12 {
            statements.push((month, self.month(user, year, month)?));
        }
        Ok(AnnualPlan::from_months(year, statements))
    }

    /// Imports a `month,line,planned,real` CSV. The file is validated in
    /// full before any month is written; within the file, later rows for the
    /// same month and line win. Returns the number of rows applied.
    pub fn import_csv<R: Read>(&self, user: &UserId, reader: R) -> Result<usize, FinanceError> {
        let rows = from_reader(reader)?;
        let applied = rows.len();

        let mut touched: BTreeMap<(i32, u32), MonthlyStatement> = BTreeMap::new();
        for row in rows {
            let key = (row.year, row.month);
            if !touched.contains_key(&key) {
                let existing = self.month(user, row.year, row.month)?;
                touched.insert(key, existing);
            }
            if let Some(statement) = touched.get_mut(&key) {
                let amount = statement.line_mut(row.line);
                amount.planned = row.planned;
                amount.real = row.real;
            }
        }

        let months = touched.len();
        for ((year, month), statement) in touched {
            self.upsert_month(user, year, month, &statement)?;
        }
        info!(user = %user.0, rows = applied, months, "imported financial plan");
        Ok(applied)
    }

    /// Realized revenue of the given month, for the dashboard overview.
    pub fn realized_revenue(
        &self,
        user: &UserId,
        year: i32,
        month: u32,
    ) -> Result<f64, FinanceError> {
        Ok(self.month(user, year, month)?.total_revenue().real)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::dre::LineAmount;
    use crate::store::InMemoryUserStore;

    fn service() -> FinanceService<InMemoryUserStore> {
        FinanceService::new(Arc::new(InMemoryUserStore::default()))
    }

    #[test]
    fn upsert_then_read_back_a_month() {
        let service = service();
        let user = UserId::from("owner-1");
        let mut statement = MonthlyStatement::default();
        statement.rev_products = LineAmount {
            planned: 1200.0,
            real: 1100.0,
        };

        service.upsert_month(&user, 2026, 4, &statement).unwrap();
        assert_eq!(service.month(&user, 2026, 4).unwrap(), statement);
        assert_eq!(
            service.month(&user, 2026, 5).unwrap(),
            MonthlyStatement::default()
        );
    }

    #[test]
    fn import_applies_rows_and_keeps_untouched_lines() {
        let service = service();
        let user = UserId::from("owner-1");
        let mut existing = MonthlyStatement::default();
        existing.taxes = LineAmount {
            planned: 99.0,
            real: 88.0,
        };
        service.upsert_month(&user, 2026, 1, &existing).unwrap();

        let csv = "month,line,planned,real\n\
                   2026-01,revProducts,1000,950\n\
                   2026-02,costFixed,300,310\n";
        let applied = service.import_csv(&user, csv.as_bytes()).unwrap();
        assert_eq!(applied, 2);

        let january = service.month(&user, 2026, 1).unwrap();
        assert_eq!(january.rev_products.planned, 1000.0);
        assert_eq!(january.taxes.planned, 99.0);

        let february = service.month(&user, 2026, 2).unwrap();
        assert_eq!(february.cost_fixed.real, 310.0);
    }

    #[test]
    fn import_later_rows_win_within_a_file() {
        let service = service();
        let user = UserId::from("owner-1");
        let csv = "month,line,planned,real\n\
                   2026-03,revServices,100,100\n\
                   2026-03,revServices,250,240\n";
        service.import_csv(&user, csv.as_bytes()).unwrap();

        let march = service.month(&user, 2026, 3).unwrap();
        assert_eq!(march.rev_services.planned, 250.0);
        assert_eq!(march.rev_services.real, 240.0);
    }

    #[test]
    fn invalid_file_leaves_the_store_untouched() {
        let service = service();
        let user = UserId::from("owner-1");
        let csv = "month,line,planned,real\n\
                   2026-03,revServices,100,100\n\
                   2026-03,bogusLine,1,1\n";
        assert!(service.import_csv(&user, csv.as_bytes()).is_err());
        assert_eq!(
            service.month(&user, 2026, 3).unwrap(),
            MonthlyStatement::default()
        );
    }

    #[test]
    fn annual_plan_rolls_up_saved_months() {
        let service = service();
        let user = UserId::from("owner-1");
        let csv = "month,line,planned,real\n\
                   2026-01,revProducts,100,110\n\
                   2026-06,costVariable,40,35\n";
        service.import_csv(&user, csv.as_bytes()).unwrap();

        let plan = service.annual_plan(&user, 2026).unwrap();
        assert_eq!(plan.months.len(), 12);
        assert_eq!(plan.total_revenue.real, 110.0);
        assert_eq!(plan.net_profit.real, 75.0);
        assert_eq!(service.realized_revenue(&user, 2026, 1).unwrap(), 110.0);
    }
}
