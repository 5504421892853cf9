//! Financial planning: monthly income statements (DRE), annual rollups, and
//! CSV plan import.

pub mod dre;
pub mod import;
mod service;

pub use dre::{AnnualPlan, DreLine, LineAmount, MonthSummary, MonthlyStatement};
pub use import::{PlanImportError, PlanRow};
pub use service::{FinanceError, FinanceService};
