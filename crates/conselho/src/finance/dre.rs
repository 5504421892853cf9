use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Planned and realized amount for one statement line, in currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LineAmount {
    #[serde(default)]
    pub planned: f64,
    #[serde(default)]
    pub real: f64,
}

impl LineAmount {
    /// Realized minus planned.
    pub fn variation(&self) -> f64 {
        self.real - self.planned
    }

    /// Variation as a percentage of plan; undefined when nothing was planned.
    pub fn variation_percent(&self) -> Option<f64> {
        if self.planned == 0.0 {
            None
        } else {
            Some(self.variation() / self.planned * 100.0)
        }
    }
}

/// The nine editable statement lines, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DreLine {
    RevProducts,
    RevServices,
    RevFinancial,
    RevNonOp,
    Taxes,
    CostVariable,
    CostFixed,
    Investments,
    CostNonOp,
}

impl DreLine {
    pub const ORDERED: [DreLine; 9] = [
        Self::RevProducts,
        Self::RevServices,
        Self::RevFinancial,
        Self::RevNonOp,
        Self::Taxes,
        Self::CostVariable,
        Self::CostFixed,
        Self::Investments,
        Self::CostNonOp,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::RevProducts => "revProducts",
            Self::RevServices => "revServices",
            Self::RevFinancial => "revFinancial",
            Self::RevNonOp => "revNonOp",
            Self::Taxes => "taxes",
            Self::CostVariable => "costVariable",
            Self::CostFixed => "costFixed",
            Self::Investments => "investments",
            Self::CostNonOp => "costNonOp",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ORDERED.into_iter().find(|line| line.key() == key)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RevProducts => "Product Revenue (+)",
            Self::RevServices => "Service Revenue (+)",
            Self::RevFinancial => "Financial Income (+)",
            Self::RevNonOp => "Non-Operating Income (+)",
            Self::Taxes => "Taxes (-)",
            Self::CostVariable => "Variable Expenses (-)",
            Self::CostFixed => "Fixed Expenses (-)",
            Self::Investments => "Investments (-)",
            Self::CostNonOp => "Non-Operating Outflow (-)",
        }
    }

    pub const fn is_revenue(self) -> bool {
        matches!(
            self,
            Self::RevProducts | Self::RevServices | Self::RevFinancial | Self::RevNonOp
        )
    }
}

/// One month of the income statement, keyed by `YYYY-MM` in storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatement {
    #[serde(default)]
    pub rev_products: LineAmount,
    #[serde(default)]
    pub rev_services: LineAmount,
    #[serde(default)]
    pub rev_financial: LineAmount,
    #[serde(default)]
    pub rev_non_op: LineAmount,
    #[serde(default)]
    pub taxes: LineAmount,
    #[serde(default)]
    pub cost_variable: LineAmount,
    #[serde(default)]
    pub cost_fixed: LineAmount,
    #[serde(default)]
    pub investments: LineAmount,
    #[serde(default)]
    pub cost_non_op: LineAmount,
}

impl MonthlyStatement {
    pub fn line(&self, line: DreLine) -> LineAmount {
        match line {
            DreLine::RevProducts => self.rev_products,
            DreLine::RevServices => self.rev_services,
            DreLine::RevFinancial => self.rev_financial,
            DreLine::RevNonOp => self.rev_non_op,
            DreLine::Taxes => self.taxes,
            DreLine::CostVariable => self.cost_variable,
            DreLine::CostFixed => self.cost_fixed,
            DreLine::Investments => self.investments,
            DreLine::CostNonOp => self.cost_non_op,
        }
    }

    pub fn line_mut(&mut self, line: DreLine) -> &mut LineAmount {
        match line {
            DreLine::RevProducts => &mut self.rev_products,
            DreLine::RevServices => &mut self.rev_services,
            DreLine::RevFinancial => &mut self.rev_financial,
            DreLine::RevNonOp => &mut self.rev_non_op,
            DreLine::Taxes => &mut self.taxes,
            DreLine::CostVariable => &mut self.cost_variable,
            DreLine::CostFixed => &mut self.cost_fixed,
            DreLine::Investments => &mut self.investments,
            DreLine::CostNonOp => &mut self.cost_non_op,
        }
    }

    fn sum(&self, revenue: bool) -> LineAmount {
        let mut total = LineAmount::default();
        for line in DreLine::ORDERED {
            if line.is_revenue() == revenue {
                let amount = self.line(line);
                total.planned += amount.planned;
                total.real += amount.real;
            }
        }
        total
    }

    pub fn total_revenue(&self) -> LineAmount {
        self.sum(true)
    }

    pub fn total_outflow(&self) -> LineAmount {
        self.sum(false)
    }

    pub fn net_profit(&self) -> LineAmount {
        let revenue = self.total_revenue();
        let outflow = self.total_outflow();
        LineAmount {
            planned: revenue.planned - outflow.planned,
            real: revenue.real - outflow.real,
        }
    }
}

/// Formats a month key the way statements are stored, e.g. `2026-03`.
pub fn month_id(year: i32, month: u32) -> String {
    format!("{year}-{month:02}")
}

/// Parses a `YYYY-MM` key. Only the canonical zero-padded form is accepted,
/// and impossible months are rejected via chrono.
pub fn parse_month(id: &str) -> Option<(i32, u32)> {
    let (year, month) = id.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((year, month))
}

/// Twelve months of statements plus annual rollups.
#[derive(Debug, Clone, Serialize)]
pub struct AnnualPlan {
    pub year: i32,
    pub months: Vec<MonthSummary>,
    pub total_revenue: LineAmount,
    pub total_outflow: LineAmount,
    pub net_profit: LineAmount,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    pub month: String,
    pub statement: MonthlyStatement,
    pub total_revenue: LineAmount,
    pub total_outflow: LineAmount,
    pub net_profit: LineAmount,
}

impl AnnualPlan {
    pub fn from_months(year: i32, statements: Vec<(u32, MonthlyStatement)>) -> Self {
        let mut months = Vec::with_capacity(12);
        let mut total_revenue = LineAmount::default();
        let mut total_outflow = LineAmount::default();

        for (month, statement) in statements {
            let revenue = statement.total_revenue();
            let outflow = statement.total_outflow();
            total_revenue.planned += revenue.planned;
            total_revenue.real += revenue.real;
            total_outflow.planned += outflow.planned;
            total_outflow.real += outflow.real;
            months.push(MonthSummary {
                month: month_id(year, month),
                net_profit: statement.net_profit(),
                total_revenue: revenue,
                total_outflow: outflow,
                statement,
            });
        }

        let net_profit = LineAmount {
            planned: total_revenue.planned - total_outflow.planned,
            real: total_revenue.real - total_outflow.real,
        };
        Self {
            year,
            months,
            total_revenue,
            total_outflow,
            net_profit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_split_revenue_from_outflow() {
        let mut statement = MonthlyStatement::default();
        statement.rev_products = LineAmount {
            planned: 1000.0,
            real: 900.0,
        };
        statement.rev_services = LineAmount {
            planned: 500.0,
            real: 700.0,
        };
        statement.taxes = LineAmount {
            planned: 200.0,
            real: 180.0,
        };
        statement.cost_fixed = LineAmount {
            planned: 300.0,
            real: 300.0,
        };

        assert_eq!(statement.total_revenue().planned, 1500.0);
        assert_eq!(statement.total_revenue().real, 1600.0);
        assert_eq!(statement.total_outflow().planned, 500.0);
        assert_eq!(statement.net_profit().planned, 1000.0);
        assert_eq!(statement.net_profit().real, 1120.0);
    }

    #[test]
    fn variation_percent_is_undefined_without_a_plan() {
        let amount = LineAmount {
            planned: 0.0,
            real: 250.0,
        };
        assert_eq!(amount.variation(), 250.0);
        assert!(amount.variation_percent().is_none());

        let planned = LineAmount {
            planned: 200.0,
            real: 250.0,
        };
        assert_eq!(planned.variation_percent(), Some(25.0));
    }

    #[test]
    fn line_keys_round_trip() {
        for line in DreLine::ORDERED {
            assert_eq!(DreLine::from_key(line.key()), Some(line));
        }
        assert_eq!(DreLine::from_key("totalRev"), None);
    }

    #[test]
    fn month_ids_are_zero_padded_and_validated() {
        assert_eq!(month_id(2026, 3), "2026-03");
        assert_eq!(parse_month("2026-03"), Some((2026, 3)));
        assert_eq!(parse_month("2026-13"), None);
        assert_eq!(parse_month("2026-3"), None);
        assert_eq!(parse_month("march"), None);
    }

    #[test]
    fn annual_rollup_sums_every_month() {
        let mut january = MonthlyStatement::default();
        january.rev_products = LineAmount {
            planned: 100.0,
            real: 110.0,
        };
        let mut february = MonthlyStatement::default();
        february.cost_fixed = LineAmount {
            planned: 40.0,
            real: 45.0,
        };

        let plan = AnnualPlan::from_months(2026, vec![(1, january), (2, february)]);
        assert_eq!(plan.total_revenue.planned, 100.0);
        assert_eq!(plan.total_outflow.real, 45.0);
        assert_eq!(plan.net_profit.real, 65.0);
        assert_eq!(plan.months[1].month, "2026-02");
    }
}
