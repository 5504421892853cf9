use serde::{Deserialize, Serialize};

/// Singleton document id for the SWOT matrix.
pub const SWOT_DOC: &str = "current";

/// One SWOT entry with an impact score in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotItem {
    pub text: String,
    #[serde(default)]
    pub score: i64,
}

/// Four-quadrant SWOT matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotMatrix {
    #[serde(default)]
    pub strengths: Vec<SwotItem>,
    #[serde(default)]
    pub weaknesses: Vec<SwotItem>,
    #[serde(default)]
    pub opportunities: Vec<SwotItem>,
    #[serde(default)]
    pub threats: Vec<SwotItem>,
}

/// Summed scores per quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantTotals {
    pub strengths: i64,
    pub weaknesses: i64,
    pub opportunities: i64,
    pub threats: i64,
}

impl QuadrantTotals {
    pub const fn grand_total(&self) -> i64 {
        self.strengths + self.weaknesses + self.opportunities + self.threats
    }
}

impl SwotMatrix {
    pub fn quadrant_totals(&self) -> QuadrantTotals {
        fn sum(items: &[SwotItem]) -> i64 {
            items.iter().map(|item| item.score).sum()
        }
        QuadrantTotals {
            strengths: sum(&self.strengths),
            weaknesses: sum(&self.weaknesses),
            opportunities: sum(&self.opportunities),
            threats: sum(&self.threats),
        }
    }

    /// Net favorability in `[-100, 100]`: positive score mass minus negative
    /// mass as a rounded percentage of all points. An empty matrix is zero.
    pub fn favorability_index(&self) -> i32 {
        let totals = self.quadrant_totals();
        let grand_total = totals.grand_total();
        if grand_total <= 0 {
            return 0;
        }
        let favorable = (totals.strengths + totals.opportunities) as f64;
        let unfavorable = (totals.weaknesses + totals.threats) as f64;
        ((favorable - unfavorable) / grand_total as f64 * 100.0).round() as i32
    }

    pub fn scenario(&self) -> Scenario {
        Scenario::classify(self.favorability_index())
    }
}

/// Reading of a favorability index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Favorable,
    Balanced,
    Critical,
}

impl Scenario {
    pub const fn classify(index: i32) -> Self {
        if index > 20 {
            Self::Favorable
        } else if index < -20 {
            Self::Critical
        } else {
            Self::Balanced
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Favorable => "Favorable Scenario",
            Self::Balanced => "Balanced Scenario",
            Self::Critical => "Critical Scenario",
        }
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Favorable => "Leverage your strengths to capitalize on opportunities.",
            Self::Balanced => "Balanced scenario: act on weaknesses while defending strengths.",
            Self::Critical => "Prioritize mitigating risks and weaknesses.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, score: i64) -> SwotItem {
        SwotItem {
            text: text.to_string(),
            score,
        }
    }

    #[test]
    fn empty_matrix_is_balanced_at_zero() {
        let matrix = SwotMatrix::default();
        assert_eq!(matrix.favorability_index(), 0);
        assert_eq!(matrix.scenario(), Scenario::Balanced);
    }

    #[test]
    fn all_positive_mass_reaches_one_hundred() {
        let matrix = SwotMatrix {
            strengths: vec![item("brand", 80)],
            opportunities: vec![item("new market", 20)],
            ..Default::default()
        };
        assert_eq!(matrix.favorability_index(), 100);
        assert_eq!(matrix.scenario(), Scenario::Favorable);
    }

    #[test]
    fn negative_mass_drives_the_index_down() {
        let matrix = SwotMatrix {
            strengths: vec![item("team", 10)],
            threats: vec![item("new entrant", 70)],
            weaknesses: vec![item("cash flow", 20)],
            ..Default::default()
        };
        // (10 - 90) / 100 = -80%
        assert_eq!(matrix.favorability_index(), -80);
        assert_eq!(matrix.scenario(), Scenario::Critical);
    }

    #[test]
    fn index_rounds_to_nearest_percent() {
        let matrix = SwotMatrix {
            strengths: vec![item("a", 2)],
            weaknesses: vec![item("b", 1)],
            ..Default::default()
        };
        // (2 - 1) / 3 = 33.33.. -> 33
        assert_eq!(matrix.favorability_index(), 33);
    }

    #[test]
    fn band_edges_stay_balanced() {
        assert_eq!(Scenario::classify(20), Scenario::Balanced);
        assert_eq!(Scenario::classify(21), Scenario::Favorable);
        assert_eq!(Scenario::classify(-20), Scenario::Balanced);
        assert_eq!(Scenario::classify(-21), Scenario::Critical);
    }
}
