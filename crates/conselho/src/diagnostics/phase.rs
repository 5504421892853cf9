use std::collections::BTreeSet;

use serde::Serialize;

use super::questions::PHASE_CHECKLIST_LEN;

/// One of the seven fixed company maturity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompanyPhase {
    pub number: u8,
    pub name: &'static str,
}

// Fixed business policy. The uneven breakpoints are intentional content,
// not derived from checklist arithmetic.
const PHASE_BREAKPOINTS: [(u8, CompanyPhase); 6] = [
    (
        8,
        CompanyPhase {
            number: 1,
            name: "Phase 1 - Survival",
        },
    ),
    (
        15,
        CompanyPhase {
            number: 2,
            name: "Phase 2 - Organization",
        },
    ),
    (
        20,
        CompanyPhase {
            number: 3,
            name: "Phase 3 - Growth",
        },
    ),
    (
        24,
        CompanyPhase {
            number: 4,
            name: "Phase 4 - Consolidation",
        },
    ),
    (
        26,
        CompanyPhase {
            number: 5,
            name: "Phase 5 - Expansion",
        },
    ),
    (
        29,
        CompanyPhase {
            number: 6,
            name: "Phase 6 - Transformation",
        },
    ),
];

const PHASE_KINGDOM: CompanyPhase = CompanyPhase {
    number: 7,
    name: "Phase 7 - Kingdom",
};

/// Maps a checklist total to its maturity phase. Breakpoints are inclusive
/// and evaluated top to bottom; first match wins.
pub fn classify_phase(total_score: u8) -> CompanyPhase {
    for (ceiling, phase) in PHASE_BREAKPOINTS {
        if total_score <= ceiling {
            return phase;
        }
    }
    PHASE_KINGDOM
}

/// Result of a phase assessment over the 30-item checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseOutcome {
    pub total_score: u8,
    pub phase: CompanyPhase,
}

/// Scores a set of affirmed checklist indices. Indices beyond the checklist
/// are ignored so the total stays within `[0, 30]`.
pub fn assess_phase(checked: &BTreeSet<u8>) -> PhaseOutcome {
    let total_score = checked
        .iter()
        .filter(|index| (**index as usize) < PHASE_CHECKLIST_LEN)
        .count() as u8;
    PhaseOutcome {
        total_score,
        phase: classify_phase(total_score),
    }
}
