use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use conselho::dashboard::DashboardService;
use conselho::diagnostics::questions::{behavioral_questions, strategic_questions};
use conselho::diagnostics::{DiagnosticsError, DiagnosticsService};
use conselho::insight::{AnalysisClient, AnalysisError, DisabledClient, ANALYSIS_UNAVAILABLE};
use conselho::store::{InMemoryUserStore, UserId};

struct FlakyClient;

impl AnalysisClient for FlakyClient {
    fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
        Err(AnalysisError::Transport("connection reset".to_string()))
    }
}

fn owner() -> UserId {
    UserId::from("owner-1")
}

#[test]
fn full_diagnostic_cycle_builds_the_dashboard_phase() {
    let store = Arc::new(InMemoryUserStore::default());
    let diagnostics = DiagnosticsService::new(Arc::clone(&store), Arc::new(DisabledClient));

    // a fairly mature company: 22 of 30 checklist items
    let checked: BTreeSet<u8> = (0..22).collect();
    let saved = diagnostics.save_phase(&owner(), checked).unwrap();
    assert_eq!(saved.record.phase_name, "Phase 4 - Consolidation");

    let dashboard = DashboardService::new(store);
    let overview = dashboard.overview(&owner(), 2026, 8).unwrap();
    assert_eq!(overview.company_phase, "Phase 4 - Consolidation");
}

#[test]
fn assessments_survive_a_failing_analysis_backend() {
    let store = Arc::new(InMemoryUserStore::default());
    let diagnostics = DiagnosticsService::new(store, Arc::new(FlakyClient));

    let answers: BTreeMap<char, bool> = strategic_questions()
        .iter()
        .map(|question| (question.id, true))
        .collect();
    let saved = diagnostics.save_strategic(&owner(), answers).unwrap();

    assert_eq!(saved.record.scores.total(), 24);
    assert_eq!(saved.record.ai_analysis, ANALYSIS_UNAVAILABLE);
    assert_eq!(diagnostics.strategic_history(&owner()).unwrap().len(), 1);
}

#[test]
fn histories_list_newest_first_and_delete_by_id() {
    let store = Arc::new(InMemoryUserStore::default());
    let diagnostics = DiagnosticsService::new(store, Arc::new(DisabledClient));

    diagnostics
        .save_phase(&owner(), (0..3).collect())
        .unwrap();
    let newest = diagnostics
        .save_phase(&owner(), (0..28).collect())
        .unwrap();

    let history = diagnostics.phase_history(&owner()).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].record.total_score, 28);

    diagnostics.delete_phase(&owner(), &newest.id).unwrap();
    let history = diagnostics.phase_history(&owner()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].record.total_score, 3);
}

#[test]
fn behavioral_submission_is_validated_against_the_question_bank() {
    let store = Arc::new(InMemoryUserStore::default());
    let diagnostics = DiagnosticsService::new(store, Arc::new(DisabledClient));

    let mut answers: BTreeMap<u8, u8> = behavioral_questions()
        .iter()
        .map(|question| (question.number, question.options[2].profile.number()))
        .collect();

    // swap in an option that belongs to a different question
    answers.insert(2, 7);
    let error = diagnostics
        .save_behavioral(&owner(), answers.clone())
        .unwrap_err();
    assert!(matches!(
        error,
        DiagnosticsError::InvalidChoice {
            question: 2,
            profile: 7
        }
    ));

    // restore it and the save goes through
    answers.insert(2, 6);
    let saved = diagnostics.save_behavioral(&owner(), answers).unwrap();
    // third options tally profiles 3, 6 and 9 five times each; tie breaks low
    assert_eq!(saved.record.dominant_number, 3);
    assert_eq!(saved.record.triad_scores.heart, 5);
    assert_eq!(saved.record.triad_scores.mind, 5);
    assert_eq!(saved.record.triad_scores.body, 5);
}
