use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::insight::{AnalysisClient, ANALYSIS_UNAVAILABLE};
use crate::store::{collections, DocumentId, Saved, StoreError, UserId, UserStore};

use super::behavioral::{score_behavioral, BehavioralOutcome, Profile};
use super::phase::{assess_phase, PhaseOutcome};
use super::questions::behavioral_questions;
use super::strategic::{score_strategic, StrategicScores};

#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError {
    #[error("assessment incomplete: expected {expected} answers, received {received}")]
    Incomplete { expected: usize, received: usize },
    #[error("question {question} does not offer profile {profile}")]
    InvalidChoice { question: u8, profile: u8 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Stored record of a strategic maturity assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategicAssessment {
    pub answers: BTreeMap<char, bool>,
    pub scores: StrategicScores,
    pub ai_analysis: String,
}

/// Stored record of a company-phase assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseAssessment {
    pub checked_items: BTreeSet<u8>,
    pub total_score: u8,
    pub phase_number: u8,
    pub phase_name: String,
    pub ai_analysis: String,
}

/// Stored record of a behavioral profile assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralAssessment {
    pub answers: BTreeMap<u8, u8>,
    pub profile_scores: BTreeMap<u8, u8>,
    pub triad_scores: super::behavioral::TriadScores,
    pub dominant_number: u8,
    pub dominant_name: String,
    pub ai_analysis: String,
}

/// Service persisting scored assessments with a generated narrative. Scoring
/// never fails; a narrative failure degrades to a fixed placeholder so the
/// assessment itself is always saved.
pub struct DiagnosticsService<S, A> {
    store: Arc<S>,
    analysis: Arc<A>,
}

impl<S, A> DiagnosticsService<S, A>
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    pub fn new(store: Arc<S>, analysis: Arc<A>) -> Self {
        Self { store, analysis }
    }

    fn narrative(&self, prompt: &str) -> String {
        match self.analysis.generate(prompt) {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "analysis generation failed, storing placeholder");
                ANALYSIS_UNAVAILABLE.to_string()
            }
        }
    }

    pub fn save_strategic(
        &self,
        user: &UserId,
        answers: BTreeMap<char, bool>,
    ) -> Result<Saved<StrategicAssessment>, DiagnosticsError> {
        let scores = score_strategic(&answers);
        let prompt = strategic_prompt(&scores);
        let record = StrategicAssessment {
            answers,
            scores,
            ai_analysis: self.narrative(&prompt),
        };
        let document = self
            .store
            .create(user, collections::DIAGNOSE_STRATEGIC, crate::store::encode(&record)?)?;
        Ok(Saved::from_parts(document.id, document.created_at, record))
    }

    pub fn strategic_history(
        &self,
        user: &UserId,
    ) -> Result<Vec<Saved<StrategicAssessment>>, DiagnosticsError> {
        let documents = self.store.list(user, collections::DIAGNOSE_STRATEGIC)?;
        collect_saved(documents)
    }

    pub fn delete_strategic(
        &self,
        user: &UserId,
        id: &DocumentId,
    ) -> Result<(), DiagnosticsError> {
        self.store.delete(user, collections::DIAGNOSE_STRATEGIC, id)?;
        Ok(())
    }

    pub fn save_phase(
        &self,
        user: &UserId,
        checked_items: BTreeSet<u8>,
    ) -> Result<Saved<PhaseAssessment>, DiagnosticsError> {
        let outcome = assess_phase(&checked_items);
        let prompt = phase_prompt(&outcome);
        let record = PhaseAssessment {
            checked_items,
            total_score: outcome.total_score,
            phase_number: outcome.phase.number,
            phase_name: outcome.phase.name.to_string(),
            ai_analysis: self.narrative(&prompt),
        };
        let document = self
            .store
            .create(user, collections::DIAGNOSE_PHASES, crate::store::encode(&record)?)?;
        Ok(Saved::from_parts(document.id, document.created_at, record))
    }

    pub fn phase_history(
        &self,
        user: &UserId,
    ) -> Result<Vec<Saved<PhaseAssessment>>, DiagnosticsError> {
        let documents = self.store.list(user, collections::DIAGNOSE_PHASES)?;
        collect_saved(documents)
    }

    pub fn delete_phase(&self, user: &UserId, id: &DocumentId) -> Result<(), DiagnosticsError> {
        self.store.delete(user, collections::DIAGNOSE_PHASES, id)?;
        Ok(())
    }

    /// Saves a behavioral assessment. Unlike the boolean questionnaires, a
    /// partial submission is rejected: every question must carry one of its
    /// own three options.
    pub fn save_behavioral(
        &self,
        user: &UserId,
        answers: BTreeMap<u8, u8>,
    ) -> Result<Saved<BehavioralAssessment>, DiagnosticsError> {
        let resolved = validate_behavioral(&answers)?;
        let outcome = score_behavioral(&resolved);
        let prompt = behavioral_prompt(&outcome);
        let record = BehavioralAssessment {
            answers,
            profile_scores: outcome.profile_scores.clone(),
            triad_scores: outcome.triad_scores,
            dominant_number: outcome.dominant.number,
            dominant_name: outcome.dominant.name.to_string(),
            ai_analysis: self.narrative(&prompt),
        };
        let document = self.store.create(
            user,
            collections::DIAGNOSE_BEHAVIORAL,
            crate::store::encode(&record)?,
        )?;
        Ok(Saved::from_parts(document.id, document.created_at, record))
    }

    pub fn behavioral_history(
        &self,
        user: &UserId,
    ) -> Result<Vec<Saved<BehavioralAssessment>>, DiagnosticsError> {
        let documents = self.store.list(user, collections::DIAGNOSE_BEHAVIORAL)?;
        collect_saved(documents)
    }

    pub fn delete_behavioral(
        &self,
        user: &UserId,
        id: &DocumentId,
    ) -> Result<(), DiagnosticsError> {
        self.store
            .delete(user, collections::DIAGNOSE_BEHAVIORAL, id)?;
        Ok(())
    }

    /// Latest saved phase assessment, if any. Used by the dashboard overview.
    pub fn latest_phase(&self, user: &UserId) -> Result<Option<PhaseAssessment>, DiagnosticsError> {
        let mut history = self.phase_history(user)?;
        Ok(if history.is_empty() {
            None
        } else {
            Some(history.remove(0).record)
        })
    }
}

fn collect_saved<T: serde::de::DeserializeOwned>(
    documents: Vec<crate::store::Document>,
) -> Result<Vec<Saved<T>>, DiagnosticsError> {
    documents
        .into_iter()
        .map(|document| Saved::from_document(document).map_err(DiagnosticsError::from))
        .collect()
}

fn validate_behavioral(
    answers: &BTreeMap<u8, u8>,
) -> Result<BTreeMap<u8, Profile>, DiagnosticsError> {
    let questions = behavioral_questions();
    if answers.len() != questions.len() {
        return Err(DiagnosticsError::Incomplete {
            expected: questions.len(),
            received: answers.len(),
        });
    }

    let mut resolved = BTreeMap::new();
    for question in questions {
        let chosen = answers
            .get(&question.number)
            .copied()
            .ok_or(DiagnosticsError::Incomplete {
                expected: questions.len(),
                received: answers.len(),
            })?;
        let valid = Profile::from_number(chosen).filter(|profile| {
            question
                .options
                .iter()
                .any(|option| option.profile == *profile)
        });
        match valid {
            Some(profile) => {
                resolved.insert(question.number, profile);
            }
            None => {
                return Err(DiagnosticsError::InvalidChoice {
                    question: question.number,
                    profile: chosen,
                })
            }
        }
    }
    Ok(resolved)
}

fn strategic_prompt(scores: &StrategicScores) -> String {
    format!(
        "Act as a senior business consultant for the P12 Council. \
         Analyze the owner's answers: Operational {}/8, Tactical {}/8, Strategic {}/8. \
         Mandatory instructions: 1. Markdown ONLY. 2. ## Maturity Diagnosis. \
         3. ## Immediate Action Plan.",
        scores.operational, scores.tactical, scores.strategic
    )
}

fn phase_prompt(outcome: &PhaseOutcome) -> String {
    format!(
        "Act as a P12 consultant. Company at {}/30 items. {}. Markdown ONLY. \
         ## Motivational Analysis. ## Next Steps.",
        outcome.total_score, outcome.phase.name
    )
}

fn behavioral_prompt(outcome: &BehavioralOutcome) -> String {
    format!(
        "Act as a senior behavioral consultant for the P12 Council.\n\
         Results:\n\
         - Body triad (Operational): {}/5 points.\n\
         - Heart triad (Tactical): {}/5 points.\n\
         - Mind triad (Strategic): {}/5 points.\n\
         - Dominant profile: Type {} - {}.\n\
         Mandatory instructions: 1. Markdown ONLY.\n\
         ## Dominant Profile Analysis: {}\n\
         [Explain what this dominant triad means in a business context]",
        outcome.triad_scores.body,
        outcome.triad_scores.heart,
        outcome.triad_scores.mind,
        outcome.dominant.number,
        outcome.dominant.name,
        outcome.dominant.name,
    )
}
