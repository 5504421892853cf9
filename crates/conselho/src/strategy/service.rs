use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::diagnostics::{PhaseAssessment, StrategicAssessment};
use crate::insight::{extract_json, AnalysisClient, AnalysisError};
use crate::store::{collections, DocumentId, Saved, StoreError, UserId, UserStore};

use super::identity::{StrategyIdentity, IDENTITY_DOC};
use super::swot::{QuadrantTotals, Scenario, SwotMatrix, SWOT_DOC};

#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("analysis backend failed: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("analysis backend returned malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Loads and upserts the singleton identity canvas.
pub struct IdentityService<S> {
    store: Arc<S>,
}

impl<S: UserStore + 'static> IdentityService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn save(&self, user: &UserId, identity: &StrategyIdentity) -> Result<(), StrategyError> {
        self.store.put(
            user,
            collections::STRATEGY_IDENTITY,
            &DocumentId(IDENTITY_DOC.to_string()),
            crate::store::encode(identity)?,
        )?;
        Ok(())
    }

    /// Returns the saved canvas, or an empty one when nothing is stored yet.
    pub fn load(&self, user: &UserId) -> Result<StrategyIdentity, StrategyError> {
        let document = self.store.get(
            user,
            collections::STRATEGY_IDENTITY,
            &DocumentId(IDENTITY_DOC.to_string()),
        )?;
        Ok(match document {
            Some(document) => document.decode()?,
            None => StrategyIdentity::default(),
        })
    }
}

/// SWOT matrix with its derived reading, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SwotReport {
    #[serde(flatten)]
    pub matrix: SwotMatrix,
    pub totals: QuadrantTotals,
    pub favorability_index: i32,
    pub scenario: Scenario,
    pub guidance: &'static str,
}

impl SwotReport {
    fn from_matrix(matrix: SwotMatrix) -> Self {
        let totals = matrix.quadrant_totals();
        let favorability_index = matrix.favorability_index();
        let scenario = matrix.scenario();
        Self {
            matrix,
            totals,
            favorability_index,
            scenario,
            guidance: scenario.guidance(),
        }
    }
}

/// Manages the singleton SWOT matrix, including AI-backed generation seeded
/// from the latest diagnostics. Unlike assessment saves, generation fails
/// loudly: a half-made matrix is worse than none.
pub struct SwotService<S, A> {
    store: Arc<S>,
    analysis: Arc<A>,
}

impl<S, A> SwotService<S, A>
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    pub fn new(store: Arc<S>, analysis: Arc<A>) -> Self {
        Self { store, analysis }
    }

    pub fn save(&self, user: &UserId, matrix: &SwotMatrix) -> Result<SwotReport, StrategyError> {
        self.store.put(
            user,
            collections::STRATEGY_SWOT,
            &DocumentId(SWOT_DOC.to_string()),
            crate::store::encode(matrix)?,
        )?;
        Ok(SwotReport::from_matrix(matrix.clone()))
    }

    pub fn load(&self, user: &UserId) -> Result<SwotReport, StrategyError> {
        let document = self.store.get(
            user,
            collections::STRATEGY_SWOT,
            &DocumentId(SWOT_DOC.to_string()),
        )?;
        let matrix = match document {
            Some(document) => document.decode()?,
            None => SwotMatrix::default(),
        };
        Ok(SwotReport::from_matrix(matrix))
    }

    /// Generates a fresh matrix from the latest diagnostics and persists it.
    pub fn generate(&self, user: &UserId) -> Result<SwotReport, StrategyError> {
        let latest_strategic = self.latest::<StrategicAssessment>(user, collections::DIAGNOSE_STRATEGIC)?;
        let latest_phase = self.latest::<PhaseAssessment>(user, collections::DIAGNOSE_PHASES)?;

        let prompt = generation_prompt(latest_strategic.as_ref(), latest_phase.as_ref());
        let raw = self.analysis.generate(&prompt)?;
        let matrix: SwotMatrix =
            serde_json::from_str(extract_json(&raw)).map_err(StrategyError::Malformed)?;

        let report = self.save(user, &matrix)?;
        info!(
            user = %user.0,
            favorability = report.favorability_index,
            "generated SWOT matrix"
        );
        Ok(report)
    }

    fn latest<T: serde::de::DeserializeOwned>(
        &self,
        user: &UserId,
        collection: &str,
    ) -> Result<Option<T>, StrategyError> {
        let mut documents = self.store.list(user, collection)?;
        if documents.is_empty() {
            return Ok(None);
        }
        let saved = Saved::<T>::from_document(documents.remove(0))?;
        Ok(Some(saved.record))
    }
}

fn generation_prompt(
    strategic: Option<&StrategicAssessment>,
    phase: Option<&PhaseAssessment>,
) -> String {
    let (operational, tactical, strategic_level) = match strategic {
        Some(assessment) => (
            assessment.scores.operational.to_string(),
            assessment.scores.tactical.to_string(),
            assessment.scores.strategic.to_string(),
        ),
        None => ("N/A".to_string(), "N/A".to_string(), "N/A".to_string()),
    };
    let phase_name = phase
        .map(|assessment| assessment.phase_name.clone())
        .unwrap_or_else(|| "Not determined".to_string());

    format!(
        "Act as a P12 business strategist.\n\
         Based on the recent diagnosis:\n\
         - Operational level: {operational}/8\n\
         - Tactical level: {tactical}/8\n\
         - Strategic level: {strategic_level}/8\n\
         - Company phase: {phase_name}\n\n\
         Generate a complete SWOT matrix as JSON with keys strengths, weaknesses, \
         opportunities and threats, each an array of objects with \"text\" and \
         \"score\". Create 4 items per quadrant. The score (0-100) must represent \
         impact/intensity. Respond with JSON ONLY."
    )
}
