//! Assessment scoring engine: strategic maturity, company phase, and
//! behavioral profile questionnaires with persisted, AI-annotated histories.

pub mod behavioral;
pub mod phase;
pub mod questions;
mod router;
mod service;
pub mod strategic;

pub use router::{diagnostics_router, BehavioralRequest, PhaseRequest, StrategicRequest};
pub use service::{
    BehavioralAssessment, DiagnosticsError, DiagnosticsService, PhaseAssessment,
    StrategicAssessment,
};
