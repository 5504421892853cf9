//! Strategy surface: the organizational identity canvas and the SWOT matrix
//! with its favorability reading.

pub mod identity;
mod service;
pub mod swot;

pub use identity::{StrategyIdentity, ValueProposition};
pub use service::{IdentityService, StrategyError, SwotReport, SwotService};
pub use swot::{QuadrantTotals, Scenario, SwotItem, SwotMatrix};
