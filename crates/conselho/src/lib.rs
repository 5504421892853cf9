pub mod config;
pub mod dashboard;
pub mod diagnostics;
pub mod error;
pub mod finance;
pub mod insight;
pub mod people;
pub mod personas;
pub mod projects;
pub mod store;
pub mod strategy;
pub mod telemetry;
