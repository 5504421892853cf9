//! Generic per-user keyed document store.
//!
//! Every record in the system is owned by exactly one user and lives in a
//! named collection. Assessment histories are append-only: documents are
//! created once, listed newest-first, and deleted by id — never updated in
//! place. Singleton documents (identity canvas, SWOT matrix, monthly DRE
//! statements) are upserted at caller-chosen ids instead.

mod memory;

pub use memory::InMemoryUserStore;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Collection names used across the domain services.
pub mod collections {
    pub const DIAGNOSE_STRATEGIC: &str = "diagnose_strategic";
    pub const DIAGNOSE_PHASES: &str = "diagnose_phases";
    pub const DIAGNOSE_BEHAVIORAL: &str = "diagnose_behavioral";
    pub const STRATEGY_IDENTITY: &str = "strategy_identity";
    pub const STRATEGY_SWOT: &str = "strategy_swot";
    pub const SALES_PERSONAS: &str = "sales_personas";
    pub const FINANCE_DRE: &str = "finance_dre";
    pub const PEOPLE_EMPLOYEES: &str = "people_employees";
    pub const PEOPLE_EVALUATIONS: &str = "people_evaluations";
    pub const PROJECT_TASKS: &str = "projects_default_tasks";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Stored document envelope: payload plus ownership-independent metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub data: serde_json::Value,
}

impl Document {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.data.clone()).map_err(StoreError::Serialization)
    }
}

/// Storage abstraction so domain services can be exercised in isolation.
pub trait UserStore: Send + Sync {
    /// Create a document with a store-assigned id; timestamps are set to now.
    fn create(
        &self,
        owner: &UserId,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<Document, StoreError>;

    /// Upsert at a caller-chosen id. `created_at` is preserved on update.
    fn put(
        &self,
        owner: &UserId,
        collection: &str,
        id: &DocumentId,
        data: serde_json::Value,
    ) -> Result<Document, StoreError>;

    fn get(
        &self,
        owner: &UserId,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, StoreError>;

    /// All documents in the collection, newest first.
    fn list(&self, owner: &UserId, collection: &str) -> Result<Vec<Document>, StoreError>;

    fn delete(
        &self,
        owner: &UserId,
        collection: &str,
        id: &DocumentId,
    ) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,
    #[error("failed to encode or decode document payload: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub fn encode<T: Serialize>(value: &T) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(value).map_err(StoreError::Serialization)
}

/// A typed record joined with its storage metadata, as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct Saved<T> {
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Saved<T> {
    pub fn from_parts(id: DocumentId, created_at: DateTime<Utc>, record: T) -> Self {
        Self {
            id,
            created_at,
            record,
        }
    }
}

impl<T: DeserializeOwned> Saved<T> {
    pub fn from_document(document: Document) -> Result<Self, StoreError> {
        let record = serde_json::from_value(document.data)?;
        Ok(Self {
            id: document.id,
            created_at: document.created_at,
            record,
        })
    }
}
