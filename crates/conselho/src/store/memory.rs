use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::Utc;

use super::{Document, DocumentId, StoreError, UserId, UserStore};

/// In-process store used by the api service and the test suites. Documents
/// are bucketed per (owner, collection) pair behind a single mutex.
#[derive(Default)]
pub struct InMemoryUserStore {
    buckets: Mutex<HashMap<(String, String), Vec<Document>>>,
    sequence: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> DocumentId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        DocumentId(format!("doc-{id:06}"))
    }

    fn key(owner: &UserId, collection: &str) -> (String, String) {
        (owner.0.clone(), collection.to_string())
    }
}

impl UserStore for InMemoryUserStore {
    fn create(
        &self,
        owner: &UserId,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<Document, StoreError> {
        let now = Utc::now();
        let document = Document {
            id: self.next_id(),
            created_at: now,
            updated_at: now,
            data,
        };

        let mut buckets = self.buckets.lock().expect("store mutex poisoned");
        buckets
            .entry(Self::key(owner, collection))
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    fn put(
        &self,
        owner: &UserId,
        collection: &str,
        id: &DocumentId,
        data: serde_json::Value,
    ) -> Result<Document, StoreError> {
        let now = Utc::now();
        let mut buckets = self.buckets.lock().expect("store mutex poisoned");
        let bucket = buckets.entry(Self::key(owner, collection)).or_default();

        if let Some(existing) = bucket.iter_mut().find(|doc| doc.id == *id) {
            existing.updated_at = now;
            existing.data = data;
            return Ok(existing.clone());
        }

        let document = Document {
            id: id.clone(),
            created_at: now,
            updated_at: now,
            data,
        };
        bucket.push(document.clone());
        Ok(document)
    }

    fn get(
        &self,
        owner: &UserId,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, StoreError> {
        let buckets = self.buckets.lock().expect("store mutex poisoned");
        Ok(buckets
            .get(&Self::key(owner, collection))
            .and_then(|bucket| bucket.iter().find(|doc| doc.id == *id).cloned()))
    }

    fn list(&self, owner: &UserId, collection: &str) -> Result<Vec<Document>, StoreError> {
        let buckets = self.buckets.lock().expect("store mutex poisoned");
        let mut documents = buckets
            .get(&Self::key(owner, collection))
            .cloned()
            .unwrap_or_default();
        // Newest first; id breaks same-instant ties deterministically.
        documents.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(documents)
    }

    fn delete(
        &self,
        owner: &UserId,
        collection: &str,
        id: &DocumentId,
    ) -> Result<(), StoreError> {
        let mut buckets = self.buckets.lock().expect("store mutex poisoned");
        let bucket = buckets
            .get_mut(&Self::key(owner, collection))
            .ok_or(StoreError::NotFound)?;
        let before = bucket.len();
        bucket.retain(|doc| doc.id != *id);
        if bucket.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn owner() -> UserId {
        UserId("user-1".to_string())
    }

    #[test]
    fn create_assigns_ids_and_lists_newest_first() {
        let store = InMemoryUserStore::new();
        let first = store
            .create(&owner(), "notes", json!({"n": 1}))
            .expect("create");
        let second = store
            .create(&owner(), "notes", json!({"n": 2}))
            .expect("create");
        assert_ne!(first.id, second.id);

        let listed = store.list(&owner(), "notes").expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].data, json!({"n": 2}));
    }

    #[test]
    fn put_preserves_created_at_on_update() {
        let store = InMemoryUserStore::new();
        let id = DocumentId("main".to_string());
        let initial = store
            .put(&owner(), "canvas", &id, json!({"v": 1}))
            .expect("insert");
        let updated = store
            .put(&owner(), "canvas", &id, json!({"v": 2}))
            .expect("update");
        assert_eq!(initial.created_at, updated.created_at);
        assert_eq!(updated.data, json!({"v": 2}));
        assert_eq!(store.list(&owner(), "canvas").expect("list").len(), 1);
    }

    #[test]
    fn delete_of_missing_document_errors() {
        let store = InMemoryUserStore::new();
        let created = store
            .create(&owner(), "notes", json!({}))
            .expect("create");
        store
            .delete(&owner(), "notes", &created.id)
            .expect("delete succeeds");
        let err = store
            .delete(&owner(), "notes", &created.id)
            .expect_err("second delete fails");
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn collections_are_isolated_per_owner() {
        let store = InMemoryUserStore::new();
        store
            .create(&owner(), "notes", json!({"mine": true}))
            .expect("create");
        let other = UserId("user-2".to_string());
        assert!(store.list(&other, "notes").expect("list").is_empty());
    }
}
