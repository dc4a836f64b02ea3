//! Cart store contract and the session-backed implementation
//!
//! A cart store holds raw entries only — no names, no totals. Whatever shape
//! the blob is in on disk, `load` hands back normalized canonical entries;
//! `save` always writes the canonical shape. Saves replace the whole store
//! (last write wins), which is acceptable for a single-shopper cart.

use shared::cart::{RawCartEntry, StoredCartEntry};
use std::sync::Arc;
use thiserror::Error;

/// Cart store errors
#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CartStoreResult<T> = Result<T, CartStoreError>;

/// Shared contract over the two persistence backends.
pub trait CartStore: Send + Sync {
    /// Load and normalize all entries for one cart.
    fn load(&self, cart_id: &str) -> CartStoreResult<Vec<RawCartEntry>>;

    /// Replace all entries for one cart.
    fn save(&self, cart_id: &str, entries: &[RawCartEntry]) -> CartStoreResult<()>;

    fn clear(&self, cart_id: &str) -> CartStoreResult<()> {
        self.save(cart_id, &[])
    }
}

/// Session-backed cart store: one raw JSON blob per session, held in
/// process memory.
///
/// Blobs written by earlier releases may be a map of
/// `item_id -> quantity | {quantity, type, selected_storage, ...}`;
/// the canonical shape is an array of full entries. Both parse, and
/// normalization runs on every load.
#[derive(Clone, Default)]
pub struct SessionCartStore {
    sessions: Arc<dashmap::DashMap<String, serde_json::Value>>,
}

impl SessionCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session with a raw blob, e.g. replayed from a legacy session
    /// dump. Used by session plumbing and tests.
    pub fn insert_raw(&self, cart_id: &str, blob: serde_json::Value) {
        self.sessions.insert(cart_id.to_string(), blob);
    }

    fn parse(cart_id: &str, blob: &serde_json::Value) -> Vec<RawCartEntry> {
        match blob {
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|value| {
                    match serde_json::from_value::<StoredCartEntry>(value.clone()) {
                        Ok(stored) => {
                            let entry = stored.normalize("", 0);
                            if entry.item_id.is_empty() {
                                tracing::warn!(cart_id, "cart entry without item id, dropping");
                                None
                            } else {
                                Some(entry)
                            }
                        }
                        Err(err) => {
                            tracing::warn!(cart_id, %err, "unreadable cart entry, dropping");
                            None
                        }
                    }
                })
                .collect(),
            serde_json::Value::Object(map) => map
                .iter()
                .filter_map(|(item_id, value)| {
                    match serde_json::from_value::<StoredCartEntry>(value.clone()) {
                        Ok(stored) => Some(stored.normalize(item_id, 0)),
                        Err(err) => {
                            tracing::warn!(cart_id, item_id = %item_id, %err, "unreadable cart entry, dropping");
                            None
                        }
                    }
                })
                .collect(),
            _ => {
                tracing::warn!(cart_id, "unexpected cart blob shape, treating as empty");
                Vec::new()
            }
        }
    }
}

impl CartStore for SessionCartStore {
    fn load(&self, cart_id: &str) -> CartStoreResult<Vec<RawCartEntry>> {
        let Some(blob) = self.sessions.get(cart_id) else {
            return Ok(Vec::new());
        };
        Ok(Self::parse(cart_id, blob.value()))
    }

    fn save(&self, cart_id: &str, entries: &[RawCartEntry]) -> CartStoreResult<()> {
        if entries.is_empty() {
            self.sessions.remove(cart_id);
            return Ok(());
        }
        let blob = serde_json::to_value(entries)?;
        self.sessions.insert(cart_id.to_string(), blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::ItemKind;

    #[test]
    fn empty_session_loads_empty() {
        let store = SessionCartStore::new();
        assert!(store.load("s1").unwrap().is_empty());
    }

    #[test]
    fn legacy_map_blob_normalizes_on_load() {
        let store = SessionCartStore::new();
        store.insert_raw(
            "s1",
            json!({
                "product:p1": 2,
                "deal:d1": {"quantity": 1, "type": "deal", "selected_storage": "256GB", "storage_price": 6000.0}
            }),
        );

        let entries = store.load("s1").unwrap();
        assert_eq!(entries.len(), 2);

        let p1 = entries.iter().find(|e| e.item_id == "product:p1").unwrap();
        assert_eq!(p1.quantity, 2);
        assert_eq!(p1.kind, ItemKind::Product);

        let d1 = entries.iter().find(|e| e.item_id == "deal:d1").unwrap();
        assert_eq!(d1.kind, ItemKind::Deal);
        assert_eq!(d1.variant_price, Some(6000.0));
    }

    #[test]
    fn load_normalization_is_idempotent_across_save() {
        let store = SessionCartStore::new();
        store.insert_raw("s1", json!({"product:p1": 3}));

        let first = store.load("s1").unwrap();
        store.save("s1", &first).unwrap();
        let second = store.load("s1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn corrupt_entries_are_dropped_not_fatal() {
        let store = SessionCartStore::new();
        store.insert_raw(
            "s1",
            json!({"product:p1": 1, "product:bad": "not-a-quantity"}),
        );
        let entries = store.load("s1").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item_id, "product:p1");
    }

    #[test]
    fn save_empty_removes_session() {
        let store = SessionCartStore::new();
        store.insert_raw("s1", json!({"product:p1": 1}));
        store.clear("s1").unwrap();
        assert!(store.load("s1").unwrap().is_empty());
    }
}
