//! redb-based client cart store
//!
//! Backs the rich-client flow: cart lines survive process restarts. Keys are
//! `(cart_id, client_key)` where the client key is the synthetic composite
//! `item_id|variant|color|added_at`, so two lines for the same item with
//! different selections coexist as distinct rows.
//!
//! Saves replace the full key range for the cart (last write wins); there is
//! no per-line locking.

use super::store::{CartStore, CartStoreResult};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::cart::RawCartEntry;
use std::path::Path;
use std::sync::Arc;

/// Table for cart lines: key = (cart_id, client_key), value = JSON-serialized RawCartEntry
const CART_LINES_TABLE: TableDefinition<(&str, &str), &[u8]> = TableDefinition::new("cart_lines");

/// Upper bound for a cart's key range (no real client key starts with this)
const KEY_RANGE_END: &str = "\u{10FFFF}";

#[derive(Clone)]
pub struct ClientCartStore {
    db: Arc<Database>,
}

impl ClientCartStore {
    /// Open or create the database at the given path.
    ///
    /// redb commits with immediate durability, so a power loss never leaves
    /// the cart file in an inconsistent state.
    pub fn open(path: impl AsRef<Path>) -> CartStoreResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_LINES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> CartStoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_LINES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl CartStore for ClientCartStore {
    fn load(&self, cart_id: &str) -> CartStoreResult<Vec<RawCartEntry>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_LINES_TABLE)?;

        let mut entries = Vec::new();
        for result in table.range((cart_id, "")..=(cart_id, KEY_RANGE_END))? {
            let (_key, value) = result?;
            let entry: RawCartEntry = serde_json::from_slice(value.value())?;
            entries.push(entry);
        }

        // Key order interleaves items; display order is add order
        entries.sort_by_key(|e| e.added_at);
        Ok(entries)
    }

    fn save(&self, cart_id: &str, entries: &[RawCartEntry]) -> CartStoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_LINES_TABLE)?;

            let stale: Vec<String> = table
                .range((cart_id, "")..=(cart_id, KEY_RANGE_END))?
                .map(|result| result.map(|(key, _)| key.value().1.to_string()))
                .collect::<Result<_, _>>()?;
            for key in stale {
                table.remove((cart_id, key.as_str()))?;
            }

            for entry in entries {
                let key = entry.client_key();
                let value = serde_json::to_vec(entry)?;
                table.insert((cart_id, key.as_str()), value.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}
