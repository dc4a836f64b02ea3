//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend) holding the catalog (`product`,
//! `deal`) and the persisted sales (`sale`). Cart raw stores live elsewhere:
//! the session store is in-process, the client store uses redb.

pub mod repository;

use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "storefront";
const DATABASE: &str = "storefront";

/// Open (or create) the embedded database at the given path.
pub async fn connect(path: &Path) -> Result<Surreal<Db>, surrealdb::Error> {
    let db = Surreal::new::<RocksDb>(path).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;
    Ok(db)
}
