//! Repository Module
//!
//! Read access to the catalog tables and full lifecycle access to `sale`
//! records. Product/deal writes happen in the admin CRUD layer outside this
//! crate; nothing here mutates the catalog.

pub mod deal;
pub mod product;
pub mod sale;

// Re-exports
pub use deal::DealRepository;
pub use product::ProductRepository;
pub use sale::SaleRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: "product:abc" 或裸 "abc" 都接受
//   - 创建: RecordId::from_table_key("product", "abc")
//   - CRUD: db.select(id) / db.create(id) 直接使用 RecordId

/// Build a [`RecordId`] for `table`, accepting both `table:key` and bare
/// `key` inputs.
pub(crate) fn record_id(table: &str, id: &str) -> RecordId {
    let key = match id.split_once(':') {
        Some((prefix, key)) if prefix == table => key,
        _ => id,
    };
    RecordId::from_table_key(table, key)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
