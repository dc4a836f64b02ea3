//! Catalog Service - unified Product and Deal read access

use crate::db::repository::{DealRepository, ProductRepository, RepoResult};
use shared::models::{CatalogItem, ItemKind};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Unified read access over both catalog namespaces.
///
/// Cart entries carry an [`ItemKind`] discriminant, so the normal lookup is
/// a single keyed read. [`CatalogService::find_any`] keeps the old
/// probe-product-then-deal behavior alive for entries written before the
/// discriminant existed.
#[derive(Clone)]
pub struct CatalogService {
    products: ProductRepository,
    deals: DealRepository,
}

impl CatalogService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            products: ProductRepository::new(db.clone()),
            deals: DealRepository::new(db),
        }
    }

    /// Keyed lookup. Not-found is a normal outcome, not an error.
    pub async fn find(&self, kind: ItemKind, id: &str) -> RepoResult<Option<CatalogItem>> {
        match kind {
            ItemKind::Product => self.products.find_by_id(id).await,
            ItemKind::Deal => self.deals.find_by_id(id).await,
        }
    }

    /// Legacy lookup for entries that predate the stored kind discriminant:
    /// probe the product namespace first, then deal.
    pub async fn find_any(&self, id: &str) -> RepoResult<Option<CatalogItem>> {
        if let Some(item) = self.products.find_by_id(id).await? {
            return Ok(Some(item));
        }
        self.deals.find_by_id(id).await
    }

    /// Active products in display order
    pub async fn list_products(&self) -> RepoResult<Vec<CatalogItem>> {
        self.products.find_all().await
    }

    /// Active deals in display order
    pub async fn list_deals(&self) -> RepoResult<Vec<CatalogItem>> {
        self.deals.find_all().await
    }
}
