//! Product Repository
//!
//! Read-only: product CRUD belongs to the admin back-office outside this
//! core. A missing product is a normal outcome — cart rebuilds drop the
//! line instead of failing.

use super::{BaseRepository, RepoResult, record_id};
use shared::models::{CatalogItem, Product};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find product by id (accepts `product:xxx` or bare `xxx`)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CatalogItem>> {
        let rid = record_id(PRODUCT_TABLE, id);
        let product: Option<Product> = self.base.db().select(rid.clone()).await?;
        Ok(product.map(|p| CatalogItem::from_product(rid.to_string(), p)))
    }

    /// Find all active products in display order
    pub async fn find_all(&self) -> RepoResult<Vec<CatalogItem>> {
        let items: Vec<CatalogItem> = self
            .base
            .db()
            .query(
                "SELECT <string>id AS id, 'PRODUCT' AS kind, name, base_price, \
                 variant_options, in_stock, images, colors \
                 FROM product WHERE is_active = true ORDER BY sort_order",
            )
            .await?
            .take(0)?;
        Ok(items)
    }
}
