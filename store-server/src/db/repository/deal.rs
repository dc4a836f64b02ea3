//! Deal Repository
//!
//! Read-only access to the `deal` table. Same contract as the product
//! repository, with the crossed-out `previous_price` carried through.

use super::{BaseRepository, RepoResult, record_id};
use shared::models::{CatalogItem, Deal};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const DEAL_TABLE: &str = "deal";

#[derive(Clone)]
pub struct DealRepository {
    base: BaseRepository,
}

impl DealRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find deal by id (accepts `deal:xxx` or bare `xxx`)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CatalogItem>> {
        let rid = record_id(DEAL_TABLE, id);
        let deal: Option<Deal> = self.base.db().select(rid.clone()).await?;
        Ok(deal.map(|d| CatalogItem::from_deal(rid.to_string(), d)))
    }

    /// Find all active deals in display order
    pub async fn find_all(&self) -> RepoResult<Vec<CatalogItem>> {
        let items: Vec<CatalogItem> = self
            .base
            .db()
            .query(
                "SELECT <string>id AS id, 'DEAL' AS kind, name, base_price, previous_price, \
                 variant_options, in_stock, images, colors \
                 FROM deal WHERE is_active = true ORDER BY sort_order",
            )
            .await?
            .take(0)?;
        Ok(items)
    }
}
