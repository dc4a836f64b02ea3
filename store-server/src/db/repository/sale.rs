//! Sale Repository
//!
//! Persisted checkout records. Creation happens once from the order
//! materializer; afterwards only the status/audit fields are written, through
//! [`SaleRepository::update_status`]. Line snapshots are never touched.

use super::{BaseRepository, RepoError, RepoResult, record_id};
use serde::Deserialize;
use shared::models::{PaymentStatus, Sale};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const SALE_TABLE: &str = "sale";

/// Projection used for existence checks
#[derive(Debug, Deserialize)]
struct IdRow {
    #[allow(dead_code)]
    id: String,
}

#[derive(Clone)]
pub struct SaleRepository {
    base: BaseRepository,
}

impl SaleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new sale under its pre-assigned record key (`sale.id`).
    pub async fn create(&self, sale: &Sale) -> RepoResult<Sale> {
        let rid = record_id(SALE_TABLE, &sale.id);
        let created: Option<Sale> = self
            .base
            .db()
            .create(rid)
            .content(sale.clone())
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create sale".to_string()))
    }

    /// Find sale by opaque id (accepts `sale:xxx` or bare `xxx`)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Sale>> {
        let rid = record_id(SALE_TABLE, id);
        let sale: Option<Sale> = self.base.db().select(rid).await?;
        Ok(sale)
    }

    /// Find sale by human-readable order id (`ORD-...`)
    pub async fn find_by_order_id(&self, order_id: &str) -> RepoResult<Option<Sale>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM sale WHERE order_id = $order_id LIMIT 1")
            .bind(("order_id", order_id.to_string()))
            .await?;
        let sales: Vec<Sale> = result.take(0)?;
        Ok(sales.into_iter().next())
    }

    /// Whether an order id is already taken (collision check during generation)
    pub async fn order_id_exists(&self, order_id: &str) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("SELECT <string>id AS id FROM sale WHERE order_id = $order_id LIMIT 1")
            .bind(("order_id", order_id.to_string()))
            .await?;
        let rows: Vec<IdRow> = result.take(0)?;
        Ok(!rows.is_empty())
    }

    /// Write the status/audit fields of a sale. The line snapshot, customer
    /// and totals are deliberately not updatable.
    pub async fn update_status(&self, sale: &Sale) -> RepoResult<Sale> {
        let rid = record_id(SALE_TABLE, &sale.id);
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $sale SET \
                 payment_status = $payment_status, \
                 order_completed = $order_completed, \
                 completed_at = $completed_at, \
                 payment_approved_at = $payment_approved_at, \
                 approved_by = $approved_by \
                 RETURN AFTER",
            )
            .bind(("sale", rid))
            .bind(("payment_status", sale.payment_status))
            .bind(("order_completed", sale.order_completed))
            .bind(("completed_at", sale.completed_at))
            .bind(("payment_approved_at", sale.payment_approved_at))
            .bind(("approved_by", sale.approved_by.clone()))
            .await?;
        let sales: Vec<Sale> = result.take(0)?;
        sales
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Sale {} not found", sale.id)))
    }

    /// Most recent sales for the admin dashboard
    pub async fn find_recent(&self, limit: usize) -> RepoResult<Vec<Sale>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM sale ORDER BY created_at DESC LIMIT $limit")
            .bind(("limit", limit as i64))
            .await?;
        let sales: Vec<Sale> = result.take(0)?;
        Ok(sales)
    }

    /// Sales filtered by payment status, newest first
    pub async fn find_by_payment_status(&self, status: PaymentStatus) -> RepoResult<Vec<Sale>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM sale WHERE payment_status = $status ORDER BY created_at DESC")
            .bind(("status", status))
            .await?;
        let sales: Vec<Sale> = result.take(0)?;
        Ok(sales)
    }
}
