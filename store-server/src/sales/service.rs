//! Sales service: load → transition → persist
//!
//! Every operation re-reads the sale at transition time rather than trusting
//! a stale admin-screen view, so two operators acting concurrently converge
//! on the same end state.

use super::status;
use super::SaleError;
use crate::db::repository::SaleRepository;
use shared::models::{PaymentStatus, Sale};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct SalesService {
    sales: SaleRepository,
}

impl SalesService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            sales: SaleRepository::new(db),
        }
    }

    async fn load(&self, order_id: &str) -> Result<Sale, SaleError> {
        self.sales
            .find_by_order_id(order_id)
            .await?
            .ok_or_else(|| SaleError::NotFound(order_id.to_string()))
    }

    /// Look up one sale by order id.
    pub async fn find(&self, order_id: &str) -> Result<Sale, SaleError> {
        self.load(order_id).await
    }

    /// Confirm the bank transfer arrived.
    pub async fn complete_payment(
        &self,
        order_id: &str,
        approver: Option<&str>,
    ) -> Result<Sale, SaleError> {
        let mut sale = self.load(order_id).await?;
        if status::complete_payment(&mut sale, approver, now_millis())? {
            sale = self.sales.update_status(&sale).await?;
            tracing::info!(order_id, approver, "payment marked completed");
        }
        Ok(sale)
    }

    /// Mark the payment as failed (customer never transferred).
    pub async fn fail_payment(&self, order_id: &str) -> Result<Sale, SaleError> {
        let mut sale = self.load(order_id).await?;
        if status::fail_payment(&mut sale)? {
            sale = self.sales.update_status(&sale).await?;
            tracing::info!(order_id, "payment marked failed");
        }
        Ok(sale)
    }

    /// Refund a pending payment.
    pub async fn refund_payment(&self, order_id: &str) -> Result<Sale, SaleError> {
        let mut sale = self.load(order_id).await?;
        if status::refund_payment(&mut sale)? {
            sale = self.sales.update_status(&sale).await?;
            tracing::info!(order_id, "payment marked refunded");
        }
        Ok(sale)
    }

    /// Mark the order fulfilled. Rejected until payment has completed.
    pub async fn complete_order(
        &self,
        order_id: &str,
        approver: Option<&str>,
    ) -> Result<Sale, SaleError> {
        let mut sale = self.load(order_id).await?;
        if status::complete_order(&mut sale, approver, now_millis())? {
            sale = self.sales.update_status(&sale).await?;
            tracing::info!(order_id, approver, "order marked completed");
        }
        Ok(sale)
    }

    /// Unguarded administrative override of both status fields.
    ///
    /// Distinct from the guarded transitions above on purpose; callers and
    /// tests must never confuse the two paths.
    pub async fn force_set_status(
        &self,
        order_id: &str,
        payment_status: PaymentStatus,
        order_completed: bool,
    ) -> Result<Sale, SaleError> {
        let mut sale = self.load(order_id).await?;
        status::force_set_status(&mut sale, payment_status, order_completed);
        let sale = self.sales.update_status(&sale).await?;
        tracing::warn!(
            order_id,
            ?payment_status,
            order_completed,
            "status force-set by administrator"
        );
        Ok(sale)
    }

    /// Most recent sales for the dashboard.
    pub async fn list_recent(&self, limit: usize) -> Result<Vec<Sale>, SaleError> {
        Ok(self.sales.find_recent(limit).await?)
    }

    /// Sales awaiting (or in any other) payment state.
    pub async fn list_by_payment_status(
        &self,
        payment_status: PaymentStatus,
    ) -> Result<Vec<Sale>, SaleError> {
        Ok(self.sales.find_by_payment_status(payment_status).await?)
    }
}
