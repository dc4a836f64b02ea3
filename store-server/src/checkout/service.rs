//! Checkout service: order materialization
//!
//! Converts a rebuilt cart into a persisted [`Sale`]. Line data is copied
//! verbatim from the cart aggregate — this snapshot is the only mechanism
//! protecting historical orders from future catalog price changes.

use super::validate::{self, CheckoutForm};
use super::CheckoutError;
use crate::cart::{CartService, CartStore};
use crate::core::Config;
use crate::db::repository::SaleRepository;
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use shared::cart::CartState;
use shared::models::{
    Customer, DeliveryAddress, FulfillmentMethod, PaymentStatus, Sale, SaleLine,
};
use shared::util::{now_millis, snowflake_id};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Bank transfer payload shown to the customer after placing the order.
/// Payment stays pending until an operator confirms the transfer arrived.
#[derive(Debug, Clone, Serialize)]
pub struct BankTransferInstructions {
    pub bank_name: String,
    pub account_name: String,
    pub iban: String,
    /// Wire reference the customer must include
    pub reference: String,
    pub amount: f64,
}

/// Result of a successful order placement
#[derive(Debug, Clone, Serialize)]
pub struct PlacedOrder {
    pub sale_id: String,
    pub order_id: String,
    pub total: f64,
    pub bank_transfer: BankTransferInstructions,
}

#[derive(Clone)]
pub struct CheckoutService {
    sales: SaleRepository,
    config: Config,
}

impl CheckoutService {
    pub fn new(db: Surreal<Db>, config: Config) -> Self {
        Self {
            sales: SaleRepository::new(db),
            config,
        }
    }

    /// Validate a checkout form without touching any state.
    pub fn validate(form: &CheckoutForm) -> Vec<validate::FieldError> {
        validate::validate(form)
    }

    /// Generate a unique `ORD-YYYYMMDD-XXXXXX` order id.
    ///
    /// Collisions recover locally via a bounded retry with a fresh random
    /// suffix; exhaustion means the keyspace is effectively full and is
    /// treated as a configuration-class failure.
    async fn allocate_order_id(&self) -> Result<String, CheckoutError> {
        let date = Utc::now().format("%Y%m%d").to_string();
        let max_attempts = self.config.order_id_max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
            let candidate = format!("ORD-{date}-{suffix:06}");
            if !self.sales.order_id_exists(&candidate).await? {
                return Ok(candidate);
            }
            tracing::warn!(candidate = %candidate, attempt, "order id collision, retrying");
        }

        Err(CheckoutError::OrderIdExhausted(max_attempts))
    }

    /// Validate the form, snapshot the cart and persist the sale.
    ///
    /// On any failure the cart raw store is untouched; the customer retries
    /// with their lines intact. A discarded order id candidate is simply
    /// regenerated next time.
    pub async fn place_order(
        &self,
        form: &CheckoutForm,
        cart: &CartState,
    ) -> Result<PlacedOrder, CheckoutError> {
        let errors = validate::validate(form);
        if !errors.is_empty() {
            return Err(CheckoutError::Validation(errors));
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order_id = self.allocate_order_id().await?;

        let lines: Vec<SaleLine> = cart
            .lines
            .iter()
            .map(|line| SaleLine {
                item_id: line.item_id.clone(),
                kind: line.kind,
                name: line.name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                subtotal: line.subtotal,
                selected_variant: line.selected_variant.clone(),
                selected_color: line.selected_color.clone(),
            })
            .collect();

        let sale = Sale {
            id: format!("sale:{}", snowflake_id()),
            order_id: order_id.clone(),
            customer: Customer {
                name: form.name.trim().to_string(),
                email: form.email.trim().to_string(),
                phone: form.phone.trim().to_string(),
            },
            fulfillment: form.fulfillment,
            delivery: (form.fulfillment == FulfillmentMethod::Delivery).then(|| DeliveryAddress {
                address: form.address.clone().unwrap_or_default(),
                city: form.city.clone().unwrap_or_default(),
                state: form.state.clone().unwrap_or_default(),
            }),
            pickup_address: (form.fulfillment == FulfillmentMethod::Pickup)
                .then(|| self.config.store_address.clone()),
            lines,
            total: cart.total,
            payment_status: PaymentStatus::Pending,
            order_completed: false,
            created_at: now_millis(),
            completed_at: None,
            payment_approved_at: None,
            approved_by: None,
        };

        let created = self.sales.create(&sale).await?;
        tracing::info!(
            order_id = %created.order_id,
            total = created.total,
            lines = created.lines.len(),
            "sale persisted, awaiting bank transfer"
        );

        Ok(PlacedOrder {
            sale_id: created.id,
            order_id: created.order_id.clone(),
            total: created.total,
            bank_transfer: BankTransferInstructions {
                bank_name: self.config.bank_name.clone(),
                account_name: self.config.bank_account_name.clone(),
                iban: self.config.bank_iban.clone(),
                reference: created.order_id,
                amount: created.total,
            },
        })
    }

    /// Clear the cart after the customer confirms the bank-transfer screen.
    ///
    /// Must only be called once `place_order` has succeeded — the persisted
    /// sale is unaffected by the cart clearing.
    pub async fn confirm_and_clear<S: CartStore>(
        &self,
        carts: &CartService<S>,
        cart_id: &str,
    ) -> Result<(), CheckoutError> {
        carts.clear(cart_id).await?;
        tracing::info!(cart_id, "cart cleared after order confirmation");
        Ok(())
    }
}
