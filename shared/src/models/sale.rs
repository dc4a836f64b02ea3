//! Sale Model
//!
//! A sale is the persisted, immutable record of a completed checkout. Line
//! items are snapshotted at order time and never recomputed from the live
//! catalog; only the status fields mutate afterwards, through the guarded
//! transitions in the sales module.

use super::catalog::ItemKind;
use serde::{Deserialize, Serialize};

/// Payment lifecycle of a sale.
///
/// `Failed` and `Refunded` are terminal; there is no path back to `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Failed | PaymentStatus::Refunded)
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentMethod {
    #[default]
    Pickup,
    Delivery,
}

/// Delivery destination, required when fulfillment is `Delivery`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryAddress {
    pub address: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One order line captured at checkout time.
///
/// Copied verbatim from the cart aggregate — name and price reflect what the
/// customer saw, regardless of later catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleLine {
    pub item_id: String,
    pub kind: ItemKind,
    pub name: String,
    pub unit_price: f64,
    pub quantity: i32,
    pub subtotal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

/// Sale entity.
///
/// The record key doubles as the opaque sale ID and is mirrored into the
/// `sale_id` content field so queries can return it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Opaque record ID (`sale:<key>`)
    #[serde(rename = "sale_id")]
    pub id: String,
    /// Human-readable order identifier (`ORD-YYYYMMDD-XXXXXX`), globally unique
    pub order_id: String,
    pub customer: Customer,
    pub fulfillment: FulfillmentMethod,
    /// Set when fulfillment is `Delivery`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryAddress>,
    /// Store address shown for pickup orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,
    pub lines: Vec<SaleLine>,
    pub total: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// One-way flag; may only become true once payment has completed
    #[serde(default)]
    pub order_completed: bool,
    /// Millisecond timestamps
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_approved_at: Option<i64>,
    /// Admin display name that approved the most recent transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Pending).unwrap(),
            r#""PENDING""#
        );
        let status: PaymentStatus = serde_json::from_str(r#""REFUNDED""#).unwrap();
        assert_eq!(status, PaymentStatus::Refunded);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!PaymentStatus::Pending.is_terminal());
        assert!(!PaymentStatus::Completed.is_terminal());
        assert!(PaymentStatus::Failed.is_terminal());
        assert!(PaymentStatus::Refunded.is_terminal());
    }
}
