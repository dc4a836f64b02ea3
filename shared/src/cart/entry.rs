//! Raw cart entries as persisted by the cart stores
//!
//! The canonical shape is [`RawCartEntry`]. Session blobs written by earlier
//! releases may instead hold a bare integer (quantity only) or an object with
//! the old field names (`type`, `selected_storage`, `storage_price`);
//! [`StoredCartEntry`] accepts all of them and [`StoredCartEntry::normalize`]
//! folds them into the canonical shape. Normalization is idempotent and runs
//! on every load.

use crate::models::ItemKind;
use serde::{Deserialize, Serialize};

/// One raw cart entry.
///
/// A line is identified by `(item_id, selected_variant, selected_color)`;
/// adds with the same triple merge by summing quantity. `variant_price` is
/// the unit price captured when the variant was chosen and is honored until
/// the selection changes, insulating the customer from mid-session catalog
/// updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawCartEntry {
    /// Catalog record reference; may dangle if the item is later deleted
    #[serde(default)]
    pub item_id: String,
    pub quantity: i32,
    #[serde(default, alias = "type")]
    pub kind: ItemKind,
    #[serde(default, alias = "selected_storage", skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<String>,
    /// Unit price snapshot taken at selection time
    #[serde(default, alias = "storage_price", skip_serializing_if = "Option::is_none")]
    pub variant_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    /// Millisecond timestamp of first add; part of the client store key
    #[serde(default)]
    pub added_at: i64,
}

impl RawCartEntry {
    pub fn new(item_id: impl Into<String>, kind: ItemKind, quantity: i32, added_at: i64) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            kind,
            selected_variant: None,
            variant_price: None,
            selected_color: None,
            added_at,
        }
    }

    /// Stable key identifying this line within a cart.
    pub fn line_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.item_id,
            self.selected_variant.as_deref().unwrap_or(""),
            self.selected_color.as_deref().unwrap_or("")
        )
    }

    /// Synthetic composite key used by the client-persisted store. Includes
    /// the add timestamp so historically distinct rows never collide.
    pub fn client_key(&self) -> String {
        format!("{}|{}", self.line_key(), self.added_at)
    }

    /// Whether another selection would merge into this line.
    pub fn matches_selection(&self, item_id: &str, variant: Option<&str>, color: Option<&str>) -> bool {
        self.item_id == item_id
            && self.selected_variant.as_deref() == variant
            && self.selected_color.as_deref() == color
    }
}

/// Legacy-tolerant stored shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StoredCartEntry {
    /// Legacy "quantity only" shape
    Quantity(i32),
    Entry(RawCartEntry),
}

impl StoredCartEntry {
    /// Fold into the canonical shape.
    ///
    /// `item_id` is the map key the entry was stored under and wins only when
    /// the entry itself carries none. Bare integers become product entries.
    pub fn normalize(self, item_id: &str, fallback_added_at: i64) -> RawCartEntry {
        match self {
            StoredCartEntry::Quantity(quantity) => {
                RawCartEntry::new(item_id, ItemKind::Product, quantity, fallback_added_at)
            }
            StoredCartEntry::Entry(mut entry) => {
                if entry.item_id.is_empty() {
                    entry.item_id = item_id.to_string();
                }
                if entry.added_at == 0 {
                    entry.added_at = fallback_added_at;
                }
                entry
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_integer_normalizes_to_product_entry() {
        let stored: StoredCartEntry = serde_json::from_str("3").unwrap();
        let entry = stored.normalize("product:p1", 42);
        assert_eq!(entry.item_id, "product:p1");
        assert_eq!(entry.quantity, 3);
        assert_eq!(entry.kind, ItemKind::Product);
        assert_eq!(entry.added_at, 42);
    }

    #[test]
    fn legacy_object_field_names_are_accepted() {
        let stored: StoredCartEntry = serde_json::from_str(
            r#"{"quantity": 2, "type": "deal", "selected_storage": "256GB", "storage_price": 6000.0, "selected_color": "Black"}"#,
        )
        .unwrap();
        let entry = stored.normalize("deal:d1", 42);
        assert_eq!(entry.item_id, "deal:d1");
        assert_eq!(entry.kind, ItemKind::Deal);
        assert_eq!(entry.selected_variant.as_deref(), Some("256GB"));
        assert_eq!(entry.variant_price, Some(6000.0));
        assert_eq!(entry.selected_color.as_deref(), Some("Black"));
    }

    #[test]
    fn entry_missing_type_defaults_to_product() {
        let stored: StoredCartEntry = serde_json::from_str(r#"{"quantity": 1}"#).unwrap();
        let entry = stored.normalize("product:p9", 1);
        assert_eq!(entry.kind, ItemKind::Product);
    }

    #[test]
    fn normalization_is_idempotent() {
        let stored: StoredCartEntry = serde_json::from_str("5").unwrap();
        let once = stored.normalize("product:p1", 7);
        let twice = StoredCartEntry::Entry(once.clone()).normalize("product:p1", 99);
        assert_eq!(once, twice);
    }

    #[test]
    fn line_key_distinguishes_variant_and_color() {
        let mut a = RawCartEntry::new("product:p1", ItemKind::Product, 1, 0);
        let mut b = a.clone();
        assert_eq!(a.line_key(), b.line_key());

        b.selected_color = Some("Red".to_string());
        assert_ne!(a.line_key(), b.line_key());

        a.selected_variant = Some("128GB".to_string());
        assert_ne!(a.line_key(), b.line_key());
    }
}
