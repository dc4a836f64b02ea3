//! Deal Model

use super::product::{ColorEntry, VariantOption};
use serde::{Deserialize, Serialize};

/// Deal entity — a promoted catalog item with an optional crossed-out
/// previous price (record content; the record key is the deal ID)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub name: String,
    pub base_price: f64,
    /// Previous price; a discount badge is shown only when it exceeds `base_price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_price: Option<f64>,
    #[serde(default)]
    pub variant_options: Vec<VariantOption>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
    pub sort_order: i32,
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Deal {
    /// Whether the previous price is a genuine markdown worth displaying.
    pub fn has_discount(&self) -> bool {
        self.previous_price.is_some_and(|p| p > self.base_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(base: f64, previous: Option<f64>) -> Deal {
        Deal {
            name: "Clearance Phone".to_string(),
            base_price: base,
            previous_price: previous,
            variant_options: vec![],
            in_stock: true,
            images: vec![],
            colors: vec![],
            sort_order: 0,
            is_active: true,
        }
    }

    #[test]
    fn discount_requires_previous_above_base() {
        assert!(deal(100.0, Some(150.0)).has_discount());
        assert!(!deal(100.0, Some(100.0)).has_discount());
        assert!(!deal(100.0, Some(80.0)).has_discount());
        assert!(!deal(100.0, None).has_discount());
    }
}
