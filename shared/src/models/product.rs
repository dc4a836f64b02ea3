//! Product Model

use serde::{Deserialize, Serialize};

/// A named pricing option on a catalog item (e.g. "256GB").
///
/// When a product has variant options, the first option is the display
/// default and its price is the product's display price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantOption {
    pub label: String,
    pub price: f64,
}

/// Color entry — older records store colors as `{ "name": ... }` objects,
/// newer ones as plain strings. Both shapes deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColorEntry {
    Plain(String),
    Named { name: String },
}

impl ColorEntry {
    pub fn name(&self) -> &str {
        match self {
            ColorEntry::Plain(name) => name,
            ColorEntry::Named { name } => name,
        }
    }
}

/// Product entity (record content; the record key is the product ID)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub base_price: f64,
    /// Ordered storage/capacity options; may be empty
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
