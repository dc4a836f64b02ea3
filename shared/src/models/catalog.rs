//! Unified catalog item view
//!
//! Cart and pricing code works against `CatalogItem` regardless of whether
//! the record came from the `product` or `deal` table. The `kind`
//! discriminant is stored alongside the ID in cart entries so lookups never
//! have to guess the namespace.

use super::deal::Deal;
use super::product::{ColorEntry, Product, VariantOption};
use serde::{Deserialize, Serialize};

/// Catalog namespace discriminant.
///
/// Older cart records stored lowercase `type` values; the aliases keep those
/// readable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    #[default]
    #[serde(alias = "product")]
    Product,
    #[serde(alias = "deal")]
    Deal,
}

/// A Product or Deal flattened to the fields the storefront needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Record ID in `table:key` format
    pub id: String,
    pub kind: ItemKind,
    pub name: String,
    pub base_price: f64,
    /// Only set for deals
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
}

fn default_true() -> bool {
    true
}

impl CatalogItem {
    pub fn from_product(id: impl Into<String>, product: Product) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Product,
            name: product.name,
            base_price: product.base_price,
            previous_price: None,
            variant_options: product.variant_options,
            in_stock: product.in_stock,
            images: product.images,
            colors: product.colors,
        }
    }

    pub fn from_deal(id: impl Into<String>, deal: Deal) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Deal,
            name: deal.name,
            base_price: deal.base_price,
            previous_price: deal.previous_price,
            variant_options: deal.variant_options,
            in_stock: deal.in_stock,
            images: deal.images,
            colors: deal.colors,
        }
    }

    /// Canonical display price: first variant option's price when options
    /// exist, the base price otherwise.
    pub fn display_price(&self) -> f64 {
        self.variant_options
            .first()
            .map(|v| v.price)
            .unwrap_or(self.base_price)
    }

    /// Whether this item shows a markdown badge.
    pub fn has_discount(&self) -> bool {
        self.kind == ItemKind::Deal && self.previous_price.is_some_and(|p| p > self.base_price)
    }
}
