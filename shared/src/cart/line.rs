//! Rebuilt cart lines and the cart aggregate

use crate::models::ItemKind;
use serde::{Deserialize, Serialize};

/// One display row of the cart: a raw entry joined with live catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// `item_id|variant|color` — addresses the line in mutation calls
    pub line_key: String,
    pub item_id: String,
    pub kind: ItemKind,
    pub name: String,
    /// Effective unit price: snapshot if one was taken, display price otherwise
    pub unit_price: f64,
    pub quantity: i32,
    pub subtotal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub in_stock: bool,
}

/// Cart aggregate: insertion-ordered lines plus recomputed totals.
///
/// Always rebuilt from the raw store and fresh catalog lookups — never
/// trusted across mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    /// Sum of line subtotals
    pub total: f64,
    /// Sum of line quantities
    pub count: i32,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, line_key: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.line_key == line_key)
    }
}
