//! Cart service: mutations over a raw store plus aggregate rebuild
//!
//! Every mutating operation persists the raw store immediately, then the
//! returned [`CartState`] is rebuilt from that store and fresh catalog
//! lookups. Callers must not treat any in-memory cart as authoritative.

use super::money;
use super::store::{CartStore, CartStoreError};
use crate::catalog::{CatalogService, pricing};
use crate::db::repository::RepoError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::cart::{CartLine, CartState, RawCartEntry};
use shared::models::ItemKind;
use shared::util::now_millis;
use thiserror::Error;

/// Cart errors
#[derive(Debug, Error)]
pub enum CartError {
    #[error("quantity must be between 1 and {max}, got {got}", max = money::MAX_QUANTITY)]
    InvalidQuantity { got: i32 },

    #[error("price must be a finite amount between 0 and {max}, got {got}", max = money::MAX_PRICE)]
    InvalidPrice { got: f64 },

    #[error("cart line not found: {0}")]
    LineNotFound(String),

    #[error(transparent)]
    Store(#[from] CartStoreError),

    #[error("catalog error: {0}")]
    Catalog(#[from] RepoError),
}

/// Add-to-cart request.
///
/// `variant_price` is the unit price the customer saw when picking the
/// variant; it is snapshotted into the entry and honored until the
/// selection changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCart {
    pub item_id: String,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub selected_variant: Option<String>,
    #[serde(default)]
    pub variant_price: Option<f64>,
    #[serde(default)]
    pub selected_color: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

impl AddToCart {
    pub fn new(item_id: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            item_id: item_id.into(),
            kind,
            quantity: 1,
            selected_variant: None,
            variant_price: None,
            selected_color: None,
        }
    }
}

/// Cart service over one raw-store backend.
#[derive(Clone)]
pub struct CartService<S: CartStore> {
    store: S,
    catalog: CatalogService,
}

impl<S: CartStore> CartService<S> {
    pub fn new(store: S, catalog: CatalogService) -> Self {
        Self { store, catalog }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add an item to the cart.
    ///
    /// A line with the same `(item_id, variant, color)` merge key absorbs the
    /// new quantity; a freshly supplied price snapshot replaces the old one.
    pub async fn add(&self, cart_id: &str, request: AddToCart) -> Result<CartState, CartError> {
        if request.quantity < 1 || request.quantity > money::MAX_QUANTITY {
            return Err(CartError::InvalidQuantity {
                got: request.quantity,
            });
        }
        if let Some(price) = request.variant_price
            && (!price.is_finite() || price < 0.0 || price > money::MAX_PRICE)
        {
            return Err(CartError::InvalidPrice { got: price });
        }

        let mut entries = self.store.load(cart_id)?;
        let existing = entries.iter_mut().find(|e| {
            e.matches_selection(
                &request.item_id,
                request.selected_variant.as_deref(),
                request.selected_color.as_deref(),
            )
        });

        match existing {
            Some(entry) => {
                entry.quantity = (entry.quantity + request.quantity).min(money::MAX_QUANTITY);
                if request.variant_price.is_some() {
                    entry.variant_price = request.variant_price;
                }
            }
            None => {
                let mut entry =
                    RawCartEntry::new(request.item_id, request.kind, request.quantity, now_millis());
                entry.selected_variant = request.selected_variant;
                entry.variant_price = request.variant_price;
                entry.selected_color = request.selected_color;
                entries.push(entry);
            }
        }

        self.store.save(cart_id, &entries)?;
        self.rebuild(&entries).await
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    pub async fn set_quantity(
        &self,
        cart_id: &str,
        line_key: &str,
        quantity: i32,
    ) -> Result<CartState, CartError> {
        if quantity <= 0 {
            return self.remove(cart_id, line_key).await;
        }
        if quantity > money::MAX_QUANTITY {
            return Err(CartError::InvalidQuantity { got: quantity });
        }

        let mut entries = self.store.load(cart_id)?;
        let entry = entries
            .iter_mut()
            .find(|e| e.line_key() == line_key)
            .ok_or_else(|| CartError::LineNotFound(line_key.to_string()))?;
        entry.quantity = quantity;

        self.store.save(cart_id, &entries)?;
        self.rebuild(&entries).await
    }

    /// Increase a line's quantity by one.
    pub async fn increase(&self, cart_id: &str, line_key: &str) -> Result<CartState, CartError> {
        let mut entries = self.store.load(cart_id)?;
        let entry = entries
            .iter_mut()
            .find(|e| e.line_key() == line_key)
            .ok_or_else(|| CartError::LineNotFound(line_key.to_string()))?;
        entry.quantity = (entry.quantity + 1).min(money::MAX_QUANTITY);

        self.store.save(cart_id, &entries)?;
        self.rebuild(&entries).await
    }

    /// Decrease a line's quantity by one. At quantity 1 this is a no-op,
    /// not a removal — deleting a line is always an explicit `remove`.
    pub async fn decrease(&self, cart_id: &str, line_key: &str) -> Result<CartState, CartError> {
        let mut entries = self.store.load(cart_id)?;
        let entry = entries
            .iter_mut()
            .find(|e| e.line_key() == line_key)
            .ok_or_else(|| CartError::LineNotFound(line_key.to_string()))?;
        if entry.quantity > 1 {
            entry.quantity -= 1;
            self.store.save(cart_id, &entries)?;
        }

        self.rebuild(&entries).await
    }

    /// Delete a line. Removing an already-absent line is a no-op.
    pub async fn remove(&self, cart_id: &str, line_key: &str) -> Result<CartState, CartError> {
        let mut entries = self.store.load(cart_id)?;
        entries.retain(|e| e.line_key() != line_key);

        self.store.save(cart_id, &entries)?;
        self.rebuild(&entries).await
    }

    /// Empty the cart.
    pub async fn clear(&self, cart_id: &str) -> Result<CartState, CartError> {
        self.store.clear(cart_id)?;
        Ok(CartState::default())
    }

    /// Current cart state, rebuilt from the raw store.
    pub async fn state(&self, cart_id: &str) -> Result<CartState, CartError> {
        let entries = self.store.load(cart_id)?;
        self.rebuild(&entries).await
    }

    /// Join raw entries with live catalog records and recompute totals.
    ///
    /// Entries referencing missing catalog items are dropped, not errors —
    /// dangling references are expected in production data.
    async fn rebuild(&self, entries: &[RawCartEntry]) -> Result<CartState, CartError> {
        let mut lines = Vec::with_capacity(entries.len());
        let mut total = Decimal::ZERO;
        let mut count: i32 = 0;

        for entry in entries {
            if entry.quantity < 1 {
                tracing::warn!(item_id = %entry.item_id, quantity = entry.quantity, "non-positive quantity in raw store, dropping line");
                continue;
            }

            let found = match self.catalog.find(entry.kind, &entry.item_id).await? {
                Some(item) => Some(item),
                // Entries normalized from legacy blobs default to the product
                // namespace; probe the other one before giving up.
                None => self.catalog.find_any(&entry.item_id).await?,
            };
            let Some(item) = found else {
                tracing::warn!(item_id = %entry.item_id, "cart references missing catalog item, dropping line");
                continue;
            };

            let unit_price = pricing::resolve_unit_price(
                &item,
                entry.selected_variant.as_deref(),
                entry.variant_price,
            );
            let subtotal = money::line_subtotal(unit_price, entry.quantity);
            total += money::to_decimal(subtotal);
            count += entry.quantity;

            lines.push(CartLine {
                line_key: entry.line_key(),
                item_id: entry.item_id.clone(),
                kind: item.kind,
                name: item.name.clone(),
                unit_price,
                quantity: entry.quantity,
                subtotal,
                selected_variant: entry.selected_variant.clone(),
                selected_color: entry.selected_color.clone(),
                image: item.images.first().cloned(),
                in_stock: item.in_stock,
            });
        }

        Ok(CartState {
            lines,
            total: money::to_f64(total),
            count,
        })
    }
}
