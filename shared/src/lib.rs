//! Shared types for the gadget storefront
//!
//! Data models used across the store server and its callers: catalog items,
//! raw cart entries, rebuilt cart state, and persisted sale records.

pub mod cart;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartLine, CartState, RawCartEntry, StoredCartEntry};
pub use models::{
    CatalogItem, Customer, Deal, DeliveryAddress, FulfillmentMethod, ItemKind, PaymentStatus,
    Product, Sale, SaleLine, VariantOption,
};
