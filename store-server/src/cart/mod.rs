//! Cart Module
//!
//! The cart aggregate is never trusted in memory: every mutation persists
//! the raw store first, then the state handed back to the caller is rebuilt
//! from that store plus fresh catalog lookups.
//!
//! Two raw-store backends share one contract ([`CartStore`]):
//!
//! - **session**: in-process per-session blobs, tolerant of legacy shapes
//! - **client**: redb-persisted per-client lines, surviving restarts
//!
//! One deployment picks one backend per flow; the aggregate semantics
//! (merge key, totals, snapshot prices) are identical over both.

pub mod client_store;
pub mod money;
pub mod service;
pub mod store;

pub use client_store::ClientCartStore;
pub use service::{AddToCart, CartError, CartService};
pub use store::{CartStore, CartStoreError, CartStoreResult, SessionCartStore};
