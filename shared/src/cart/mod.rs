//! Cart types
//!
//! - **entry**: raw persisted cart entries, including legacy shapes
//! - **line**: rebuilt display lines and the cart aggregate

pub mod entry;
pub mod line;

pub use entry::{RawCartEntry, StoredCartEntry};
pub use line::{CartLine, CartState};
