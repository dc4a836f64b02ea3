//! Checkout Module
//!
//! The order-materialization pipeline:
//!
//! ```text
//! validate(form) ──▶ allocate order id ──▶ persist Sale ──▶ show bank
//!                                                            transfer
//! confirm_and_clear(cart)  ◀── customer confirms ────────────┘
//! ```
//!
//! The cart is cleared only after a successful persist; any earlier failure
//! leaves it intact so the customer can retry.

pub mod service;
pub mod validate;

pub use service::{BankTransferInstructions, CheckoutService, PlacedOrder};
pub use validate::{CheckoutForm, FieldError};

use crate::cart::CartError;
use crate::db::repository::RepoError;
use thiserror::Error;

/// Checkout errors
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("checkout form is invalid")]
    Validation(Vec<FieldError>),

    #[error("could not allocate a unique order id after {0} attempts")]
    OrderIdExhausted(u32),

    #[error("failed to persist sale: {0}")]
    Persistence(#[from] RepoError),

    #[error(transparent)]
    Cart(#[from] CartError),
}
