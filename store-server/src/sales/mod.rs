//! Sales Module
//!
//! Post-checkout lifecycle of persisted sales. The guarded transitions in
//! [`status`] enforce the one business rule that matters here: an order can
//! only complete after its payment has completed. The unguarded
//! administrative override is a separate, deliberately scary-named path.

pub mod service;
pub mod status;

pub use service::SalesService;

use crate::db::repository::RepoError;
use shared::models::PaymentStatus;
use thiserror::Error;

/// Sale transition errors
#[derive(Debug, Error)]
pub enum SaleError {
    #[error("Sale not found: {0}")]
    NotFound(String),

    #[error("payment must be completed before the order can be completed")]
    PaymentNotCompleted,

    #[error("payment is already settled as {0:?}")]
    PaymentSettled(PaymentStatus),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
