//! Pure status transitions on a loaded [`Sale`]
//!
//! Each guarded transition returns `Ok(true)` when it changed the record,
//! `Ok(false)` when the sale was already in the target state (idempotent
//! repeat — audit fields keep their first values), and an error when the
//! transition is not allowed. Persistence happens in the service layer.

use super::SaleError;
use shared::models::{PaymentStatus, Sale};

/// Mark the bank transfer as received: `Pending → Completed`.
///
/// Repeating the call is a no-op, which makes two operators clicking
/// "mark paid" concurrently harmless.
pub fn complete_payment(
    sale: &mut Sale,
    approver: Option<&str>,
    now: i64,
) -> Result<bool, SaleError> {
    match sale.payment_status {
        PaymentStatus::Pending => {
            sale.payment_status = PaymentStatus::Completed;
            sale.payment_approved_at = Some(now);
            if let Some(name) = approver {
                sale.approved_by = Some(name.to_string());
            }
            Ok(true)
        }
        PaymentStatus::Completed => Ok(false),
        settled => Err(SaleError::PaymentSettled(settled)),
    }
}

/// `Pending → Failed`. Terminal.
pub fn fail_payment(sale: &mut Sale) -> Result<bool, SaleError> {
    settle_payment(sale, PaymentStatus::Failed)
}

/// `Pending → Refunded`. Terminal.
pub fn refund_payment(sale: &mut Sale) -> Result<bool, SaleError> {
    settle_payment(sale, PaymentStatus::Refunded)
}

fn settle_payment(sale: &mut Sale, target: PaymentStatus) -> Result<bool, SaleError> {
    if sale.payment_status == target {
        return Ok(false);
    }
    match sale.payment_status {
        PaymentStatus::Pending => {
            sale.payment_status = target;
            Ok(true)
        }
        settled => Err(SaleError::PaymentSettled(settled)),
    }
}

/// Mark the order itself as completed (picked up / delivered).
///
/// Rejected while payment is anything but `Completed`. A repeat call is a
/// no-op: `completed_at` keeps the first success time.
pub fn complete_order(
    sale: &mut Sale,
    approver: Option<&str>,
    now: i64,
) -> Result<bool, SaleError> {
    if sale.payment_status != PaymentStatus::Completed {
        return Err(SaleError::PaymentNotCompleted);
    }
    if sale.order_completed {
        return Ok(false);
    }
    sale.order_completed = true;
    sale.completed_at = Some(now);
    if let Some(name) = approver {
        sale.approved_by = Some(name.to_string());
    }
    Ok(true)
}

/// Unguarded administrative override. Skips every precondition above —
/// intended for data correction only, never for the normal flow.
pub fn force_set_status(sale: &mut Sale, payment_status: PaymentStatus, order_completed: bool) {
    sale.payment_status = payment_status;
    sale.order_completed = order_completed;
}
