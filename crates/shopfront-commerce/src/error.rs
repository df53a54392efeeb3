//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// Cart mutations never return these: quantity input is normalized and
/// persistence is best-effort. They surface from money arithmetic and from
/// the checkout hand-off.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Amount string is not a decimal.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A customer field failed validation.
    #[error("Invalid {field}: {reason}")]
    InvalidCustomerField {
        field: &'static str,
        reason: String,
    },

    /// Quantity exceeds the per-line maximum accepted at checkout.
    #[error("Quantity {quantity} for {line} exceeds maximum allowed ({limit})")]
    QuantityExceedsLimit {
        line: String,
        quantity: u32,
        limit: u32,
    },

    /// The order service refused or failed to create the order.
    #[error("Order submission failed: {0}")]
    OrderRejected(String),
}
