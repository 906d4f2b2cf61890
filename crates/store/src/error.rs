//! Unified error handling for store operations.
//!
//! All state-container operations return `Result<T, StoreError>`. The
//! original storefront surfaced failures as boolean flags or silent no-ops;
//! here they are typed and propagated, including persistence failures.

use adstore_core::{OrderId, OrderStatus};
use thiserror::Error;

use crate::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persistence operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Credential verification failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Operation requires a signed-in user.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Checkout attempted with an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// No order with the given id belongs to the current user.
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// Requested status change is not in the transition table.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// Status the order is currently in.
        from: OrderStatus,
        /// Status the caller asked for.
        to: OrderStatus,
    },

    /// Payment confirmation submitted without proof text.
    #[error("payment proof is required")]
    MissingPaymentProof,

    /// Payment confirmation on an order that is not awaiting payment.
    #[error("order {0} is not awaiting payment")]
    NotAwaitingPayment(OrderId),
}

/// Result type alias for `StoreError`.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::OrderNotFound(OrderId::new("42"));
        assert_eq!(err.to_string(), "order not found: 42");

        let err = StoreError::InvalidStatusTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "invalid status transition: completed -> pending"
        );
    }
}
