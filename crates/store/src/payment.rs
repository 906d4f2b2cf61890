//! Manual bank-transfer payment confirmation.
//!
//! There is no payment gateway: the customer transfers the order total to
//! the configured card and confirms with a proof-of-payment reference. The
//! confirmation moves the order from `Pending` to `Confirmed` through the
//! normal status-transition path. A QR code with the transfer details is
//! rendered by an external image service from a URL built here.

use tracing::instrument;

use adstore_core::{OrderId, OrderStatus};

use crate::error::{StoreError, StoreResult};
use crate::models::Order;
use crate::session::SessionStore;

/// QR image service endpoint.
const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Bank transfer recipient details.
#[derive(Debug, Clone)]
pub struct PaymentDetails {
    /// Recipient card number.
    pub card_number: String,
    /// Recipient card holder name.
    pub card_holder: String,
}

impl Default for PaymentDetails {
    fn default() -> Self {
        Self {
            card_number: "2200701320908210".to_owned(),
            card_holder: "AdStore".to_owned(),
        }
    }
}

/// Build the QR-code image URL for paying an order.
///
/// The encoded payload carries the order id, the total amount, and the
/// recipient card number, in the wording the banking apps expect.
#[must_use]
pub fn payment_qr_url(order: &Order, details: &PaymentDetails) -> String {
    let payload = format!(
        "Оплата заказа {} на сумму {} руб. Карта: {}",
        order.id, order.total_amount, details.card_number
    );
    format!(
        "{QR_ENDPOINT}?size=200x200&data={}",
        urlencoding::encode(&payload)
    )
}

/// Confirm a manual payment for one of the current user's orders.
///
/// Requires a non-blank proof-of-payment reference (operation number or
/// receipt note) and an order that is still awaiting payment.
///
/// # Errors
///
/// Returns `StoreError::MissingPaymentProof` for blank proof text,
/// `StoreError::OrderNotFound` if the order does not belong to the current
/// user, `StoreError::NotAwaitingPayment` if the order is not `Pending`, and
/// the usual authentication/storage errors from the underlying status update.
#[instrument(skip(session, proof))]
pub fn confirm_payment(
    session: &mut SessionStore,
    order_id: &OrderId,
    proof: &str,
) -> StoreResult<()> {
    if proof.trim().is_empty() {
        return Err(StoreError::MissingPaymentProof);
    }

    let order = session
        .order(order_id)
        .ok_or_else(|| StoreError::OrderNotFound(order_id.clone()))?;
    if order.status != OrderStatus::Pending {
        return Err(StoreError::NotAwaitingPayment(order_id.clone()));
    }

    session.update_order_status(order_id, OrderStatus::Confirmed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use rust_decimal::Decimal;
    use secrecy::SecretString;

    use adstore_core::{Email, ServiceId};

    use super::*;
    use crate::auth::DemoVerifier;
    use crate::ids::SequentialGenerator;
    use crate::models::{OrderDraft, OrderItem};
    use crate::storage::{MemoryStorage, Storage};

    async fn session_with_pending_order() -> (SessionStore, OrderId) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut session = SessionStore::load(
            storage,
            Arc::new(DemoVerifier::new()),
            Arc::new(SequentialGenerator::default()),
            Duration::ZERO,
        )
        .unwrap();
        let email = Email::parse("ivan@example.com").unwrap();
        session
            .login(&email, &SecretString::from("pw"))
            .await
            .unwrap();

        let id = session
            .add_order(OrderDraft {
                items: vec![OrderItem {
                    service_id: ServiceId::new(1),
                    title: "Google Ads".to_owned(),
                    price_label: "от 15 000 ₽".to_owned(),
                    quantity: 1,
                }],
                total_amount: Decimal::from(15_000),
                status: adstore_core::OrderStatus::Pending,
                budget: None,
                message: None,
            })
            .unwrap()
            .id
            .clone();
        (session, id)
    }

    #[tokio::test]
    async fn test_blank_proof_rejected() {
        let (mut session, id) = session_with_pending_order().await;
        assert!(matches!(
            confirm_payment(&mut session, &id, "   "),
            Err(StoreError::MissingPaymentProof)
        ));
        assert_eq!(
            session.order(&id).unwrap().status,
            OrderStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_confirmation_moves_order_to_confirmed_once() {
        let (mut session, id) = session_with_pending_order().await;

        confirm_payment(&mut session, &id, "op-991822").unwrap();
        assert_eq!(session.order(&id).unwrap().status, OrderStatus::Confirmed);

        // A second confirmation finds the order no longer awaiting payment
        assert!(matches!(
            confirm_payment(&mut session, &id, "op-991822"),
            Err(StoreError::NotAwaitingPayment(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_order_rejected() {
        let (mut session, _) = session_with_pending_order().await;
        let missing = OrderId::new("missing");
        assert!(matches!(
            confirm_payment(&mut session, &missing, "op-1"),
            Err(StoreError::OrderNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_qr_url_encodes_order_details() {
        let (session, id) = session_with_pending_order().await;
        let order = session.order(&id).unwrap();
        let url = payment_qr_url(order, &PaymentDetails::default());

        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data="));
        assert!(url.contains(&urlencoding::encode("2200701320908210").into_owned()));
        assert!(url.contains(&urlencoding::encode("15000").into_owned()));
        // Cyrillic payload must be percent-encoded
        assert!(!url.contains("Оплата"));
    }

    #[tokio::test]
    async fn test_payment_scoped_to_current_user() {
        let (mut session, id) = session_with_pending_order().await;
        session.logout().unwrap();
        assert!(matches!(
            confirm_payment(&mut session, &id, "op-1"),
            Err(StoreError::OrderNotFound(_))
        ));
    }
}
