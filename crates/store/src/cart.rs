//! Cart container: owns transient pre-checkout selections.
//!
//! The cart persists to its own storage slot on every mutation and is
//! cleared when checkout hands its lines over to the session store as a new
//! pending order.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use adstore_core::{OrderId, OrderStatus, ServiceId};

use crate::catalog::Service;
use crate::error::{StoreError, StoreResult};
use crate::models::{CartItem, CheckoutDetails, OrderDraft, OrderItem};
use crate::session::SessionStore;
use crate::storage::{self, Storage, slots};

/// Cart container.
pub struct Cart {
    storage: Arc<dyn Storage>,
    items: Vec<CartItem>,
}

impl Cart {
    /// Load the cart from its storage slot.
    ///
    /// A missing slot yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the slot cannot be read or holds
    /// corrupt data.
    pub fn load(storage: Arc<dyn Storage>) -> StoreResult<Self> {
        let items = storage::load_json(storage.as_ref(), slots::CART)?.unwrap_or_default();
        Ok(Self { storage, items })
    }

    /// Current cart lines.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    ///
    /// Widened to `u64` so the sum cannot overflow even with every line at
    /// the maximum quantity.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Add a catalog service to the cart.
    ///
    /// An existing line for the same service id gets its quantity bumped by
    /// one; otherwise a new line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if persisting fails.
    #[instrument(skip(self, service), fields(service_id = %service.id))]
    pub fn add(&mut self, service: &Service) -> StoreResult<()> {
        if let Some(line) = self.items.iter_mut().find(|i| i.service_id == service.id) {
            // Saturate rather than wrap; a line must never drop below 1
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                service_id: service.id,
                title: service.title.clone(),
                price: service.price.clone(),
                quantity: 1,
            });
        }
        debug!(count = self.total_item_count(), "cart item added");
        self.persist()
    }

    /// Remove a line entirely.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if persisting fails.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: ServiceId) -> StoreResult<()> {
        self.items.retain(|i| i.service_id != id);
        self.persist()
    }

    /// Overwrite a line's quantity; zero removes the line.
    ///
    /// Unknown service ids are ignored (nothing to update).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if persisting fails.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, id: ServiceId, quantity: u32) -> StoreResult<()> {
        if quantity == 0 {
            return self.remove(id);
        }
        if let Some(line) = self.items.iter_mut().find(|i| i.service_id == id) {
            line.quantity = quantity;
        }
        self.persist()
    }

    /// Convert the cart into a pending order owned by the signed-in user.
    ///
    /// On success the cart and its storage slot are cleared; on any failure
    /// the cart is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotAuthenticated` when signed out,
    /// `StoreError::EmptyCart` when there is nothing to check out, and
    /// `StoreError::Storage` if persisting fails.
    #[instrument(skip_all)]
    pub fn checkout(
        &mut self,
        session: &mut SessionStore,
        details: CheckoutDetails,
    ) -> StoreResult<OrderId> {
        if session.current_user().is_none() {
            return Err(StoreError::NotAuthenticated);
        }
        if self.items.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let draft = OrderDraft {
            items: self.items.iter().map(OrderItem::from).collect(),
            total_amount: self.total_price(),
            status: OrderStatus::Pending,
            budget: details.budget,
            message: details.message,
        };

        let order_id = session.add_order(draft)?.id.clone();
        info!(order_id = %order_id, "checkout complete");

        self.items.clear();
        self.storage.remove(slots::CART)?;
        Ok(order_id)
    }

    fn persist(&self) -> StoreResult<()> {
        storage::store_json(self.storage.as_ref(), slots::CART, &self.items)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;

    use adstore_core::Email;

    use super::*;
    use crate::auth::DemoVerifier;
    use crate::catalog::Catalog;
    use crate::ids::SequentialGenerator;
    use crate::storage::MemoryStorage;

    fn new_cart() -> (Cart, Catalog) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        (Cart::load(storage).unwrap(), Catalog::new())
    }

    fn service(catalog: &Catalog, id: u32) -> &Service {
        catalog.get(ServiceId::new(id)).unwrap()
    }

    #[test]
    fn test_adding_same_service_twice_merges_lines() {
        let (mut cart, catalog) = new_cart();
        cart.add(service(&catalog, 1)).unwrap();
        cart.add(service(&catalog, 1)).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 2);
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_quantity_zero_removes_line() {
        let (mut cart, catalog) = new_cart();
        cart.add(service(&catalog, 1)).unwrap();
        cart.add(service(&catalog, 2)).unwrap();

        cart.set_quantity(ServiceId::new(1), 0).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().unwrap().service_id, ServiceId::new(2));
        assert_eq!(cart.total_item_count(), 1);
        assert_eq!(cart.total_price(), Decimal::from(12_000));
    }

    #[test]
    fn test_two_distinct_services_totals() {
        // Add service 1 (15 000) and service 2 (12 000) to an empty cart
        let (mut cart, catalog) = new_cart();
        cart.add(service(&catalog, 1)).unwrap();
        cart.add(service(&catalog, 2)).unwrap();

        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.total_price(), Decimal::from(27_000));
    }

    #[test]
    fn test_total_price_tracks_mutations() {
        let (mut cart, catalog) = new_cart();
        cart.add(service(&catalog, 1)).unwrap();
        cart.set_quantity(ServiceId::new(1), 3).unwrap();
        assert_eq!(cart.total_price(), Decimal::from(45_000));

        cart.add(service(&catalog, 5)).unwrap();
        assert_eq!(cart.total_price(), Decimal::from(70_000));

        cart.remove(ServiceId::new(1)).unwrap();
        assert_eq!(cart.total_price(), Decimal::from(25_000));
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_add_saturates_at_max_quantity() {
        let (mut cart, catalog) = new_cart();
        cart.add(service(&catalog, 1)).unwrap();
        cart.set_quantity(ServiceId::new(1), u32::MAX).unwrap();

        // Another add must not wrap the line back to zero
        cart.add(service(&catalog, 1)).unwrap();
        assert_eq!(cart.items().first().unwrap().quantity, u32::MAX);
        assert_eq!(cart.total_item_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_total_item_count_sums_beyond_u32() {
        let (mut cart, catalog) = new_cart();
        cart.add(service(&catalog, 1)).unwrap();
        cart.set_quantity(ServiceId::new(1), u32::MAX).unwrap();
        cart.add(service(&catalog, 2)).unwrap();
        cart.set_quantity(ServiceId::new(2), u32::MAX).unwrap();

        assert_eq!(cart.total_item_count(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let (mut cart, catalog) = new_cart();
        cart.add(service(&catalog, 1)).unwrap();
        cart.set_quantity(ServiceId::new(42), 5).unwrap();
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_cart_persists_across_instances() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let catalog = Catalog::new();

        {
            let mut cart = Cart::load(Arc::clone(&storage)).unwrap();
            cart.add(service(&catalog, 1)).unwrap();
            cart.add(service(&catalog, 1)).unwrap();
        }

        let cart = Cart::load(storage).unwrap();
        assert_eq!(cart.total_item_count(), 2);
    }

    #[tokio::test]
    async fn test_checkout_requires_authentication() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let catalog = Catalog::new();
        let mut cart = Cart::load(Arc::clone(&storage)).unwrap();
        cart.add(service(&catalog, 1)).unwrap();

        let mut session = SessionStore::load(
            storage,
            Arc::new(DemoVerifier::new()),
            Arc::new(SequentialGenerator::default()),
            Duration::ZERO,
        )
        .unwrap();

        let err = cart.checkout(&mut session, CheckoutDetails::default());
        assert!(matches!(err, Err(StoreError::NotAuthenticated)));
        // Cart untouched after the failed checkout
        assert_eq!(cart.total_item_count(), 1);
    }

    #[tokio::test]
    async fn test_checkout_builds_pending_order_and_clears_cart() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let catalog = Catalog::new();
        let mut cart = Cart::load(Arc::clone(&storage)).unwrap();
        cart.add(service(&catalog, 1)).unwrap();
        cart.add(service(&catalog, 2)).unwrap();

        let mut session = SessionStore::load(
            storage,
            Arc::new(DemoVerifier::new()),
            Arc::new(SequentialGenerator::starting_at(10)),
            Duration::ZERO,
        )
        .unwrap();
        let email = Email::parse("ivan@example.com").unwrap();
        session
            .login(&email, &SecretString::from("pw"))
            .await
            .unwrap();

        let order_id = cart
            .checkout(
                &mut session,
                CheckoutDetails {
                    budget: Some("50000".to_owned()),
                    message: None,
                },
            )
            .unwrap();

        let order = session.order(&order_id).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, Decimal::from(27_000));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.budget.as_deref(), Some("50000"));

        assert!(cart.is_empty());
        // Empty checkout now fails
        assert!(matches!(
            cart.checkout(&mut session, CheckoutDetails::default()),
            Err(StoreError::EmptyCart)
        ));
    }
}
