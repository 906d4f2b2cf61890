//! Session store: owns the signed-in user and the order history.
//!
//! The store is an explicit container wired up with injected capabilities
//! (slot storage, credential verification, id generation) and passed by
//! reference to whatever surface needs it. Both slots are read once at
//! construction and full-overwritten on every mutation.
//!
//! The order slot holds orders for every user id that ever signed in on this
//! store; the exposed [`orders`](SessionStore::orders) view is always
//! pre-filtered to the current user.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing::{debug, info, instrument};

use adstore_core::{Email, OrderId, OrderStatus, ServiceId, UserId};

use crate::auth::CredentialVerifier;
use crate::error::{StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::models::{Order, OrderDraft, OrderItem, ProfileUpdate, RegisterData, User};
use crate::storage::{self, Storage, slots};

/// Session store owning the current user and the full order list.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    verifier: Arc<dyn CredentialVerifier>,
    ids: Arc<dyn IdGenerator>,
    login_delay: Duration,
    user: Option<User>,
    orders: Vec<Order>,
}

impl SessionStore {
    /// Load a session store from its storage slots.
    ///
    /// Missing slots yield an empty signed-out session; `login_delay` is the
    /// simulated verification latency (zero in tests).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if a slot cannot be read or holds
    /// corrupt data.
    pub fn load(
        storage: Arc<dyn Storage>,
        verifier: Arc<dyn CredentialVerifier>,
        ids: Arc<dyn IdGenerator>,
        login_delay: Duration,
    ) -> StoreResult<Self> {
        let user = storage::load_json(storage.as_ref(), slots::USER)?;
        let orders = storage::load_json(storage.as_ref(), slots::ORDERS)?.unwrap_or_default();

        Ok(Self {
            storage,
            verifier,
            ids,
            login_delay,
            user,
            orders,
        })
    }

    /// The currently signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Orders of the current user, oldest first.
    ///
    /// Empty when signed out. Orders belonging to other user ids stay in the
    /// slot but are never surfaced.
    #[must_use]
    pub fn orders(&self) -> Vec<&Order> {
        self.user.as_ref().map_or_else(Vec::new, |user| {
            self.orders
                .iter()
                .filter(|o| o.user_id == user.id)
                .collect()
        })
    }

    /// Look up one of the current user's orders by id.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders().into_iter().find(|o| &o.id == id)
    }

    /// Sign in with email and password.
    ///
    /// Waits out the simulated latency, delegates to the injected
    /// [`CredentialVerifier`], persists the verified user, and seeds the
    /// canned demo orders if the account has none yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Auth` if verification fails and
    /// `StoreError::Storage` if persisting fails.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&mut self, email: &Email, password: &SecretString) -> StoreResult<&User> {
        tokio::time::sleep(self.login_delay).await;

        let user = self.verifier.verify(email, password).await?;
        info!(user_id = %user.id, "user signed in");

        storage::store_json(self.storage.as_ref(), slots::USER, &user)?;
        let user = self.user.insert(user);
        let user_id = user.id.clone();

        if !self.orders.iter().any(|o| o.user_id == user_id) {
            debug!(user_id = %user_id, "seeding demo orders");
            let seeded = demo_orders(&user_id, self.ids.as_ref());
            self.orders.extend(seeded);
            storage::store_json(self.storage.as_ref(), slots::ORDERS, &self.orders)?;
        }

        // Reborrow: `insert` above ends before the seeding writes
        self.user.as_ref().ok_or(StoreError::NotAuthenticated)
    }

    /// Create a new account and sign it in.
    ///
    /// Waits out the simulated latency, stamps a fresh user id and the
    /// current registration time, and persists the user. Password strength
    /// and confirmation checks belong to the calling form.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if persisting fails.
    #[instrument(skip(self, data), fields(email = %data.email))]
    pub async fn register(&mut self, data: RegisterData) -> StoreResult<&User> {
        tokio::time::sleep(self.login_delay).await;

        let user = User {
            id: UserId::new(self.ids.next_id()),
            name: data.name,
            email: data.email,
            company: data.company,
            phone: data.phone,
            registered_at: Utc::now(),
        };
        info!(user_id = %user.id, "user registered");

        storage::store_json(self.storage.as_ref(), slots::USER, &user)?;
        Ok(self.user.insert(user))
    }

    /// Sign out: clears the current user from memory and storage.
    ///
    /// The order slot is retained.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the user slot cannot be removed.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> StoreResult<()> {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "user signed out");
        }
        self.storage.remove(slots::USER)?;
        Ok(())
    }

    /// Merge partial fields into the current user's profile and persist.
    ///
    /// A no-op when signed out; surfaces are expected to guard their own
    /// profile forms.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if persisting fails.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> StoreResult<()> {
        if let Some(user) = self.user.as_mut() {
            update.apply(user);
            storage::store_json(self.storage.as_ref(), slots::USER, user)?;
        }
        Ok(())
    }

    /// Append a checked-out order for the current user.
    ///
    /// Stamps a fresh order id, the owning user id, and the current
    /// timestamp, then persists the full order list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotAuthenticated` when signed out and
    /// `StoreError::Storage` if persisting fails.
    #[instrument(skip(self, draft))]
    pub fn add_order(&mut self, draft: OrderDraft) -> StoreResult<&Order> {
        let user = self.user.as_ref().ok_or(StoreError::NotAuthenticated)?;

        let order = Order {
            id: OrderId::new(self.ids.next_id()),
            user_id: user.id.clone(),
            items: draft.items,
            total_amount: draft.total_amount,
            status: draft.status,
            created_at: Utc::now(),
            budget: draft.budget,
            message: draft.message,
        };
        info!(order_id = %order.id, total = %order.total_amount, "order created");

        let id = order.id.clone();
        self.orders.push(order);
        storage::store_json(self.storage.as_ref(), slots::ORDERS, &self.orders)?;
        self.orders
            .iter()
            .rev()
            .find(|o| o.id == id)
            .ok_or(StoreError::OrderNotFound(id))
    }

    /// Move one of the current user's orders to a new status.
    ///
    /// The change must be in the [`OrderStatus::can_transition_to`] table;
    /// anything else is rejected and storage is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotAuthenticated` when signed out,
    /// `StoreError::OrderNotFound` if the id does not match one of the
    /// current user's orders, `StoreError::InvalidStatusTransition` for
    /// out-of-table changes, and `StoreError::Storage` if persisting fails.
    #[instrument(skip(self))]
    pub fn update_order_status(&mut self, id: &OrderId, status: OrderStatus) -> StoreResult<()> {
        let user = self.user.as_ref().ok_or(StoreError::NotAuthenticated)?;
        let user_id = user.id.clone();

        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id && o.user_id == user_id)
            .ok_or_else(|| StoreError::OrderNotFound(id.clone()))?;

        if !order.status.can_transition_to(status) {
            return Err(StoreError::InvalidStatusTransition {
                from: order.status,
                to: status,
            });
        }

        info!(order_id = %id, from = %order.status, to = %status, "order status changed");
        order.status = status;
        storage::store_json(self.storage.as_ref(), slots::ORDERS, &self.orders)?;
        Ok(())
    }
}

/// The two canned demo orders seeded on first login.
fn demo_orders(user_id: &UserId, ids: &dyn IdGenerator) -> Vec<Order> {
    let created = |s: &str| -> DateTime<Utc> { s.parse().unwrap_or_else(|_| Utc::now()) };

    vec![
        Order {
            id: OrderId::new(ids.next_id()),
            user_id: user_id.clone(),
            items: vec![
                OrderItem {
                    service_id: ServiceId::new(1),
                    title: "Google Ads".to_owned(),
                    price_label: "от 15 000 ₽".to_owned(),
                    quantity: 1,
                },
                OrderItem {
                    service_id: ServiceId::new(2),
                    title: "Яндекс.Директ".to_owned(),
                    price_label: "от 12 000 ₽".to_owned(),
                    quantity: 1,
                },
            ],
            total_amount: Decimal::from(27_000),
            status: OrderStatus::Completed,
            created_at: created("2024-01-20T14:30:00Z"),
            budget: Some("100000".to_owned()),
            message: Some("Нужна настройка контекстной рекламы для интернет-магазина".to_owned()),
        },
        Order {
            id: OrderId::new(ids.next_id()),
            user_id: user_id.clone(),
            items: vec![OrderItem {
                service_id: ServiceId::new(3),
                title: "Facebook & Instagram".to_owned(),
                price_label: "от 20 000 ₽".to_owned(),
                quantity: 1,
            }],
            total_amount: Decimal::from(20_000),
            status: OrderStatus::InProgress,
            created_at: created("2024-01-25T09:15:00Z"),
            budget: Some("50000".to_owned()),
            message: Some("Продвижение нового продукта в соцсетях".to_owned()),
        },
    ]
}
