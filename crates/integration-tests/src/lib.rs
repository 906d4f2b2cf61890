//! Integration tests for AdStore.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p adstore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - The full customer journey: sign in, build a cart,
//!   check out, confirm the bank transfer
//! - `persistence` - State survival across store instances over the same
//!   slot-store file

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use adstore_store::auth::DemoVerifier;
use adstore_store::ids::SequentialGenerator;
use adstore_store::storage::{FileStorage, Storage};
use adstore_store::{Cart, SessionStore};

/// Wire up a session store and cart over a file-backed slot store.
///
/// Uses the demo verifier, a deterministic id generator, and zero simulated
/// latency so tests run instantly.
///
/// # Panics
///
/// Panics if the slot-store file cannot be opened or holds corrupt data;
/// tests treat that as a failure.
#[must_use]
pub fn open_store(path: &Path) -> (SessionStore, Cart) {
    let storage: Arc<dyn Storage> =
        Arc::new(FileStorage::open(path).expect("failed to open slot store"));

    let session = SessionStore::load(
        Arc::clone(&storage),
        Arc::new(DemoVerifier::new()),
        Arc::new(SequentialGenerator::starting_at(1000)),
        Duration::ZERO,
    )
    .expect("failed to load session store");
    let cart = Cart::load(storage).expect("failed to load cart");

    (session, cart)
}
