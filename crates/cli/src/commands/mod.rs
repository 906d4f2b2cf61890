//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod orders;

use std::sync::Arc;

use adstore_store::auth::DemoVerifier;
use adstore_store::catalog::Catalog;
use adstore_store::config::StoreConfig;
use adstore_store::ids::UuidGenerator;
use adstore_store::storage::{FileStorage, Storage};
use adstore_store::{Cart, SessionStore};

/// Shared state wired up for a single command invocation.
///
/// Every invocation reloads the containers from the file-backed slot store,
/// giving the CLI the same load-once/persist-on-mutation lifecycle a browser
/// session has.
pub struct Context {
    pub config: StoreConfig,
    pub session: SessionStore,
    pub cart: Cart,
    pub catalog: Catalog,
}

impl Context {
    /// Build the containers from configuration and the slot-store file.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config = StoreConfig::from_env()?;
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(&config.data_path)?);

        let session = SessionStore::load(
            Arc::clone(&storage),
            Arc::new(DemoVerifier::new()),
            Arc::new(UuidGenerator::new()),
            config.login_delay,
        )?;
        let cart = Cart::load(storage)?;

        Ok(Self {
            config,
            session,
            cart,
            catalog: Catalog::new(),
        })
    }
}
