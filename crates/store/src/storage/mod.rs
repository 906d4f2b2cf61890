//! Slot-based persistence.
//!
//! The storefront persists its state as string-keyed JSON blobs ("slots"),
//! one each for the current user, the full order list, and the cart. Slots
//! are read once at startup and full-overwritten on every relevant mutation;
//! there is no versioning or migration scheme.
//!
//! The [`Storage`] trait is the seam: [`MemoryStorage`] backs tests and
//! throwaway sessions, [`FileStorage`] persists across processes.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Slot keys for persisted state.
pub mod slots {
    /// Slot for the currently signed-in user.
    pub const USER: &str = "adstore-user";

    /// Slot for the full order list (all users).
    pub const ORDERS: &str = "adstore-orders";

    /// Slot for the pre-checkout cart.
    pub const CART: &str = "adstore-cart";
}

/// Errors that can occur during slot persistence.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (e.g. the backing file cannot be written).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A slot holds data that does not deserialize into the expected shape.
    #[error("corrupt data in slot {slot}: {source}")]
    Corrupt {
        /// Slot key that failed to deserialize.
        slot: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Serialization of in-memory state failed.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// String-keyed slot store.
///
/// Implementations must make each `set` a full overwrite of the slot and must
/// report write failures rather than swallowing them.
pub trait Storage: Send + Sync {
    /// Read the raw contents of a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot with the given contents.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot entirely.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize a JSON slot.
///
/// A missing slot yields `Ok(None)`; a slot that exists but does not parse
/// yields `StorageError::Corrupt`.
///
/// # Errors
///
/// Returns `StorageError::Io` on read failure or `StorageError::Corrupt` on
/// malformed slot contents.
pub fn load_json<T: DeserializeOwned>(
    storage: &dyn Storage,
    slot: &str,
) -> Result<Option<T>, StorageError> {
    match storage.get(slot)? {
        Some(raw) => {
            let value = serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                slot: slot.to_owned(),
                source,
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Serialize a value to JSON and overwrite a slot with it.
///
/// # Errors
///
/// Returns `StorageError::Serialize` if the value cannot be serialized or
/// `StorageError::Io` on write failure.
pub fn store_json<T: Serialize>(
    storage: &dyn Storage,
    slot: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    storage.set(slot, &raw)
}
