//! Id generation.
//!
//! The original storefront derived ids from the current timestamp, which can
//! collide within a millisecond. Id generation is instead an injected
//! capability: [`UuidGenerator`] for production, [`SequentialGenerator`] for
//! deterministic tests.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Pluggable id-generation capability.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh id, distinct from all previously produced ones.
    fn next_id(&self) -> String;
}

/// UUID v4 based id generator.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Create a new UUID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter generator for deterministic tests.
#[derive(Debug)]
pub struct SequentialGenerator {
    counter: AtomicU64,
}

impl SequentialGenerator {
    /// Create a generator that counts up from the given start value.
    #[must_use]
    pub const fn starting_at(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> String {
        self.counter.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
