//! AdStore state library.
//!
//! This crate provides the storefront's state containers as a library,
//! allowing them to be tested and reused behind any surface (the bundled
//! CLI, or a future HTTP frontend).
//!
//! # Components
//!
//! - [`session::SessionStore`] - owns the signed-in user and order history
//! - [`cart::Cart`] - owns transient pre-checkout selections
//! - [`catalog`] - static reference list of purchasable services
//! - [`storage`] - string-keyed slot persistence behind the [`storage::Storage`] trait
//! - [`auth`] - pluggable credential verification
//! - [`ids`] - pluggable id generation
//! - [`payment`] - manual bank-transfer confirmation helpers
//!
//! All state is owned by explicit container objects wired together with
//! injected capabilities; there are no process-wide singletons.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod payment;
pub mod session;
pub mod storage;

pub use cart::Cart;
pub use error::{StoreError, StoreResult};
pub use session::SessionStore;
