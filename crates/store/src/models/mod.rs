//! Domain models persisted by the state containers.

pub mod cart;
pub mod order;
pub mod user;

pub use cart::CartItem;
pub use order::{CheckoutDetails, Order, OrderDraft, OrderItem};
pub use user::{ProfileUpdate, RegisterData, User};
