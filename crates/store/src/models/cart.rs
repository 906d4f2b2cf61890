//! Cart domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adstore_core::{Price, ServiceId};

use super::OrderItem;

/// A transient pre-checkout line item.
///
/// Lives in the cart container until checkout copies it into an order.
/// Quantity is always at least 1; a quantity update to 0 removes the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog service this line refers to.
    pub service_id: ServiceId,
    /// Service title.
    pub title: String,
    /// Service price (numeric amount plus display label).
    pub price: Price,
    /// Number of units.
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit amount times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount * Decimal::from(self.quantity)
    }
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            service_id: item.service_id,
            title: item.title.clone(),
            price_label: item.price.label.clone(),
            quantity: item.quantity,
        }
    }
}
