//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adstore_core::{OrderId, OrderStatus, ServiceId, UserId};

/// A single line of an order.
///
/// Carries the catalog data as it was at checkout time; later catalog edits
/// do not rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Catalog service this line was built from.
    pub service_id: ServiceId,
    /// Service title at checkout time.
    pub title: String,
    /// Display price string at checkout time (e.g. "от 15 000 ₽").
    pub price_label: String,
    /// Number of units ordered.
    pub quantity: u32,
}

/// A persisted, checked-out purchase.
///
/// Orders are never deleted; only their status changes, and only along the
/// [`OrderStatus::can_transition_to`] table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Ordered line items.
    pub items: Vec<OrderItem>,
    /// Total amount in rubles.
    pub total_amount: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// Monthly budget tier the customer indicated, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// Free-text message from the customer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An order before the session store stamps id, owner, and timestamp.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Ordered line items.
    pub items: Vec<OrderItem>,
    /// Total amount in rubles.
    pub total_amount: Decimal,
    /// Initial lifecycle status.
    pub status: OrderStatus,
    /// Monthly budget tier, if any.
    pub budget: Option<String>,
    /// Free-text message, if any.
    pub message: Option<String>,
}

/// Optional fields captured by the checkout form.
#[derive(Debug, Default, Clone)]
pub struct CheckoutDetails {
    /// Monthly budget tier.
    pub budget: Option<String>,
    /// Free-text message to the agency.
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serde_roundtrip() {
        let order = Order {
            id: OrderId::new("1"),
            user_id: UserId::new("1"),
            items: vec![OrderItem {
                service_id: ServiceId::new(1),
                title: "Google Ads".to_owned(),
                price_label: "от 15 000 ₽".to_owned(),
                quantity: 1,
            }],
            total_amount: Decimal::from(15_000),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            budget: Some("100000".to_owned()),
            message: None,
        };

        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, order.id);
        assert_eq!(parsed.items, order.items);
        assert_eq!(parsed.total_amount, order.total_amount);
        assert_eq!(parsed.status, OrderStatus::Pending);
        assert!(!json.contains("message"));
    }
}
