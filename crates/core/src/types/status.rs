//! Order status lifecycle.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Orders start out `Pending` at checkout and move forward through the
/// lifecycle; they are never deleted. Unlike the original storefront, status
/// changes must follow the explicit transition table in
/// [`can_transition_to`](Self::can_transition_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Checked out, awaiting manual payment confirmation.
    #[default]
    Pending,
    /// Payment confirmed by the customer.
    Confirmed,
    /// Work on the order has started.
    InProgress,
    /// Order fulfilled.
    Completed,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Whether a transition from `self` to `next` is legal.
    ///
    /// The table moves strictly forward: `Pending` → `Confirmed` →
    /// `InProgress` → `Completed`, with `Cancelled` reachable from any
    /// non-terminal state. `Completed` and `Cancelled` are terminal.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::InProgress | Self::Cancelled)
                | (Self::InProgress, Self::Completed | Self::Cancelled)
        )
    }

    /// Whether this status accepts no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
