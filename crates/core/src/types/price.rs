//! Type-safe price representation using decimal arithmetic.
//!
//! Storefront entries carry both an exact numeric amount (used for cart and
//! order totals) and a display label shown to the customer (e.g.
//! "от 15 000 ₽" for starting-at pricing). Keeping the two together prevents
//! totals from drifting away from what the catalog advertises.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in rubles with its storefront display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Exact amount in rubles.
    pub amount: Decimal,
    /// Display string shown in the storefront (e.g. "от 15 000 ₽").
    pub label: String,
}

impl Price {
    /// Create a price with an explicit display label.
    #[must_use]
    pub fn with_label(amount: Decimal, label: impl Into<String>) -> Self {
        Self {
            amount,
            label: label.into(),
        }
    }

    /// Create a ruble price labeled with the plain amount (e.g. "15 000 ₽").
    #[must_use]
    pub fn rub(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
            label: format!("{} ₽", group_thousands(amount)),
        }
    }

    /// Create a starting-at ruble price (e.g. "от 15 000 ₽").
    #[must_use]
    pub fn starting_at_rub(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
            label: format!("от {} ₽", group_thousands(amount)),
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Group an integer amount into space-separated thousands, matching the
/// storefront's Russian price formatting ("15 000").
fn group_thousands(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
