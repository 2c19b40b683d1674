//! Constraint checks over an order's state.
//!
//! Validation is a pure pass: the aggregate accepts any value through its
//! setters and [`validate`] reports what is wrong.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::{Money, Order};

/// Bounds applied by [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Smallest acceptable total.
    pub min_total: Money,

    /// Largest acceptable total.
    pub max_total: Money,
}

impl ValidationRules {
    /// Default upper bound for an order total: 99999.00.
    pub const DEFAULT_MAX_TOTAL: Money = Money::from_units(99_999);
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_total: Money::zero(),
            max_total: Self::DEFAULT_MAX_TOTAL,
        }
    }
}

/// A single constraint an order fails to meet.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("Delivery date is required")]
    MissingDeliveryDate,

    #[error("Payment method is required")]
    MissingPaymentMethod,

    #[error("{field} must not be negative (got {amount})")]
    NegativeAmount { field: &'static str, amount: Money },

    #[error("Total {total} is below the minimum of {min}")]
    TotalBelowMinimum { total: Money, min: Money },

    #[error("Total {total} is too high (maximum {max})")]
    TotalAboveMaximum { total: Money, max: Money },

    #[error("{field} {amount} does not fit in 10 digits with 2 decimals")]
    AmountExceedsPrecision { field: &'static str, amount: Money },
}

/// Checks an order against the rules and returns every violation found.
///
/// An empty result means the order is valid.
pub fn validate(order: &Order, rules: &ValidationRules) -> Vec<Violation> {
    let mut violations = Vec::new();

    if order.delivery_date().is_none() {
        violations.push(Violation::MissingDeliveryDate);
    }

    if order.payment_method().is_none() {
        violations.push(Violation::MissingPaymentMethod);
    }

    for (field, amount) in [
        ("shipping", order.shipping()),
        ("discount", order.discount()),
    ] {
        if amount.is_negative() {
            violations.push(Violation::NegativeAmount { field, amount });
        }
    }

    let total = order.total();
    if total < rules.min_total {
        violations.push(Violation::TotalBelowMinimum {
            total,
            min: rules.min_total,
        });
    }
    if total > rules.max_total {
        violations.push(Violation::TotalAboveMaximum {
            total,
            max: rules.max_total,
        });
    }

    for (field, amount) in [
        ("shipping", order.shipping()),
        ("discount", order.discount()),
        ("total", total),
    ] {
        if !amount.is_storable() {
            violations.push(Violation::AmountExceedsPrecision { field, amount });
        }
    }

    if !violations.is_empty() {
        tracing::debug!(order_id = ?order.id(), count = violations.len(), "order failed validation");
    }

    violations
}
