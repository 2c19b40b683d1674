//! JSON report describing an order after a command ran.

use common::OrderId;
use domain::{Money, Order, OrderStatus, Violation};
use serde::Serialize;

/// What the order permits in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderFlags {
    pub editable: bool,
    pub issuable: bool,
    pub cancellable: bool,
    pub sendable_by_email: bool,
    pub total_negative: bool,
}

impl OrderFlags {
    fn of(order: &Order) -> Self {
        Self {
            editable: order.is_editable(),
            issuable: order.is_issuable(),
            cancellable: order.is_cancellable(),
            sendable_by_email: order.is_sendable_by_email(),
            total_negative: order.is_total_negative(),
        }
    }
}

/// Summary of an order plus the violations found by validation.
///
/// The full order is embedded so the caller can store the result of a
/// transition.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReport {
    pub order_id: Option<OrderId>,
    pub status: OrderStatus,
    pub shipping: Money,
    pub discount: Money,
    pub subtotal: Money,
    pub total: Money,
    pub item_count: usize,
    pub placeholder_count: usize,
    pub flags: OrderFlags,
    pub violations: Vec<Violation>,
    pub order: Order,
}

impl OrderReport {
    pub fn new(order: Order, violations: Vec<Violation>) -> Self {
        Self {
            order_id: order.id(),
            status: order.status(),
            shipping: order.shipping(),
            discount: order.discount(),
            subtotal: order.subtotal(),
            total: order.total(),
            item_count: order.items().len(),
            placeholder_count: order.placeholder_count(),
            flags: OrderFlags::of(&order),
            violations,
            order,
        }
    }

    /// Returns true if validation found nothing to report.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}
