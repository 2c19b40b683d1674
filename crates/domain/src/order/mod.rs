//! Order aggregate and related types.

mod aggregate;
mod line_item;
mod status;
mod value_objects;

pub use aggregate::Order;
pub use line_item::{LineItem, Product};
pub use status::OrderStatus;
pub use value_objects::{DeliveryAddress, Money, PaymentMethod};

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The order has no identifier yet.
    #[error("Cannot {action} an order that has not been saved")]
    NotPersisted { action: &'static str },

    /// Order is not in the expected status.
    #[error("Invalid state transition: cannot {action} from {current_status} status")]
    InvalidStateTransition {
        current_status: OrderStatus,
        action: &'static str,
    },

    /// Items can only change while the order is a quote.
    #[error("Items cannot be changed in {current_status} status")]
    ItemEditingClosed { current_status: OrderStatus },

    /// No item at the given position.
    #[error("Item not found at position {index}")]
    ItemNotFound { index: usize },
}
