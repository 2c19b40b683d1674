//! Domain layer for sales orders.
//!
//! This crate provides:
//! - the `Order` aggregate with its quote/issued/cancelled status machine
//! - line items, products and money value objects
//! - a validation pass that reports constraint violations without mutating the order

pub mod order;
pub mod validation;

pub use order::{
    DeliveryAddress, LineItem, Money, Order, OrderError, OrderStatus, PaymentMethod, Product,
};
pub use validation::{ValidationRules, Violation, validate};
