//! Shared identifier types for the sales order workspace.

pub mod types;

pub use types::{CustomerId, LineItemId, OrderId, ProductId, UserId};
