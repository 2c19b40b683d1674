//! Order status machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// Quote ──► Issued ──┐
///   │                ▼
///   └──────────► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Every new order starts here; header and items can be edited.
    #[default]
    Quote,

    /// Finalized; items can no longer be edited.
    Issued,

    /// Will not be fulfilled (terminal state).
    Cancelled,
}

impl OrderStatus {
    /// Returns true if header fields and items can be modified in this status.
    pub fn can_edit(&self) -> bool {
        matches!(self, OrderStatus::Quote)
    }

    /// Returns true if an order in this status can be issued.
    pub fn can_issue(&self) -> bool {
        matches!(self, OrderStatus::Quote)
    }

    /// Returns true if an order in this status can be cancelled.
    ///
    /// Issued orders can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }

    /// Returns true if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }

    /// Returns the stored name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Quote => "QUOTE",
            OrderStatus::Issued => "ISSUED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
