//! Order aggregate implementation.

use chrono::{DateTime, NaiveDate, Utc};
use common::{CustomerId, OrderId, UserId};
use serde::{Deserialize, Serialize};

use super::{DeliveryAddress, LineItem, Money, OrderError, OrderStatus, PaymentMethod};

/// Order aggregate root.
///
/// Represents a quote or a sale from creation until it is issued or
/// cancelled. Identity is the storage identifier alone: see the
/// [`PartialEq`] impl. Transient orders have no identity, so `Order` is not
/// `Eq` and cannot key a map; key by [`Order::id`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unset until the order has been persisted.
    #[serde(default)]
    id: Option<OrderId>,

    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,

    #[serde(default)]
    note: Option<String>,

    /// Delivery day; no time component.
    #[serde(default)]
    delivery_date: Option<NaiveDate>,

    #[serde(default)]
    shipping: Money,

    #[serde(default)]
    discount: Money,

    #[serde(default)]
    total: Money,

    #[serde(default)]
    status: OrderStatus,

    #[serde(default)]
    payment_method: Option<PaymentMethod>,

    seller_id: UserId,

    customer_id: CustomerId,

    #[serde(default)]
    delivery_address: Option<DeliveryAddress>,

    #[serde(default)]
    items: Vec<LineItem>,
}

impl Order {
    /// Creates a new quote with zero amounts and no items.
    pub fn new(seller_id: UserId, customer_id: CustomerId) -> Self {
        Self {
            id: None,
            created_at: Utc::now(),
            note: None,
            delivery_date: None,
            shipping: Money::zero(),
            discount: Money::zero(),
            total: Money::zero(),
            status: OrderStatus::Quote,
            payment_method: None,
            seller_id,
            customer_id,
            delivery_address: None,
            items: Vec::new(),
        }
    }

    /// Returns true if both values are the same instance.
    ///
    /// Transient orders are never `==` to anything, including themselves;
    /// use this when instance identity is what matters.
    pub fn same_instance(a: &Order, b: &Order) -> bool {
        std::ptr::eq(a, b)
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

// Query methods
impl Order {
    /// Returns the storage identifier, if persisted.
    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn delivery_date(&self) -> Option<NaiveDate> {
        self.delivery_date
    }

    pub fn shipping(&self) -> Money {
        self.shipping
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn seller_id(&self) -> UserId {
        self.seller_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn delivery_address(&self) -> Option<&DeliveryAddress> {
        self.delivery_address.as_ref()
    }

    /// Returns the line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of blank rows still in the item list.
    pub fn placeholder_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_placeholder()).count()
    }

    /// Returns true if the order has never been persisted.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Returns true if the order has been persisted.
    pub fn is_existing(&self) -> bool {
        !self.is_new()
    }

    pub fn is_quote(&self) -> bool {
        self.status == OrderStatus::Quote
    }

    pub fn is_issued(&self) -> bool {
        self.status == OrderStatus::Issued
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }

    /// Returns true if the order can be issued now.
    pub fn is_issuable(&self) -> bool {
        self.is_existing() && self.status.can_issue()
    }

    /// Returns true if the order can be cancelled now, including an issued one.
    pub fn is_cancellable(&self) -> bool {
        self.is_existing() && self.status.can_cancel()
    }

    /// Returns true if header fields and the item list may be changed.
    pub fn is_editable(&self) -> bool {
        self.status.can_edit()
    }

    /// Returns true if the order can be e-mailed to the customer.
    pub fn is_sendable_by_email(&self) -> bool {
        !(self.is_new() || self.is_cancelled())
    }

    /// Returns true if the stored total is below zero.
    pub fn is_total_negative(&self) -> bool {
        self.total.is_negative()
    }

    /// Returns the item subtotal implied by the stored total.
    ///
    /// This inverts the recalculation formula and is meant for display; it
    /// is only accurate right after [`Order::recalculate_total`].
    pub fn subtotal(&self) -> Money {
        self.total - self.shipping + self.discount
    }
}

// Mutation methods
impl Order {
    /// Records the identifier assigned by storage.
    ///
    /// Every line item's back-reference is pointed at the new identifier.
    pub fn assign_id(&mut self, id: OrderId) {
        self.id = Some(id);
        for item in &mut self.items {
            item.order_id = Some(id);
        }
    }

    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    pub fn set_delivery_date(&mut self, date: Option<NaiveDate>) {
        self.delivery_date = date;
    }

    pub fn set_shipping(&mut self, shipping: Money) {
        self.shipping = shipping;
    }

    pub fn set_discount(&mut self, discount: Money) {
        self.discount = discount;
    }

    /// Overwrites the stored total.
    ///
    /// Nothing checks the value here; the validation pass reports totals
    /// outside the accepted range.
    pub fn set_total(&mut self, total: Money) {
        self.total = total;
    }

    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.payment_method = method;
    }

    pub fn set_seller(&mut self, seller_id: UserId) {
        self.seller_id = seller_id;
    }

    pub fn set_customer(&mut self, customer_id: CustomerId) {
        self.customer_id = customer_id;
    }

    pub fn set_delivery_address(&mut self, address: Option<DeliveryAddress>) {
        self.delivery_address = address;
    }

    /// Returns the line items for in-place editing of their fields.
    ///
    /// Adding and removing lines goes through the dedicated methods.
    pub fn items_mut(&mut self) -> &mut [LineItem] {
        &mut self.items
    }

    /// Recomputes the total from shipping, discount and the persisted lines.
    ///
    /// Placeholder lines are skipped. Nothing observes the item list, so
    /// callers must invoke this after every item change.
    pub fn recalculate_total(&mut self) {
        let items: Money = self
            .items
            .iter()
            .filter(|item| item.has_persisted_product())
            .map(LineItem::line_total)
            .sum();

        self.total = self.shipping - self.discount + items;

        tracing::debug!(
            order_id = ?self.id,
            shipping = %self.shipping,
            discount = %self.discount,
            total = %self.total,
            "order total recalculated"
        );
    }

    /// Inserts a blank row at the top of the item list.
    ///
    /// Does nothing unless the order is a quote.
    pub fn add_empty_item(&mut self) {
        if !self.is_quote() {
            return;
        }

        self.items.insert(0, LineItem::placeholder(self.id));
        tracing::debug!(order_id = ?self.id, items = self.items.len(), "placeholder item added");
    }

    /// Removes the first line if it is still a blank row and returns it.
    ///
    /// Does nothing unless the order is a quote. An empty item list is left
    /// untouched.
    pub fn remove_empty_item(&mut self) -> Option<LineItem> {
        if !self.is_quote() || !self.items.first().is_some_and(LineItem::is_placeholder) {
            return None;
        }

        let removed = self.items.remove(0);
        tracing::debug!(order_id = ?self.id, items = self.items.len(), "placeholder item removed");
        Some(removed)
    }

    /// Appends a line to the order.
    pub fn add_item(&mut self, mut item: LineItem) -> Result<(), OrderError> {
        if !self.is_editable() {
            return Err(OrderError::ItemEditingClosed {
                current_status: self.status,
            });
        }

        item.order_id = self.id;
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the line at `index`.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, OrderError> {
        if !self.is_editable() {
            return Err(OrderError::ItemEditingClosed {
                current_status: self.status,
            });
        }

        if index >= self.items.len() {
            return Err(OrderError::ItemNotFound { index });
        }

        Ok(self.items.remove(index))
    }

    /// Returns the error [`Order::issue`] would fail with, without changing
    /// anything.
    pub fn ensure_issuable(&self) -> Result<(), OrderError> {
        self.check_transition("issue", self.status.can_issue())
    }

    /// Issues the quote.
    pub fn issue(&mut self) -> Result<(), OrderError> {
        self.ensure_issuable()?;

        self.status = OrderStatus::Issued;
        tracing::info!(order_id = ?self.id, total = %self.total, "order issued");
        Ok(())
    }

    /// Cancels the order. Issued orders can be cancelled too.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.check_transition("cancel", self.status.can_cancel())?;

        let previous = self.status;
        self.status = OrderStatus::Cancelled;
        tracing::info!(order_id = ?self.id, %previous, "order cancelled");
        Ok(())
    }

    fn check_transition(&self, action: &'static str, allowed: bool) -> Result<(), OrderError> {
        if self.is_new() {
            tracing::warn!(action, "transition rejected: order not persisted");
            return Err(OrderError::NotPersisted { action });
        }

        if !allowed {
            tracing::warn!(order_id = ?self.id, action, status = %self.status, "transition rejected");
            return Err(OrderError::InvalidStateTransition {
                current_status: self.status,
                action,
            });
        }

        Ok(())
    }
}
