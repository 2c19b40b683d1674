//! Line items and the products they reference.

use common::{LineItemId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

use super::Money;

/// A product as seen from an order line.
///
/// Only the presence of `id` matters to the order: a product without an
/// identifier has never been saved and does not count toward totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub unit_price: Money,
}

impl Product {
    /// Creates a product that has not been persisted yet.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: None,
            sku: sku.into(),
            name: name.into(),
            unit_price,
        }
    }

    /// Returns the same product carrying a storage identifier.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true if the product has an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// One product line within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub id: Option<LineItemId>,

    /// Unset while the line is a blank row awaiting data entry.
    #[serde(default)]
    pub product: Option<Product>,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default)]
    pub unit_price: Money,

    /// The owning order, if it has been persisted.
    #[serde(default)]
    pub order_id: Option<OrderId>,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    /// Creates a line for a product.
    pub fn new(product: Product, quantity: u32, unit_price: Money) -> Self {
        Self {
            id: None,
            product: Some(product),
            quantity,
            unit_price,
            order_id: None,
        }
    }

    /// Creates a single-unit line priced at the product's list price.
    pub fn for_product(product: Product) -> Self {
        let unit_price = product.unit_price;
        Self::new(product, 1, unit_price)
    }

    /// Creates a blank row with no product.
    pub fn placeholder(order_id: Option<OrderId>) -> Self {
        Self {
            id: None,
            product: None,
            quantity: default_quantity(),
            unit_price: Money::zero(),
            order_id,
        }
    }

    /// Returns `unit_price * quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    /// Returns true if the line references a persisted product.
    pub fn has_persisted_product(&self) -> bool {
        self.product.as_ref().is_some_and(Product::is_persisted)
    }

    /// Returns true if the line is still a blank row: no product, or a
    /// product that was never saved.
    pub fn is_placeholder(&self) -> bool {
        !self.has_persisted_product()
    }
}
