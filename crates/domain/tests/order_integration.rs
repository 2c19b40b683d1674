//! Integration tests for the Order aggregate.
//!
//! These walk an order through the editing workflow: blank rows added and
//! completed, totals recalculated, the quote issued and then cancelled.

use chrono::NaiveDate;
use common::{CustomerId, OrderId, ProductId, UserId};
use domain::{
    LineItem, Money, Order, OrderError, OrderStatus, PaymentMethod, Product, ValidationRules,
    Violation, validate,
};

fn create_order() -> Order {
    Order::new(UserId::new(), CustomerId::new())
}

fn saved_product(sku: &str, cents: i64) -> Product {
    Product::new(sku, format!("Product {sku}"), Money::from_cents(cents)).with_id(ProductId::new())
}

mod totals {
    use super::*;

    #[test]
    fn placeholder_lines_do_not_count() {
        let mut order = create_order();
        order.set_shipping(Money::from_cents(10_00));
        order.set_discount(Money::from_cents(2_00));

        order
            .add_item(LineItem::new(
                saved_product("SKU-001", 50_00),
                1,
                Money::from_cents(50_00),
            ))
            .unwrap();
        order
            .add_item(LineItem::new(
                Product::new("SKU-NEW", "Unsaved", Money::from_cents(30_00)),
                1,
                Money::from_cents(30_00),
            ))
            .unwrap();

        order.recalculate_total();

        assert_eq!(order.total(), Money::from_cents(58_00));
        assert_eq!(order.subtotal(), Money::from_cents(50_00));
    }

    #[test]
    fn recalculation_is_idempotent() {
        let mut order = create_order();
        order.set_shipping(Money::from_cents(7_50));
        order
            .add_item(LineItem::new(
                saved_product("SKU-002", 12_25),
                4,
                Money::from_cents(12_25),
            ))
            .unwrap();

        order.recalculate_total();
        let first = order.total();
        order.recalculate_total();

        assert_eq!(order.total(), first);
        assert_eq!(first.cents(), 7_50 + 49_00);
        assert_eq!(
            order.subtotal(),
            order.total() - order.shipping() + order.discount()
        );
    }
}

mod editing_workflow {
    use super::*;

    #[test]
    fn blank_row_is_completed_then_kept() {
        let mut order = create_order();
        order.assign_id(OrderId::new());

        order.add_empty_item();
        assert_eq!(order.items().len(), 1);
        assert!(order.items()[0].product.is_none());

        let product = saved_product("SKU-010", 19_90);
        let row = &mut order.items_mut()[0];
        row.unit_price = product.unit_price;
        row.quantity = 2;
        row.product = Some(product);

        // A fresh blank row goes on top of the completed one.
        order.add_empty_item();
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.placeholder_count(), 1);

        // Saving drops the blank row only.
        assert!(order.remove_empty_item().is_some());
        assert!(order.remove_empty_item().is_none());
        assert_eq!(order.items().len(), 1);

        order.recalculate_total();
        assert_eq!(order.total(), Money::from_cents(39_80));
    }

    #[test]
    fn single_blank_row_is_removed() {
        let mut order = create_order();
        order.add_empty_item();
        order.remove_empty_item();
        assert!(order.items().is_empty());
    }

    #[test]
    fn issued_order_ignores_blank_rows() {
        let mut order = create_order();
        order.assign_id(OrderId::new());
        order.issue().unwrap();

        order.add_empty_item();

        assert!(order.items().is_empty());
        assert!(matches!(
            order.add_item(LineItem::placeholder(order.id())),
            Err(OrderError::ItemEditingClosed { .. })
        ));
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn quote_is_issued_then_cancelled() {
        let mut order = create_order();
        assert_eq!(order.status(), OrderStatus::Quote);
        assert!(!order.is_issuable());
        assert!(!order.is_cancellable());

        order.assign_id(OrderId::new());
        assert!(order.is_issuable());
        assert!(order.is_cancellable());
        assert!(order.is_editable());

        order.issue().unwrap();
        assert_eq!(order.status(), OrderStatus::Issued);
        assert!(!order.is_issuable());
        assert!(!order.is_editable());
        assert!(order.is_cancellable());
        assert!(order.is_sendable_by_email());

        order.cancel().unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert!(!order.is_cancellable());
        assert!(!order.is_sendable_by_email());
    }

    #[test]
    fn quote_can_be_cancelled_directly() {
        let mut order = create_order();
        order.assign_id(OrderId::new());
        order.cancel().unwrap();

        assert!(order.is_cancelled());
        assert!(matches!(
            order.issue(),
            Err(OrderError::InvalidStateTransition {
                current_status: OrderStatus::Cancelled,
                ..
            })
        ));
    }

    #[test]
    fn unsaved_order_cannot_transition() {
        let mut order = create_order();
        assert!(matches!(
            order.issue(),
            Err(OrderError::NotPersisted { .. })
        ));
        assert!(matches!(
            order.cancel(),
            Err(OrderError::NotPersisted { .. })
        ));
        assert!(order.is_quote());
    }
}

mod identity {
    use super::*;

    #[test]
    fn orders_compare_by_identifier() {
        let id = OrderId::new();
        let mut a = create_order();
        let mut b = create_order();
        assert_ne!(a, b);

        a.assign_id(id);
        assert_ne!(a, b);

        b.assign_id(id);
        assert_eq!(a, b);
    }
}

mod validation {
    use super::*;

    #[test]
    fn ready_order_passes_validation() {
        let mut order = create_order();
        order.set_delivery_date(NaiveDate::from_ymd_opt(2026, 12, 1));
        order.set_payment_method(Some(PaymentMethod::CreditCard));
        order
            .add_item(LineItem::for_product(saved_product("SKU-1", 100_00)))
            .unwrap();
        order.recalculate_total();

        assert!(validate(&order, &ValidationRules::default()).is_empty());
    }

    #[test]
    fn oversized_order_is_reported() {
        let mut order = create_order();
        order.set_delivery_date(NaiveDate::from_ymd_opt(2026, 12, 1));
        order.set_payment_method(Some(PaymentMethod::Cash));
        order
            .add_item(LineItem::new(
                saved_product("SKU-BIG", 50_000_00),
                3,
                Money::from_cents(50_000_00),
            ))
            .unwrap();
        order.recalculate_total();

        let violations = validate(&order, &ValidationRules::default());
        assert_eq!(
            violations,
            vec![Violation::TotalAboveMaximum {
                total: Money::from_cents(150_000_00),
                max: Money::from_units(99_999),
            }]
        );
    }
}
