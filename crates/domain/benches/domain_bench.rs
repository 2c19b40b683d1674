use common::{CustomerId, OrderId, ProductId, UserId};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use domain::{LineItem, Money, Order, Product, ValidationRules, validate};

fn order_with_items(count: usize) -> Order {
    let mut order = Order::new(UserId::new(), CustomerId::new());
    order.assign_id(OrderId::new());
    order.set_shipping(Money::from_cents(1500));
    order.set_discount(Money::from_cents(250));

    for i in 0..count {
        let price = Money::from_cents(100 + i as i64);
        let product = Product::new(format!("SKU-{i:05}"), "Bench Widget", price);
        // Every fifth line stays unsaved so the filter path is exercised.
        let product = if i % 5 == 0 {
            product
        } else {
            product.with_id(ProductId::new())
        };
        order.add_item(LineItem::new(product, 2, price)).unwrap();
    }

    order
}

fn bench_recalculate_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain/recalculate_total");

    for count in [10, 100, 1_000] {
        let mut order = order_with_items(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| order.recalculate_total());
        });
    }

    group.finish();
}

fn bench_placeholder_cycle(c: &mut Criterion) {
    let mut order = order_with_items(100);

    c.bench_function("domain/add_remove_empty_item", |b| {
        b.iter(|| {
            order.add_empty_item();
            order.remove_empty_item();
        });
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut order = order_with_items(100);
    order.recalculate_total();
    let rules = ValidationRules::default();

    c.bench_function("domain/validate", |b| {
        b.iter(|| validate(&order, &rules));
    });
}

criterion_group!(
    benches,
    bench_recalculate_total,
    bench_placeholder_cycle,
    bench_validate
);
criterion_main!(benches);
