use chrono::{TimeZone, Utc};
use engine::{
    Engine, EngineError, Expense, Ingredient, Money, Sale, SaleItem, render_report, summary,
};

fn ingredient(name: &str, quantity: f64, price: i64, min_stock: f64) -> Ingredient {
    Ingredient::new(
        name,
        "Vegetables",
        quantity,
        "kg",
        Money::new(price),
        min_stock,
        Utc::now(),
    )
}

#[test]
fn seeded_store_matches_the_sample_dataset() {
    let engine = Engine::with_sample_data();
    assert_eq!(engine.ingredients().len(), 8);
    assert_eq!(engine.expenses().len(), 5);
    assert_eq!(engine.sales().len(), 5);
    assert_eq!(engine.daily_stats().len(), 7);
    assert_eq!(engine.monthly_stats().len(), 6);
}

#[test]
fn ingredient_crud_round_trip() {
    let mut engine = Engine::new();
    let item = ingredient("Tomatoes", 25.0, 3_50, 10.0);
    let id = item.id;

    engine.add_ingredient(item.clone()).unwrap();
    assert_eq!(engine.ingredients().len(), 1);

    let mut updated = item;
    updated.quantity = 8.0;
    engine.update_ingredient(updated).unwrap();
    assert_eq!(engine.ingredients()[0].quantity, 8.0);
    assert!(engine.ingredients()[0].is_low_stock());

    engine.remove_ingredient(id).unwrap();
    assert!(engine.ingredients().is_empty());
    assert!(matches!(
        engine.remove_ingredient(id),
        Err(EngineError::KeyNotFound(_))
    ));
}

#[test]
fn expense_boundary_rejects_negative_amounts() {
    let mut engine = Engine::new();
    let bad = Expense::new("typo", "Other", Money::new(-5_00), Utc::now());
    assert!(matches!(
        engine.add_expense(bad),
        Err(EngineError::InvalidAmount(_))
    ));
    assert!(engine.expenses().is_empty());
}

#[test]
fn sale_save_checks_the_total_invariant() {
    let mut engine = Engine::new();
    let date = Utc.with_ymd_and_hms(2026, 6, 1, 19, 0, 0).unwrap();
    let items = vec![
        SaleItem::new("Chicken Adobo", 3, Money::new(220_00)),
        SaleItem::new("Rice", 3, Money::new(35_00)),
    ];

    // Declared total disagrees with the items: rejected at save time.
    assert!(matches!(
        Sale::with_total(items.clone(), Money::new(700_00), date),
        Err(EngineError::MismatchedTotal { .. })
    ));

    let sale = Sale::with_total(items, Money::new(765_00), date).unwrap();
    engine.add_sale(sale).unwrap();
    assert_eq!(engine.sales()[0].total, Money::new(765_00));
}

#[test]
fn low_stock_scenario_from_the_dashboard() {
    let items = vec![
        ingredient("a", 5.0, 2_00, 10.0),
        ingredient("b", 20.0, 3_00, 10.0),
    ];
    let low = summary::low_stock(&items);
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "a");
    assert_eq!(summary::inventory_value(&items), Money::new(70_00));
}

#[test]
fn report_only_varies_with_the_clock() {
    let engine = Engine::with_sample_data();
    let snapshot = engine.snapshot();

    let morning = Utc.with_ymd_and_hms(2026, 6, 15, 8, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2026, 6, 16, 20, 0, 0).unwrap();

    let a = render_report(&snapshot, morning, "Reserved Restaurant");
    let b = render_report(&snapshot, morning, "Reserved Restaurant");
    let c = render_report(&snapshot, evening, "Reserved Restaurant");

    assert_eq!(a, b);
    assert_ne!(a, c);
    // Same document except for the embedded dates.
    assert_eq!(
        a.replace("June 15, 2026", "D"),
        c.replace("June 16, 2026", "D")
    );
}

#[test]
fn report_reflects_store_mutations() {
    let mut engine = Engine::with_sample_data();
    let clock = Utc.with_ymd_and_hms(2026, 6, 15, 8, 0, 0).unwrap();

    engine
        .add_ingredient(ingredient("Truffle Oil", 1.0, 95_00, 2.0))
        .unwrap();

    let html = render_report(&engine.snapshot(), clock, "Reserved Restaurant");
    assert!(html.contains("Truffle Oil"));
    assert!(html.contains("Inventory (9 items)"));
}

#[test]
fn sale_serde_round_trip_keeps_items_and_total() {
    let date = Utc.with_ymd_and_hms(2026, 6, 1, 19, 0, 0).unwrap();
    let sale = Sale::new(
        vec![
            SaleItem::new("Chicken Adobo", 2, Money::new(180_00)),
            SaleItem::new("Rice", 2, Money::new(25_00)),
        ],
        date,
    )
    .unwrap();

    let json = serde_json::to_string(&sale).unwrap();
    let back: Sale = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sale);
    assert_eq!(back.total, Money::new(410_00));
}

#[test]
fn ytd_summary_sums_monthly_stats() {
    let engine = Engine::with_sample_data();
    let totals = summary::period_totals(engine.monthly_stats());
    assert_eq!(totals.sales, Money::new(221_400_00));
    assert_eq!(totals.expenses, Money::new(123_000_00));
    assert_eq!(totals.profit, totals.sales - totals.expenses);
}
