//! Hard-coded sample dataset the store boots with.
//!
//! Dates are anchored to "now" so the dashboard's today/yesterday views stay
//! populated regardless of when the app runs.
use chrono::{DateTime, Duration, Utc};

use crate::{
    DailyStats, Expense, Ingredient, Money, MonthlyStats, ResultEngine, Sale, SaleItem,
};

/// Ingredient categories offered by the inventory form.
pub const INGREDIENT_CATEGORIES: &[&str] = &[
    "Vegetables",
    "Meat",
    "Seafood",
    "Dairy",
    "Dry Goods",
    "Oils",
    "Herbs",
    "Spices",
];

/// Expense categories offered by the expense form.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Ingredients",
    "Payroll",
    "Utilities",
    "Maintenance",
    "Marketing",
    "Other",
];

/// Units of measure offered by the inventory form.
pub const UNITS: &[&str] = &["kg", "liters", "pieces", "boxes", "bags"];

pub fn ingredients() -> Vec<Ingredient> {
    let now = Utc::now();
    let item = |name: &str, category: &str, quantity: f64, unit: &str, price: i64, min: f64| {
        Ingredient::new(name, category, quantity, unit, Money::new(price), min, now)
    };
    vec![
        item("Tomatoes", "Vegetables", 25.0, "kg", 3_50, 10.0),
        item("Olive Oil", "Oils", 15.0, "liters", 12_00, 5.0),
        item("Chicken Breast", "Meat", 30.0, "kg", 8_50, 15.0),
        item("Pasta", "Dry Goods", 50.0, "kg", 2_00, 20.0),
        item("Parmesan Cheese", "Dairy", 8.0, "kg", 25_00, 5.0),
        item("Garlic", "Vegetables", 5.0, "kg", 6_00, 3.0),
        item("Basil", "Herbs", 2.0, "kg", 15_00, 1.0),
        item("Salmon", "Seafood", 12.0, "kg", 22_00, 8.0),
    ]
}

pub fn expenses() -> Vec<Expense> {
    let now = Utc::now();
    let days = |n: i64| now - Duration::days(n);
    vec![
        Expense::new("Weekly vegetable supply", "Ingredients", Money::new(450_00), now),
        Expense::new("Kitchen equipment repair", "Maintenance", Money::new(150_00), days(1)),
        Expense::new("Staff salaries", "Payroll", Money::new(3_500_00), days(2)),
        Expense::new("Utility bills", "Utilities", Money::new(280_00), days(3)),
        Expense::new("Meat supplier payment", "Ingredients", Money::new(890_00), days(4)),
    ]
}

pub fn sales() -> Vec<Sale> {
    let now = Utc::now();
    let yesterday = now - Duration::days(1);
    let order = |items: Vec<SaleItem>, date: DateTime<Utc>| -> ResultEngine<Sale> {
        Sale::new(items, date)
    };

    // Sample data is structurally valid; constructor errors cannot happen.
    [
        order(
            vec![
                SaleItem::new("Margherita Pizza", 2, Money::new(280_00)),
                SaleItem::new("Pasta Carbonara", 1, Money::new(250_00)),
                SaleItem::new("Iced Tea", 3, Money::new(45_00)),
            ],
            now,
        ),
        order(
            vec![
                SaleItem::new("Grilled Salmon", 2, Money::new(450_00)),
                SaleItem::new("Caesar Salad", 2, Money::new(180_00)),
            ],
            now,
        ),
        order(
            vec![
                SaleItem::new("Chicken Adobo", 3, Money::new(220_00)),
                SaleItem::new("Rice", 3, Money::new(35_00)),
                SaleItem::new("Halo-Halo", 2, Money::new(120_00)),
            ],
            now,
        ),
        order(
            vec![
                SaleItem::new("Sinigang na Baboy", 1, Money::new(350_00)),
                SaleItem::new("Crispy Pata", 1, Money::new(650_00)),
            ],
            yesterday,
        ),
        order(
            vec![
                SaleItem::new("Tiramisu", 4, Money::new(180_00)),
                SaleItem::new("Coffee", 4, Money::new(85_00)),
            ],
            yesterday,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn daily_stats() -> Vec<DailyStats> {
    let day = |label: &str, sales: i64, expenses: i64| {
        DailyStats::new(label, Money::new(sales), Money::new(expenses))
    };
    vec![
        day("Mon", 1_250_00, 450_00),
        day("Tue", 1_480_00, 520_00),
        day("Wed", 1_320_00, 380_00),
        day("Thu", 1_650_00, 490_00),
        day("Fri", 2_100_00, 620_00),
        day("Sat", 2_450_00, 780_00),
        day("Sun", 1_890_00, 550_00),
    ]
}

pub fn monthly_stats() -> Vec<MonthlyStats> {
    let month = |label: &str, sales: i64, expenses: i64| {
        MonthlyStats::new(label, Money::new(sales), Money::new(expenses))
    };
    vec![
        month("Jan", 32_500_00, 18_200_00),
        month("Feb", 28_900_00, 16_500_00),
        month("Mar", 35_200_00, 19_800_00),
        month("Apr", 38_100_00, 21_200_00),
        month("May", 41_500_00, 22_800_00),
        month("Jun", 45_200_00, 24_500_00),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sales_totals_match_the_menu_prices() {
        let sales = sales();
        assert_eq!(sales.len(), 5);
        assert_eq!(sales[0].total, Money::new(945_00));
        assert_eq!(sales[1].total, Money::new(1_260_00));
        assert_eq!(sales[2].total, Money::new(1_005_00));
        assert_eq!(sales[3].total, Money::new(1_000_00));
        assert_eq!(sales[4].total, Money::new(1_060_00));
    }

    #[test]
    fn sample_records_use_catalog_categories() {
        assert!(
            ingredients()
                .iter()
                .all(|item| INGREDIENT_CATEGORIES.contains(&item.category.as_str()))
        );
        assert!(
            expenses()
                .iter()
                .all(|expense| EXPENSE_CATEGORIES.contains(&expense.category.as_str()))
        );
        assert!(ingredients().iter().all(|item| UNITS.contains(&item.unit.as_str())));
    }

    #[test]
    fn sample_stats_derive_profit() {
        let months = monthly_stats();
        assert_eq!(months[0].profit, Money::new(14_300_00));
        let days = daily_stats();
        assert_eq!(days[0].profit, Money::new(800_00));
    }
}
