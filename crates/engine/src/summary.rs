//! Pure aggregation over read-only snapshots.
//!
//! Every function here is deterministic and side-effect-free: it borrows an
//! ordered sequence of records and returns a derived value or a filtered
//! view. Empty input yields zero/empty output, never an error. Negative
//! quantities or prices are summed as-is; validation belongs to the store
//! boundary, not here.
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::{Expense, Ingredient, Money, Sale, stats::PeriodStats};

/// Ingredients at or below their reorder threshold, input order preserved.
#[must_use]
pub fn low_stock(ingredients: &[Ingredient]) -> Vec<&Ingredient> {
    ingredients.iter().filter(|i| i.is_low_stock()).collect()
}

/// Total value of the stock on hand: Σ quantity × unit price.
#[must_use]
pub fn inventory_value(ingredients: &[Ingredient]) -> Money {
    ingredients.iter().map(Ingredient::stock_value).sum()
}

/// Expense totals grouped by category.
///
/// Categories with no expenses simply do not appear (no zero-fill). The map
/// is ordered by category name so report sections render deterministically.
#[must_use]
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(Money::ZERO) += expense.amount;
    }
    totals
}

/// Sums over a sequence of period records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    pub sales: Money,
    pub expenses: Money,
    pub profit: Money,
}

/// Sums sales, expenses and profit independently across the records.
///
/// Profit is the stored per-period value, never recomputed from
/// `sales - expenses` here.
#[must_use]
pub fn period_totals<S: PeriodStats>(stats: &[S]) -> PeriodTotals {
    stats.iter().fold(PeriodTotals::default(), |mut acc, s| {
        acc.sales += s.sales();
        acc.expenses += s.expenses();
        acc.profit += s.profit();
        acc
    })
}

/// Record types that expose text fields for search.
pub trait TextSearch {
    /// The fields a substring query is matched against.
    fn text_fields(&self) -> Vec<&str>;
}

impl TextSearch for Ingredient {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.category]
    }
}

impl TextSearch for Expense {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.category]
    }
}

impl TextSearch for Sale {
    fn text_fields(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}

fn matches_needle<T: TextSearch>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record
            .text_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive substring filter over a record's text fields.
///
/// An empty (or whitespace-only) query matches everything.
#[must_use]
pub fn filter_by_text<'a, T: TextSearch>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| matches_needle(*record, &needle))
        .collect()
}

/// Positions of the matching records, for callers that track selection by
/// index into the unfiltered collection. Agrees with [`filter_by_text`].
#[must_use]
pub fn filter_indices<T: TextSearch>(records: &[T], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_needle(*record, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Units sold and revenue for one menu item, across all sales.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSales {
    pub name: String,
    pub sold: u32,
    pub revenue: Money,
}

/// Groups sale line items by name, summing quantity and revenue, sorted by
/// revenue descending (ties broken by name for determinism).
#[must_use]
pub fn top_products(sales: &[Sale]) -> Vec<ProductSales> {
    let mut by_name: HashMap<&str, (u32, Money)> = HashMap::new();
    for sale in sales {
        for item in &sale.items {
            let entry = by_name.entry(item.name.as_str()).or_insert((0, Money::ZERO));
            entry.0 += item.quantity;
            entry.1 += item.line_total();
        }
    }

    let mut products: Vec<ProductSales> = by_name
        .into_iter()
        .map(|(name, (sold, revenue))| ProductSales {
            name: name.to_string(),
            sold,
            revenue,
        })
        .collect();
    products.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.name.cmp(&b.name)));
    products
}

/// Total revenue and order count for one calendar day.
#[must_use]
pub fn sales_on(sales: &[Sale], day: NaiveDate) -> (Money, usize) {
    sales
        .iter()
        .filter(|sale| sale.date.date_naive() == day)
        .fold((Money::ZERO, 0), |(total, count), sale| {
            (total + sale.total, count + 1)
        })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::SaleItem;

    fn ingredient(name: &str, quantity: f64, price: i64, min_stock: f64) -> Ingredient {
        Ingredient::new(name, "Test", quantity, "kg", Money::new(price), min_stock, Utc::now())
    }

    #[test]
    fn low_stock_keeps_subset_in_order() {
        let items = vec![
            ingredient("a", 5.0, 100, 10.0),
            ingredient("b", 20.0, 100, 10.0),
            ingredient("c", 10.0, 100, 10.0),
        ];
        let low = low_stock(&items);
        let names: Vec<&str> = low.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn inventory_value_empty_is_zero() {
        assert_eq!(inventory_value(&[]), Money::ZERO);
    }

    #[test]
    fn inventory_value_scenario() {
        // 5 × 2 + 20 × 3 = 70 (major units)
        let items = vec![
            ingredient("a", 5.0, 2_00, 10.0),
            ingredient("b", 20.0, 3_00, 10.0),
        ];
        assert_eq!(inventory_value(&items), Money::new(70_00));
    }

    #[test]
    fn inventory_value_is_linear_under_concatenation() {
        let left = vec![ingredient("a", 3.0, 4_00, 1.0)];
        let right = vec![ingredient("b", 7.0, 2_50, 1.0), ingredient("c", 1.5, 6_00, 1.0)];
        let mut both = left.clone();
        both.extend(right.clone());
        assert_eq!(
            inventory_value(&both),
            inventory_value(&left) + inventory_value(&right)
        );
    }

    #[test]
    fn totals_by_category_groups_and_sums() {
        let now = Utc::now();
        let expenses = vec![
            Expense::new("x", "A", Money::new(10_00), now),
            Expense::new("y", "A", Money::new(5_00), now),
            Expense::new("z", "B", Money::new(2_00), now),
        ];
        let totals = totals_by_category(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["A"], Money::new(15_00));
        assert_eq!(totals["B"], Money::new(2_00));
    }

    #[test]
    fn period_totals_trusts_stored_profit() {
        // Stored profit deliberately disagrees with sales - expenses.
        let stats = vec![crate::MonthlyStats {
            month: "Jan".to_string(),
            sales: Money::new(100_00),
            expenses: Money::new(40_00),
            profit: Money::new(99_00),
        }];
        let totals = period_totals(&stats);
        assert_eq!(totals.profit, Money::new(99_00));
    }

    #[test]
    fn filter_empty_query_is_identity() {
        let items = vec![ingredient("Tomatoes", 1.0, 100, 1.0), ingredient("Basil", 1.0, 100, 1.0)];
        assert_eq!(filter_by_text(&items, "").len(), 2);
        assert_eq!(filter_by_text(&items, "   ").len(), 2);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let items = vec![ingredient("Tomatoes", 1.0, 100, 1.0)];
        let hits = filter_by_text(&items, "tom");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Tomatoes");
    }

    #[test]
    fn filter_matches_category_field() {
        let now = Utc::now();
        let expenses = vec![
            Expense::new("Weekly vegetable supply", "Ingredients", Money::new(1), now),
            Expense::new("Utility bills", "Utilities", Money::new(1), now),
        ];
        let hits = filter_by_text(&expenses, "UTIL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Utility bills");
    }

    #[test]
    fn filter_indices_agree_with_filter_by_text() {
        let items = vec![
            ingredient("Tomatoes", 1.0, 100, 1.0),
            ingredient("Basil", 1.0, 100, 1.0),
            ingredient("Cherry Tomatoes", 1.0, 100, 1.0),
        ];
        for query in ["", "   ", "toma", "BASIL", "rice"] {
            let by_ref: Vec<&str> = filter_by_text(&items, query)
                .iter()
                .map(|i| i.name.as_str())
                .collect();
            let by_idx: Vec<&str> = filter_indices(&items, query)
                .iter()
                .map(|&i| items[i].name.as_str())
                .collect();
            assert_eq!(by_ref, by_idx, "query {query:?}");
        }
    }

    #[test]
    fn top_products_groups_across_sales() {
        let date = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let sales = vec![
            Sale::new(
                vec![
                    SaleItem::new("Pizza", 2, Money::new(280_00)),
                    SaleItem::new("Tea", 3, Money::new(45_00)),
                ],
                date,
            )
            .unwrap(),
            Sale::new(vec![SaleItem::new("Pizza", 1, Money::new(280_00))], date).unwrap(),
        ];
        let top = top_products(&sales);
        assert_eq!(top[0].name, "Pizza");
        assert_eq!(top[0].sold, 3);
        assert_eq!(top[0].revenue, Money::new(840_00));
        assert_eq!(top[1].name, "Tea");
    }

    #[test]
    fn sales_on_counts_only_that_day() {
        let today = Utc.with_ymd_and_hms(2026, 6, 2, 13, 0, 0).unwrap();
        let yesterday = Utc.with_ymd_and_hms(2026, 6, 1, 13, 0, 0).unwrap();
        let sales = vec![
            Sale::single("Pizza", 1, Money::new(280_00), today).unwrap(),
            Sale::single("Tea", 2, Money::new(45_00), today).unwrap(),
            Sale::single("Salad", 1, Money::new(180_00), yesterday).unwrap(),
        ];
        let (total, orders) = sales_on(&sales, today.date_naive());
        assert_eq!(total, Money::new(370_00));
        assert_eq!(orders, 2);
    }
}
