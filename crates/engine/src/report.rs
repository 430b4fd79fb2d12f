//! Renders the printable back-office report.
//!
//! The renderer is a pure function: given a snapshot and a clock it always
//! produces the same document, byte for byte. Handing the document to a
//! viewer is the caller's concern.
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::{
    Currency, Expense, Ingredient, MonthlyStats, Sale,
    summary::{inventory_value, period_totals},
};

/// Read-only view over the store collections, as the renderer and the
/// aggregation functions see them.
#[derive(Clone, Copy, Debug)]
pub struct ReportSnapshot<'a> {
    pub ingredients: &'a [Ingredient],
    pub expenses: &'a [Expense],
    pub sales: &'a [Sale],
    pub monthly_stats: &'a [MonthlyStats],
}

const STYLE: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; padding: 40px; color: #333; }\n\
.header { text-align: center; margin-bottom: 40px; border-bottom: 3px solid #16a34a; padding-bottom: 20px; }\n\
.header h1 { color: #16a34a; font-size: 28px; margin-bottom: 5px; }\n\
.header p { color: #666; }\n\
.section { margin-bottom: 30px; page-break-inside: avoid; }\n\
.section h2 { color: #16a34a; font-size: 18px; margin-bottom: 15px; border-bottom: 1px solid #ddd; padding-bottom: 8px; }\n\
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }\n\
th, td { padding: 10px; text-align: left; border-bottom: 1px solid #eee; }\n\
th { background: #f8f9fa; font-weight: 600; color: #333; }\n\
.summary-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 15px; margin-bottom: 30px; }\n\
.summary-card { background: #f8f9fa; padding: 15px; border-radius: 8px; text-align: center; border-left: 4px solid #16a34a; }\n\
.summary-card h3 { color: #666; font-size: 12px; margin-bottom: 5px; }\n\
.summary-card p { color: #16a34a; font-size: 20px; font-weight: bold; }\n\
.low-stock { color: #dc2626; font-weight: 600; }\n\
.footer { text-align: center; margin-top: 40px; padding-top: 20px; border-top: 1px solid #ddd; color: #666; font-size: 12px; }\n\
@media print { body { padding: 20px; } .section { page-break-inside: avoid; } }\n";

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn summary_card(out: &mut String, title: &str, value: &str) {
    let _ = write!(
        out,
        "<div class=\"summary-card\"><h3>{title}</h3><p>{value}</p></div>"
    );
}

/// Renders the complete report as one self-contained HTML document.
///
/// The embedded generation date is the only input-independent part; pass a
/// fixed `generated_at` to get byte-identical output across calls.
#[must_use]
pub fn render_report(
    snapshot: &ReportSnapshot<'_>,
    generated_at: DateTime<Utc>,
    restaurant: &str,
) -> String {
    let currency = Currency::default();
    let date = generated_at.format("%B %-d, %Y").to_string();
    let ytd = period_totals(snapshot.monthly_stats);
    let stock_value = inventory_value(snapshot.ingredients);

    let mut out = String::with_capacity(16 * 1024);
    let name = escape(restaurant);

    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<title>{name} - Complete Report</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n"
    );
    let _ = write!(
        out,
        "<div class=\"header\"><h1>{name}</h1><p>Complete System Report - Generated on {date}</p></div>\n"
    );

    out.push_str("<div class=\"summary-grid\">");
    summary_card(&mut out, "Total Sales (YTD)", &ytd.sales.format(currency));
    summary_card(&mut out, "Total Expenses (YTD)", &ytd.expenses.format(currency));
    summary_card(&mut out, "Total Profit (YTD)", &ytd.profit.format(currency));
    summary_card(&mut out, "Inventory Value", &stock_value.format(currency));
    out.push_str("</div>\n");

    render_monthly_section(&mut out, snapshot.monthly_stats, currency);
    render_inventory_section(&mut out, snapshot.ingredients, currency);
    render_expenses_section(&mut out, snapshot.expenses, currency);
    render_sales_section(&mut out, snapshot.sales, currency);

    let _ = write!(
        out,
        "<div class=\"footer\"><p>{name} Management System</p><p>Report generated automatically on {date}</p></div>\n</body>\n</html>\n"
    );
    out
}

fn render_monthly_section(out: &mut String, stats: &[MonthlyStats], currency: Currency) {
    out.push_str(
        "<div class=\"section\"><h2>Monthly Performance</h2><table><thead><tr><th>Month</th><th>Sales</th><th>Expenses</th><th>Profit</th></tr></thead><tbody>\n",
    );
    for stat in stats {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&stat.month),
            stat.sales.format(currency),
            stat.expenses.format(currency),
            stat.profit.format(currency)
        );
    }
    out.push_str("</tbody></table></div>\n");
}

fn render_inventory_section(out: &mut String, ingredients: &[Ingredient], currency: Currency) {
    let _ = write!(
        out,
        "<div class=\"section\"><h2>Inventory ({} items)</h2><table><thead><tr><th>Item</th><th>Category</th><th>Quantity</th><th>Unit Price</th><th>Total Value</th><th>Status</th></tr></thead><tbody>\n",
        ingredients.len()
    );
    for item in ingredients {
        let (class, status) = if item.is_low_stock() {
            (" class=\"low-stock\"", "Low Stock")
        } else {
            ("", "OK")
        };
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{} {}</td><td>{}</td><td>{}</td><td{class}>{status}</td></tr>\n",
            escape(&item.name),
            escape(&item.category),
            item.quantity,
            escape(&item.unit),
            item.unit_price.format(currency),
            item.stock_value().format(currency)
        );
    }
    out.push_str("</tbody></table></div>\n");
}

fn render_expenses_section(out: &mut String, expenses: &[Expense], currency: Currency) {
    let _ = write!(
        out,
        "<div class=\"section\"><h2>Recent Expenses ({} records)</h2><table><thead><tr><th>Description</th><th>Category</th><th>Amount</th><th>Date</th></tr></thead><tbody>\n",
        expenses.len()
    );
    for expense in expenses {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&expense.description),
            escape(&expense.category),
            expense.amount.format(currency),
            expense.date.format("%m/%d/%Y")
        );
    }
    out.push_str("</tbody></table></div>\n");
}

fn render_sales_section(out: &mut String, sales: &[Sale], currency: Currency) {
    let _ = write!(
        out,
        "<div class=\"section\"><h2>Recent Sales ({} records)</h2><table><thead><tr><th>Items</th><th>Qty</th><th>Unit Price</th><th>Total</th><th>Date</th></tr></thead><tbody>\n",
        sales.len()
    );
    for sale in sales {
        let items = sale
            .items
            .iter()
            .map(|item| escape(&item.name))
            .collect::<Vec<_>>()
            .join("<br>");
        let quantities = sale
            .items
            .iter()
            .map(|item| item.quantity.to_string())
            .collect::<Vec<_>>()
            .join("<br>");
        let prices = sale
            .items
            .iter()
            .map(|item| item.unit_price.format(currency))
            .collect::<Vec<_>>()
            .join("<br>");
        let _ = write!(
            out,
            "<tr><td>{items}</td><td>{quantities}</td><td>{prices}</td><td>{}</td><td>{}</td></tr>\n",
            sale.total.format(currency),
            sale.date.format("%m/%d/%Y")
        );
    }
    out.push_str("</tbody></table></div>\n");
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{Money, SaleItem, seed};

    #[test]
    fn report_is_idempotent_under_fixed_clock() {
        let engine = crate::Engine::with_sample_data();
        let snapshot = engine.snapshot();
        let clock = Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap();

        let first = render_report(&snapshot, clock, "Reserved Restaurant");
        let second = render_report(&snapshot, clock, "Reserved Restaurant");
        assert_eq!(first, second);
    }

    #[test]
    fn report_contains_summary_and_sections() {
        let engine = crate::Engine::with_sample_data();
        let snapshot = engine.snapshot();
        let clock = Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap();

        let html = render_report(&snapshot, clock, "Reserved Restaurant");
        assert!(html.contains("Generated on June 15, 2026"));
        assert!(html.contains("Total Sales (YTD)"));
        assert!(html.contains("Monthly Performance"));
        assert!(html.contains(&format!("Inventory ({} items)", seed::ingredients().len())));
        assert!(html.contains("Recent Expenses"));
        assert!(html.contains("Recent Sales"));
    }

    #[test]
    fn report_flags_ingredients_at_or_below_threshold() {
        let clock = Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap();
        let ingredients = [
            Ingredient::new("Saffron", "Spices", 1.0, "kg", Money::new(400_00), 2.0, clock),
            Ingredient::new("Rice", "Dry Goods", 40.0, "kg", Money::new(2_50), 10.0, clock),
        ];
        let snapshot = ReportSnapshot {
            ingredients: &ingredients,
            expenses: &[],
            sales: &[],
            monthly_stats: &[],
        };

        let html = render_report(&snapshot, clock, "Reserved Restaurant");
        assert!(html.contains("Low Stock"));
        assert!(html.contains("class=\"low-stock\""));
        assert!(html.contains("OK"));
    }

    #[test]
    fn report_escapes_markup_in_names() {
        let date = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let sales = [Sale::new(
            vec![SaleItem::new("Fish & Chips <daily>", 1, Money::new(250_00))],
            date,
        )
        .unwrap()];
        let snapshot = ReportSnapshot {
            ingredients: &[],
            expenses: &[],
            sales: &sales,
            monthly_stats: &[],
        };
        let html = render_report(&snapshot, date, "Reserved Restaurant");
        assert!(html.contains("Fish &amp; Chips &lt;daily&gt;"));
        assert!(!html.contains("<daily>"));
    }
}
