//! CSV export of the raw record lists.
//!
//! Companions to the printable report: plain tabular dumps for spreadsheets.
//! Writers are generic over `io::Write` so callers decide the destination
//! (file, buffer in tests).
use std::io;

use csv::Writer;

use crate::{Expense, Ingredient, ResultEngine, Sale};

pub fn write_inventory_csv<W: io::Write>(out: W, ingredients: &[Ingredient]) -> ResultEngine<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "name",
        "category",
        "quantity",
        "unit",
        "unit_price",
        "stock_value",
        "status",
        "last_updated",
    ])?;
    for item in ingredients {
        writer.write_record([
            item.name.as_str(),
            item.category.as_str(),
            &item.quantity.to_string(),
            item.unit.as_str(),
            &item.unit_price.to_decimal(),
            &item.stock_value().to_decimal(),
            if item.is_low_stock() { "low_stock" } else { "ok" },
            &item.last_updated.format("%Y/%m/%d").to_string(),
        ])?;
    }
    writer
        .flush()
        .map_err(|err| crate::EngineError::Export(err.to_string()))
}

pub fn write_expenses_csv<W: io::Write>(out: W, expenses: &[Expense]) -> ResultEngine<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(["description", "category", "amount", "date"])?;
    for expense in expenses {
        writer.write_record([
            expense.description.as_str(),
            expense.category.as_str(),
            &expense.amount.to_decimal(),
            &expense.date.format("%Y/%m/%d").to_string(),
        ])?;
    }
    writer
        .flush()
        .map_err(|err| crate::EngineError::Export(err.to_string()))
}

/// One CSV row per line item; the sale total repeats on each of its rows.
pub fn write_sales_csv<W: io::Write>(out: W, sales: &[Sale]) -> ResultEngine<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(["sale_id", "item", "quantity", "unit_price", "sale_total", "date"])?;
    for sale in sales {
        for item in &sale.items {
            writer.write_record([
                &sale.id.to_string(),
                item.name.as_str(),
                &item.quantity.to_string(),
                &item.unit_price.to_decimal(),
                &sale.total.to_decimal(),
                &sale.date.format("%Y/%m/%d").to_string(),
            ])?;
        }
    }
    writer
        .flush()
        .map_err(|err| crate::EngineError::Export(err.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{Money, SaleItem};

    #[test]
    fn inventory_csv_has_header_and_rows() {
        let date = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();
        let items = [Ingredient::new(
            "Tomatoes",
            "Vegetables",
            25.0,
            "kg",
            Money::new(3_50),
            10.0,
            date,
        )];
        let mut buffer = Vec::new();
        write_inventory_csv(&mut buffer, &items).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,category,quantity,unit,unit_price,stock_value,status,last_updated"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Tomatoes,Vegetables,25,kg,3.50,87.50,ok,2026/06/01"
        );
    }

    #[test]
    fn sales_csv_emits_one_row_per_line_item() {
        let date = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let sales = [Sale::new(
            vec![
                SaleItem::new("Pizza", 2, Money::new(280_00)),
                SaleItem::new("Tea", 3, Money::new(45_00)),
            ],
            date,
        )
        .unwrap()];
        let mut buffer = Vec::new();
        write_sales_csv(&mut buffer, &sales).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        // header + 2 line items
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Pizza,2,280.00,695.00,2026/06/01"));
    }
}
