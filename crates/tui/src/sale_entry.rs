//! Quick-entry grammar for sale line items.
//!
//! One order per form submit, line items separated by `;`:
//!
//! ```text
//! 2 x Margherita Pizza @ 280; 3 x Iced Tea @ 45
//! Caesar Salad @ 180
//! ```
//!
//! A missing quantity means 1. Prices are major units (`280` or `280.50`).
use engine::{Money, SaleItem};

pub fn parse_items(input: &str) -> Result<Vec<SaleItem>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter at least one line item.".to_string());
    }

    trimmed
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_item)
        .collect::<Result<Vec<_>, _>>()
        .and_then(|items| {
            if items.is_empty() {
                Err("Enter at least one line item.".to_string())
            } else {
                Ok(items)
            }
        })
}

fn parse_item(part: &str) -> Result<SaleItem, String> {
    let (left, price_raw) = part
        .rsplit_once('@')
        .ok_or_else(|| format!("Missing price in \"{part}\" (use: qty x name @ price)."))?;

    let unit_price: Money = price_raw
        .trim()
        .parse()
        .map_err(|_| format!("Invalid price \"{}\".", price_raw.trim()))?;
    if unit_price.is_negative() {
        return Err(format!("Invalid price \"{}\".", price_raw.trim()));
    }

    let (quantity, name) = match left.split_once(['x', 'X']) {
        Some((count, rest)) if count.trim().chars().all(|c| c.is_ascii_digit())
            && !count.trim().is_empty() =>
        {
            let quantity: u32 = count
                .trim()
                .parse()
                .map_err(|_| format!("Invalid quantity \"{}\".", count.trim()))?;
            (quantity, rest.trim())
        }
        _ => (1, left.trim()),
    };

    if quantity == 0 {
        return Err("Quantity must be > 0.".to_string());
    }
    if name.is_empty() {
        return Err(format!("Missing item name in \"{part}\"."));
    }

    Ok(SaleItem::new(name, quantity, unit_price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_items() {
        let items = parse_items("2 x Margherita Pizza @ 280; 3 x Iced Tea @ 45").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Margherita Pizza");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unit_price, Money::new(280_00));
        assert_eq!(items[1].quantity, 3);
    }

    #[test]
    fn quantity_defaults_to_one() {
        let items = parse_items("Caesar Salad @ 180.50").unwrap();
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].unit_price, Money::new(180_50));
    }

    #[test]
    fn name_containing_x_is_not_a_quantity() {
        let items = parse_items("Extra Rice @ 35").unwrap();
        assert_eq!(items[0].name, "Extra Rice");
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn rejects_missing_price_and_zero_quantity() {
        assert!(parse_items("Pizza").is_err());
        assert!(parse_items("0 x Pizza @ 280").is_err());
        assert!(parse_items("   ").is_err());
    }
}
