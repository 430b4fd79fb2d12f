//! The module contains the `Sale` type, one completed order with line items.
//!
//! Historically a sale was a single flat item (name/quantity/price). The
//! itemized shape is authoritative now; the flat shape only survives as the
//! [`Sale::single`] migration constructor.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Currency, EngineError, Money, ResultEngine};

/// One line of an order: `quantity × unit_price` of a menu item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl SaleItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// A completed order.
///
/// `total == Σ quantity × unit_price` over the items. The invariant is
/// established at construction time, not carried by the type: [`Sale::new`]
/// derives the total, [`Sale::with_total`] checks a caller-supplied one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    pub items: Vec<SaleItem>,
    pub total: Money,
    pub date: DateTime<Utc>,
}

impl Sale {
    /// Builds a sale from its line items, deriving the total.
    pub fn new(items: Vec<SaleItem>, date: DateTime<Utc>) -> ResultEngine<Self> {
        if items.is_empty() {
            return Err(EngineError::EmptySale);
        }
        let total = items
            .iter()
            .map(SaleItem::line_total)
            .try_fold(Money::ZERO, Money::checked_add)
            .ok_or_else(|| EngineError::InvalidAmount("sale total overflows".to_string()))?;
        Ok(Self {
            id: Uuid::new_v4(),
            items,
            total,
            date,
        })
    }

    /// Builds a sale with a caller-supplied total, rejecting a mismatch
    /// against the line items.
    pub fn with_total(
        items: Vec<SaleItem>,
        total: Money,
        date: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        let sale = Self::new(items, date)?;
        if sale.total != total {
            return Err(EngineError::MismatchedTotal {
                declared: total.format(Currency::default()),
                computed: sale.total.format(Currency::default()),
            });
        }
        Ok(sale)
    }

    /// Migrates the legacy flat shape (single item name/quantity/price) to an
    /// itemized sale.
    pub fn single(
        name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
        date: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        Self::new(vec![SaleItem::new(name, quantity, unit_price)], date)
    }

    /// Short human label: first item name plus a count of the others.
    #[must_use]
    pub fn label(&self) -> String {
        match self.items.as_slice() {
            [] => String::new(),
            [only] => only.name.clone(),
            [first, rest @ ..] => format!("{} +{}", first.name, rest.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_total_from_items() {
        let sale = Sale::new(
            vec![
                SaleItem::new("Margherita Pizza", 2, Money::new(280_00)),
                SaleItem::new("Iced Tea", 3, Money::new(45_00)),
            ],
            Utc::now(),
        )
        .unwrap();
        assert_eq!(sale.total, Money::new(695_00));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let items = vec![
            SaleItem::new("Too Big", 1, Money::new(i64::MAX)),
            SaleItem::new("One More", 1, Money::new(1)),
        ];
        let err = Sale::new(items, Utc::now()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }

    #[test]
    fn with_total_rejects_mismatch() {
        let items = vec![SaleItem::new("Halo-Halo", 2, Money::new(120_00))];
        let err = Sale::with_total(items, Money::new(100_00), Utc::now()).unwrap_err();
        assert!(matches!(err, EngineError::MismatchedTotal { .. }));
    }

    #[test]
    fn empty_sale_is_rejected() {
        assert_eq!(Sale::new(Vec::new(), Utc::now()), Err(EngineError::EmptySale));
    }

    #[test]
    fn single_migrates_flat_shape() {
        let sale = Sale::single("Crispy Pata", 1, Money::new(650_00), Utc::now()).unwrap();
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.total, Money::new(650_00));
        assert_eq!(sale.label(), "Crispy Pata");
    }
}
