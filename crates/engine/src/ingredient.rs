//! The module contains the `Ingredient` type representing one stocked item.
use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Money;

/// A stocked ingredient with its reorder threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: Money,
    pub min_stock: f64,
    pub last_updated: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        unit_price: Money,
        min_stock: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            quantity,
            unit: unit.into(),
            unit_price,
            min_stock,
            last_updated: now,
        }
    }

    /// An ingredient is low on stock when the quantity is at or below the
    /// configured threshold.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Value of the current stock (quantity × unit price).
    #[must_use]
    pub fn stock_value(&self) -> Money {
        self.unit_price.scale(self.quantity)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.quantity, self.unit, self.name, self.unit_price
        )
    }
}
