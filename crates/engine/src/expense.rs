//! The module contains the `Expense` type, a single outgoing payment.
use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Money;

/// A recorded expense. The amount is always >= 0; the direction is implied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub category: String,
    pub amount: Money,
    pub date: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            category: category.into(),
            amount,
            date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.amount, self.description, self.category)
    }
}
