//! Per-period performance records (daily and monthly).
//!
//! `profit` is stored, not re-derived downstream: the constructors compute it
//! once (`sales - expenses`) so seeded data cannot disagree with itself, and
//! aggregation trusts the stored value from then on.
use serde::{Deserialize, Serialize};

use crate::Money;

/// Common view over a period record, used by `summary::period_totals`.
pub trait PeriodStats {
    fn sales(&self) -> Money;
    fn expenses(&self) -> Money;
    fn profit(&self) -> Money;
}

/// One day of totals, labeled by weekday ("Mon".."Sun").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: String,
    pub sales: Money,
    pub expenses: Money,
    pub profit: Money,
}

impl DailyStats {
    pub fn new(date: impl Into<String>, sales: Money, expenses: Money) -> Self {
        Self {
            date: date.into(),
            sales,
            expenses,
            profit: sales - expenses,
        }
    }
}

impl PeriodStats for DailyStats {
    fn sales(&self) -> Money {
        self.sales
    }

    fn expenses(&self) -> Money {
        self.expenses
    }

    fn profit(&self) -> Money {
        self.profit
    }
}

/// One month of totals, labeled by short month name ("Jan".."Dec").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub month: String,
    pub sales: Money,
    pub expenses: Money,
    pub profit: Money,
}

impl MonthlyStats {
    pub fn new(month: impl Into<String>, sales: Money, expenses: Money) -> Self {
        Self {
            month: month.into(),
            sales,
            expenses,
            profit: sales - expenses,
        }
    }
}

impl PeriodStats for MonthlyStats {
    fn sales(&self) -> Money {
        self.sales
    }

    fn expenses(&self) -> Money {
        self.expenses
    }

    fn profit(&self) -> Money {
        self.profit
    }
}
