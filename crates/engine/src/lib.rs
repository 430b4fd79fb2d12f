//! In-memory back-office engine: domain records, the session store, pure
//! aggregation, and report/export rendering.
//!
//! The [`Engine`] owns the canonical collections for the lifetime of one
//! interactive session. Mutations go through `ops` as pure replacement
//! steps; reads hand out [`ReportSnapshot`] borrows so aggregation and
//! rendering can never observe a half-applied change.
use chrono::Utc;
use uuid::Uuid;

pub use currency::Currency;
pub use error::EngineError;
pub use expense::Expense;
pub use ingredient::Ingredient;
pub use money::Money;
pub use report::{ReportSnapshot, render_report};
pub use sale::{Sale, SaleItem};
pub use stats::{DailyStats, MonthlyStats, PeriodStats};

mod currency;
mod error;
mod expense;
pub mod export;
mod ingredient;
mod money;
pub mod ops;
mod report;
mod sale;
pub mod seed;
mod stats;
pub mod summary;

pub type ResultEngine<T> = Result<T, EngineError>;

/// The session store. Owns every collection; nothing else mutates them.
#[derive(Debug, Default)]
pub struct Engine {
    ingredients: Vec<Ingredient>,
    expenses: Vec<Expense>,
    sales: Vec<Sale>,
    daily_stats: Vec<DailyStats>,
    monthly_stats: Vec<MonthlyStats>,
}

impl Engine {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the sample dataset.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self {
            ingredients: seed::ingredients(),
            expenses: seed::expenses(),
            sales: seed::sales(),
            daily_stats: seed::daily_stats(),
            monthly_stats: seed::monthly_stats(),
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn daily_stats(&self) -> &[DailyStats] {
        &self.daily_stats
    }

    pub fn monthly_stats(&self) -> &[MonthlyStats] {
        &self.monthly_stats
    }

    /// Read-only view for aggregation and report rendering.
    #[must_use]
    pub fn snapshot(&self) -> ReportSnapshot<'_> {
        ReportSnapshot {
            ingredients: &self.ingredients,
            expenses: &self.expenses,
            sales: &self.sales,
            monthly_stats: &self.monthly_stats,
        }
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> ResultEngine<()> {
        self.ingredients = ops::add_ingredient(&self.ingredients, ingredient)?;
        Ok(())
    }

    pub fn update_ingredient(&mut self, updated: Ingredient) -> ResultEngine<()> {
        self.ingredients = ops::update_ingredient(&self.ingredients, updated, Utc::now())?;
        Ok(())
    }

    pub fn remove_ingredient(&mut self, id: Uuid) -> ResultEngine<()> {
        self.ingredients = ops::remove_ingredient(&self.ingredients, id)?;
        Ok(())
    }

    pub fn add_expense(&mut self, expense: Expense) -> ResultEngine<()> {
        self.expenses = ops::add_expense(&self.expenses, expense)?;
        Ok(())
    }

    pub fn update_expense(&mut self, updated: Expense) -> ResultEngine<()> {
        self.expenses = ops::update_expense(&self.expenses, updated)?;
        Ok(())
    }

    pub fn remove_expense(&mut self, id: Uuid) -> ResultEngine<()> {
        self.expenses = ops::remove_expense(&self.expenses, id)?;
        Ok(())
    }

    pub fn add_sale(&mut self, sale: Sale) -> ResultEngine<()> {
        self.sales = ops::add_sale(&self.sales, sale)?;
        Ok(())
    }

    pub fn update_sale(&mut self, updated: Sale) -> ResultEngine<()> {
        self.sales = ops::update_sale(&self.sales, updated)?;
        Ok(())
    }

    pub fn remove_sale(&mut self, id: Uuid) -> ResultEngine<()> {
        self.sales = ops::remove_sale(&self.sales, id)?;
        Ok(())
    }
}
