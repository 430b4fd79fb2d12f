pub mod dashboard;
pub mod expenses;
pub mod inventory;
pub mod sales;
