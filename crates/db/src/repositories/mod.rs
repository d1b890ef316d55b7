//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod expense;
pub mod income;

pub use expense::{ExpenseError, ExpenseRepository};
pub use income::{INCOME_ROW_ID, IncomeRepository};
