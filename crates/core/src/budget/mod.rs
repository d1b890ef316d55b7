//! Income and expense tracking.

pub mod amount;
pub mod error;
pub mod types;


pub use amount::coerce_amount;
pub use error::BudgetError;
pub use types::{
    CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN, Expense, ExpenseDraft, Income, IncomeUpdate,
    NewExpense,
};
