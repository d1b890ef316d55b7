//! Budget data types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::amount::coerce_amount;
use super::error::BudgetError;

/// Maximum length of an expense description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Maximum length of an expense category, in characters.
pub const CATEGORY_MAX_LEN: usize = 100;

/// The single tracked income value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Income {
    /// Income ID.
    pub id: i32,
    /// Total income.
    pub amount: f64,
}

/// A categorized spending entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: i32,
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    pub amount: f64,
    /// Spending category.
    pub category: String,
}

/// A validated expense ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    pub amount: f64,
    /// Spending category.
    pub category: String,
}

/// Raw expense input as received from a client.
///
/// Fields stay untyped until [`ExpenseDraft::validate`] so that a missing
/// field and a malformed one can be reported differently.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseDraft {
    /// Description, expected to be a string.
    pub description: Option<Value>,
    /// Amount, a number or a numeric string.
    pub amount: Option<Value>,
    /// Category, expected to be a string.
    pub category: Option<Value>,
}

impl ExpenseDraft {
    /// Validates the draft and coerces its amount.
    ///
    /// # Errors
    ///
    /// - `BudgetError::MissingData` if any field is absent or `null`
    /// - `BudgetError::InvalidField` if description or category is not a string
    /// - `BudgetError::TooLong` if description or category exceeds its limit
    /// - `BudgetError::InvalidAmount` if the amount is not numeric
    pub fn validate(self) -> Result<NewExpense, BudgetError> {
        let (Some(description), Some(amount), Some(category)) =
            (self.description, self.amount, self.category)
        else {
            return Err(BudgetError::MissingData);
        };

        let description = text_field("description", description, DESCRIPTION_MAX_LEN)?;
        let category = text_field("category", category, CATEGORY_MAX_LEN)?;
        let amount = coerce_amount(&amount)?;

        Ok(NewExpense {
            description,
            amount,
            category,
        })
    }
}

fn text_field(field: &'static str, value: Value, max: usize) -> Result<String, BudgetError> {
    let Value::String(text) = value else {
        return Err(BudgetError::InvalidField(field));
    };
    if text.chars().count() > max {
        return Err(BudgetError::TooLong { field, max });
    }
    Ok(text)
}

/// Raw income update as received from a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomeUpdate {
    /// New amount; absent or `null` keeps the stored value.
    pub amount: Option<Value>,
}

impl IncomeUpdate {
    /// Returns the requested amount, or `None` to keep the stored one.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidAmount` if an amount is given but not numeric.
    pub fn amount(&self) -> Result<Option<f64>, BudgetError> {
        self.amount.as_ref().map(coerce_amount).transpose()
    }
}
