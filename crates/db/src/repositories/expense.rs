//! Expense repository for expense database operations.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set,
};

use budget_core::budget::NewExpense;
use budget_shared::AppError;

use crate::entities::expenses;

/// Error types for expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// Expense not found.
    #[error("Expense not found: {0}")]
    NotFound(i64),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(_) => Self::NotFound("Expense not found".to_string()),
            ExpenseError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Expense repository for create, list and delete operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all expenses in ascending id order, which is insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<expenses::Model>, ExpenseError> {
        let expenses = expenses::Entity::find()
            .order_by_asc(expenses::Column::Id)
            .all(&self.db)
            .await?;
        Ok(expenses)
    }

    /// Finds an expense by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<expenses::Model>, ExpenseError> {
        let expense = expenses::Entity::find_by_id(id).one(&self.db).await?;
        Ok(expense)
    }

    /// Persists a validated expense and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: NewExpense) -> Result<expenses::Model, ExpenseError> {
        let expense = expenses::ActiveModel {
            id: NotSet,
            description: Set(input.description),
            amount: Set(input.amount),
            category: Set(input.category),
        };

        let result = expense.insert(&self.db).await?;
        Ok(result)
    }

    /// Deletes an expense by id.
    ///
    /// Ids outside the key range cannot exist and are reported as not found.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if no expense has this id.
    pub async fn delete(&self, id: i64) -> Result<(), ExpenseError> {
        let Ok(key) = i32::try_from(id) else {
            return Err(ExpenseError::NotFound(id));
        };
        let result = expenses::Entity::delete_by_id(key).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(ExpenseError::NotFound(id));
        }
        Ok(())
    }
}
