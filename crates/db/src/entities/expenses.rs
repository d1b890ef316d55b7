//! `SeaORM` Entity for expenses table.

// Entity, Column, PrimaryKey and ActiveModel come from the SeaORM derives.
#![allow(missing_docs)]

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A row of the `expenses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Expense ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    /// Spending category.
    pub category: String,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for budget_core::budget::Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            amount: model.amount,
            category: model.category,
        }
    }
}
