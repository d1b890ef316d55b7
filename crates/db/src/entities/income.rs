//! `SeaORM` Entity for income table.

// Entity, Column, PrimaryKey and ActiveModel come from the SeaORM derives.
#![allow(missing_docs)]

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A row of the `income` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "income")]
pub struct Model {
    /// Income ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Total income.
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for budget_core::budget::Income {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
        }
    }
}
