//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//! - Store lifecycle: [`connect`], [`prepare`] and [`initialize`]

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{ExpenseError, ExpenseRepository, IncomeRepository};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use budget_shared::DatabaseConfig;

use crate::entities::income;
use crate::migration::Migrator;

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(config.log_statements);

    Database::connect(options).await
}

/// Brings the schema up to date and makes sure the income row exists.
///
/// Safe to run on every start; existing data is kept.
///
/// # Errors
///
/// Returns an error if a migration or the income insert fails.
pub async fn prepare(db: &DatabaseConnection) -> Result<income::Model, DbErr> {
    Migrator::up(db, None).await?;
    let income = IncomeRepository::new(db.clone()).get_or_create().await?;
    info!(income_id = income.id, amount = income.amount, "Store prepared");
    Ok(income)
}

/// Rolls back every migration and re-applies it, dropping and recreating
/// every table, then inserts an income row with amount `0.0`.
///
/// Destructive: all expenses and the stored income are lost.
///
/// # Errors
///
/// Returns an error if the schema reset or the income insert fails.
pub async fn initialize(db: &DatabaseConnection) -> Result<income::Model, DbErr> {
    Migrator::refresh(db).await?;
    let income = IncomeRepository::new(db.clone()).get_or_create().await?;
    info!(income_id = income.id, "Store initialized");
    Ok(income)
}
