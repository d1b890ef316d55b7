//! Budget tables migration.
//!
//! Creates the single-row `income` table and the `expenses` table.

use sea_orm_migration::prelude::*;

/// Creates the `income` and `expenses` tables.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INCOME_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS expenses;")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS income;").await?;
        Ok(())
    }
}

const INCOME_SQL: &str = r"
-- Logically a single row; see IncomeRepository::get_or_create
CREATE TABLE income (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount REAL NOT NULL DEFAULT 0.0
);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description VARCHAR(200) NOT NULL,
    amount REAL NOT NULL,
    category VARCHAR(100) NOT NULL
);
";
