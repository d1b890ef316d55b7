//! Income repository for the single tracked income row.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
    TransactionTrait, sea_query::OnConflict,
};

use crate::entities::income;

/// Primary key used when this repository creates the income row.
pub const INCOME_ROW_ID: i32 = 1;

/// Income repository.
///
/// The `income` table holds at most one logical row: the one with the
/// lowest id.
#[derive(Debug, Clone)]
pub struct IncomeRepository {
    db: DatabaseConnection,
}

impl IncomeRepository {
    /// Creates a new income repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the income row without creating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find(&self) -> Result<Option<income::Model>, DbErr> {
        income::Entity::find()
            .order_by_asc(income::Column::Id)
            .one(&self.db)
            .await
    }

    /// Returns the income row, inserting one with amount `0.0` if the table
    /// is empty.
    ///
    /// This writes on read. The insert targets [`INCOME_ROW_ID`] and ignores
    /// conflicts, so concurrent callers never create a second row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or insert fails.
    pub async fn get_or_create(&self) -> Result<income::Model, DbErr> {
        if let Some(existing) = self.find().await? {
            return Ok(existing);
        }

        let row = income::ActiveModel {
            id: Set(INCOME_ROW_ID),
            amount: Set(0.0),
        };
        let inserted = income::Entity::insert(row)
            .on_conflict(
                OnConflict::column(income::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        if inserted > 0 {
            tracing::info!("Income row created with zero amount");
        }

        self.find()
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("income row missing after insert".to_string()))
    }

    /// Overwrites the income amount, creating the row if needed.
    ///
    /// `None` keeps the stored amount (or `0.0` for a freshly created row).
    /// The read and the write commit together.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert or update fails.
    pub async fn set_amount(&self, amount: Option<f64>) -> Result<income::Model, DbErr> {
        let txn = self.db.begin().await?;

        let current = income::Entity::find()
            .order_by_asc(income::Column::Id)
            .one(&txn)
            .await?;

        let income = match (current, amount) {
            (Some(current), None) => current,
            (Some(current), Some(amount)) => {
                let mut row: income::ActiveModel = current.into();
                row.amount = Set(amount);
                row.update(&txn).await?
            }
            (None, amount) => {
                let row = income::ActiveModel {
                    id: Set(INCOME_ROW_ID),
                    amount: Set(amount.unwrap_or(0.0)),
                };
                row.insert(&txn).await?
            }
        };

        txn.commit().await?;
        Ok(income)
    }

    /// Counts income rows. Exposed for invariant checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        income::Entity::find().count(&self.db).await
    }
}
