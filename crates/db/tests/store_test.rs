//! Integration tests for the budget store.
//!
//! Each test runs against a throw-away SQLite file.

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tempfile::TempDir;

use budget_core::budget::NewExpense;
use budget_db::{
    ExpenseError, ExpenseRepository, IncomeRepository, connect, initialize,
    migration::Migrator, prepare,
};
use budget_shared::DatabaseConfig;

/// Opens a fresh database with the schema applied but no rows.
async fn setup() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = DatabaseConfig {
        url: format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("budget.db").display()
        ),
        ..DatabaseConfig::default()
    };
    let db = connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    (dir, db)
}

fn new_expense(description: &str, amount: f64, category: &str) -> NewExpense {
    NewExpense {
        description: description.to_string(),
        amount,
        category: category.to_string(),
    }
}

// ============================================================================
// Income
// ============================================================================

#[tokio::test]
async fn test_get_or_create_on_empty_store() {
    let (_dir, db) = setup().await;
    let repo = IncomeRepository::new(db.clone());

    assert!(repo.find().await.unwrap().is_none());

    let income = repo.get_or_create().await.unwrap();
    assert_eq!(income.amount, 0.0);
    assert_eq!(repo.count().await.unwrap(), 1);

    // second read does not create another row
    let again = repo.get_or_create().await.unwrap();
    assert_eq!(again.id, income.id);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_get_or_create_keeps_single_row() {
    let (_dir, db) = setup().await;

    let tasks = (0..8).map(|_| {
        let repo = IncomeRepository::new(db.clone());
        async move { repo.get_or_create().await }
    });
    let results = futures::future::join_all(tasks).await;

    for result in results {
        assert_eq!(result.unwrap().amount, 0.0);
    }
    assert_eq!(IncomeRepository::new(db).count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_set_amount_overwrites_and_keeps() {
    let (_dir, db) = setup().await;
    let repo = IncomeRepository::new(db);

    let income = repo.set_amount(Some(1500.5)).await.unwrap();
    assert_eq!(income.amount, 1500.5);
    assert_eq!(repo.get_or_create().await.unwrap().amount, 1500.5);

    let income = repo.set_amount(None).await.unwrap();
    assert_eq!(income.amount, 1500.5);

    let income = repo.set_amount(Some(-20.0)).await.unwrap();
    assert_eq!(income.amount, -20.0);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_set_amount_none_on_empty_store_creates_zero() {
    let (_dir, db) = setup().await;
    let repo = IncomeRepository::new(db);

    let income = repo.set_amount(None).await.unwrap();
    assert_eq!(income.amount, 0.0);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_set_amount_on_empty_store_inserts_requested_amount() {
    let (_dir, db) = setup().await;
    let repo = IncomeRepository::new(db);

    let income = repo.set_amount(Some(750.25)).await.unwrap();
    assert_eq!(income.amount, 750.25);
    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.find().await.unwrap(), Some(income));
}

// ============================================================================
// Expenses
// ============================================================================

#[tokio::test]
async fn test_create_and_list_in_id_order() {
    let (_dir, db) = setup().await;
    let repo = ExpenseRepository::new(db);

    let rent = repo
        .create(new_expense("Rent", 1200.0, "Housing"))
        .await
        .unwrap();
    let food = repo
        .create(new_expense("Groceries", 85.4, "Food"))
        .await
        .unwrap();
    assert!(food.id > rent.id);

    let all = repo.list().await.unwrap();
    assert_eq!(all, vec![rent.clone(), food]);

    let found = repo.find_by_id(rent.id).await.unwrap();
    assert_eq!(found, Some(rent));
}

#[tokio::test]
async fn test_delete_expense() {
    let (_dir, db) = setup().await;
    let repo = ExpenseRepository::new(db);

    let rent = repo
        .create(new_expense("Rent", 1200.0, "Housing"))
        .await
        .unwrap();
    let food = repo
        .create(new_expense("Groceries", 85.4, "Food"))
        .await
        .unwrap();

    repo.delete(rent.id.into()).await.unwrap();

    let all = repo.list().await.unwrap();
    assert_eq!(all, vec![food]);
    assert!(repo.find_by_id(rent.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_unknown_expense() {
    let (_dir, db) = setup().await;
    let repo = ExpenseRepository::new(db);

    let result = repo.delete(9999).await;
    assert!(matches!(result, Err(ExpenseError::NotFound(9999))));
}

#[tokio::test]
async fn test_delete_id_beyond_key_range() {
    let (_dir, db) = setup().await;
    let repo = ExpenseRepository::new(db);

    repo.create(new_expense("Rent", 1200.0, "Housing"))
        .await
        .unwrap();

    let result = repo.delete(4_294_967_297).await;
    assert!(matches!(
        result,
        Err(ExpenseError::NotFound(4_294_967_297))
    ));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_prepare_keeps_existing_data() {
    let (_dir, db) = setup().await;
    let expenses = ExpenseRepository::new(db.clone());
    let income = IncomeRepository::new(db.clone());

    income.set_amount(Some(900.0)).await.unwrap();
    expenses
        .create(new_expense("Bus pass", 60.0, "Transport"))
        .await
        .unwrap();

    let prepared = prepare(&db).await.unwrap();
    assert_eq!(prepared.amount, 900.0);
    assert_eq!(expenses.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_initialize_resets_store() {
    let (_dir, db) = setup().await;
    let expenses = ExpenseRepository::new(db.clone());
    let income = IncomeRepository::new(db.clone());

    income.set_amount(Some(900.0)).await.unwrap();
    expenses
        .create(new_expense("Bus pass", 60.0, "Transport"))
        .await
        .unwrap();

    let reset = initialize(&db).await.unwrap();
    assert_eq!(reset.amount, 0.0);
    assert_eq!(income.count().await.unwrap(), 1);
    assert!(expenses.list().await.unwrap().is_empty());

    // the recreated tables accept writes
    let coffee = expenses
        .create(new_expense("Coffee", 3.5, "Food"))
        .await
        .unwrap();
    assert_eq!(expenses.list().await.unwrap(), vec![coffee]);
}
