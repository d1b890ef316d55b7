//! Expense routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};
use tracing::{debug, info};

use budget_core::budget::{Expense, ExpenseDraft};
use budget_db::ExpenseRepository;

use crate::{
    AppState,
    error::ApiError,
    extractors::{JsonObject, PathParam},
    routes::MessageResponse,
};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

/// GET `/expenses` - List all expenses in ascending id order.
async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    let repo = ExpenseRepository::new((*state.db).clone());
    let expenses: Vec<Expense> = repo.list().await?.into_iter().map(Expense::from).collect();
    debug!(count = expenses.len(), "Expenses listed");

    Ok(Json(expenses))
}

/// POST `/expenses` - Create an expense.
async fn create_expense(
    State(state): State<AppState>,
    JsonObject(payload): JsonObject<ExpenseDraft>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let input = payload.validate()?;

    let repo = ExpenseRepository::new((*state.db).clone());
    let expense = Expense::from(repo.create(input).await?);
    info!(
        expense_id = expense.id,
        amount = expense.amount,
        category = %expense.category,
        "Expense created"
    );

    Ok((StatusCode::CREATED, Json(expense)))
}

/// DELETE `/expenses/{id}` - Delete an expense.
async fn delete_expense(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ExpenseRepository::new((*state.db).clone());
    repo.delete(id).await?;
    info!(expense_id = id, "Expense deleted");

    Ok(Json(MessageResponse::new("Expense deleted successfully!")))
}
