//! Income routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::{debug, info};

use budget_core::budget::{Income, IncomeUpdate};
use budget_db::IncomeRepository;

use crate::{AppState, error::ApiError, extractors::JsonObject};

/// Creates the income routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/income", get(get_income).post(set_income))
}

/// Response for reading the income.
#[derive(Debug, Serialize)]
pub struct IncomeResponse {
    /// Current income amount.
    pub amount: f64,
}

/// Response for updating the income.
#[derive(Debug, Serialize)]
pub struct IncomeUpdatedResponse {
    /// Confirmation message.
    pub message: &'static str,
    /// Income amount after the update.
    pub amount: f64,
}

/// GET `/income` - Read the income, creating it with amount 0 if absent.
async fn get_income(State(state): State<AppState>) -> Result<Json<IncomeResponse>, ApiError> {
    let repo = IncomeRepository::new((*state.db).clone());
    let income = Income::from(repo.get_or_create().await?);
    debug!(amount = income.amount, "Income read");

    Ok(Json(IncomeResponse {
        amount: income.amount,
    }))
}

/// POST `/income` - Overwrite the income; an omitted amount keeps the current one.
async fn set_income(
    State(state): State<AppState>,
    JsonObject(payload): JsonObject<IncomeUpdate>,
) -> Result<Json<IncomeUpdatedResponse>, ApiError> {
    let amount = payload.amount()?;

    let repo = IncomeRepository::new((*state.db).clone());
    let income = repo.set_amount(amount).await?;
    info!(amount = income.amount, "Income updated");

    Ok(Json(IncomeUpdatedResponse {
        message: "Income updated successfully!",
        amount: income.amount,
    }))
}
