//! Store administration routes.

use axum::{Json, Router, extract::State, routing::post};
use tracing::warn;

use crate::{AppState, error::ApiError, routes::MessageResponse};

/// Creates the store administration routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/db/init", post(init_db))
}

/// POST `/db/init` - Drop and recreate all tables, seeding a zero income.
async fn init_db(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    warn!("Resetting store, all budget data will be discarded");
    budget_db::initialize(&state.db).await?;

    Ok(Json(MessageResponse::new("Database initialized successfully!")))
}
