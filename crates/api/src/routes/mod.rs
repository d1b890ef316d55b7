//! API route definitions.

use axum::Router;
use serde::Serialize;

use crate::AppState;

pub mod database;
pub mod expenses;
pub mod health;
pub mod income;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(database::routes())
        .merge(income::routes())
        .merge(expenses::routes())
}

/// Plain acknowledgment body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human readable outcome.
    pub message: &'static str,
}

impl MessageResponse {
    /// Creates an acknowledgment with the given message.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
