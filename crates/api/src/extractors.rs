//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use budget_shared::AppError;

use crate::error::ApiError;

/// JSON body extractor that tolerates a missing body.
///
/// An empty body deserializes as `{}`. No `Content-Type` is required. Any
/// body that is not a JSON object is rejected with a validation error.
#[derive(Debug, Clone)]
pub struct JsonObject<T>(pub T);

impl<S, T> FromRequest<S> for JsonObject<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        parse_object(&bytes).map(JsonObject).map_err(ApiError::from)
    }
}

/// Path extractor whose rejection renders like every other API error.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(Self(value))
    }
}

fn parse_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value = if bytes.trim_ascii().is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::Validation(format!("Malformed JSON body: {e}")))?
    };

    if !value.is_object() {
        return Err(AppError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_core::budget::IncomeUpdate;

    #[test]
    fn test_empty_body_is_empty_object() {
        let update: IncomeUpdate = parse_object(b"").unwrap();
        assert!(update.amount.is_none());

        let update: IncomeUpdate = parse_object(b"  \n").unwrap();
        assert!(update.amount.is_none());
    }

    #[test]
    fn test_rejects_non_object() {
        let result = parse_object::<IncomeUpdate>(b"[1, 2]");
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = parse_object::<IncomeUpdate>(b"{not json");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
