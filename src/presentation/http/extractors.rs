// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::Value;

use super::error::HttpError;

/// Integer path parameter. Anything that does not parse as an integer is
/// rejected with 400 before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericId(pub i64);

impl<S> FromRequestParts<S> for NumericId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;

        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| {
                HttpError::bad_request(format!("path parameter must be an integer, got '{raw}'"))
            })
    }
}

/// JSON form body kept as a raw value so every field can be validated and
/// reported, including fields of the wrong type.
#[derive(Debug, Clone)]
pub struct FormPayload(pub Value);

impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;
        Ok(Self(value))
    }
}
