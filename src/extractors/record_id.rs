//! Extract a persisted record id from the single path parameter.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

/// A positive identifier taken from `/:idCliente`-style routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordId(pub i32);

/// Path segment missing, non-numeric, or not a persisted id (`<= 0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRecordId(pub String);

impl IntoResponse for InvalidRecordId {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, format!("invalid id: {}", self.0)).into_response()
    }
}

impl RecordId {
    pub fn parse(raw: &str) -> Result<Self, InvalidRecordId> {
        match raw.trim().parse::<i32>() {
            Ok(n) if n > 0 => Ok(RecordId(n)),
            _ => Err(InvalidRecordId(raw.to_string())),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = InvalidRecordId;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| InvalidRecordId(e.body_text()))?;
        RecordId::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::RecordId;

    #[test]
    fn parses_positive_ids_only() {
        assert_eq!(RecordId::parse("42"), Ok(RecordId(42)));
        assert_eq!(RecordId::parse(" 7 "), Ok(RecordId(7)));
        assert!(RecordId::parse("0").is_err());
        assert!(RecordId::parse("-3").is_err());
        assert!(RecordId::parse("abc").is_err());
        assert!(RecordId::parse("99999999999").is_err());
    }
}
