//! Typed errors and HTTP mapping.

use crate::response::MessageBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::error::ErrorKind;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure of a data-access operation.
#[derive(Error, Debug)]
pub enum RepoError {
    /// No row matched the identifier (zero rows affected).
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// The database rejected the values (constraint violation).
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Backend(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if matches!(
                db.kind(),
                ErrorKind::ForeignKeyViolation
                    | ErrorKind::CheckViolation
                    | ErrorKind::UniqueViolation
                    | ErrorKind::NotNullViolation
            ) {
                return RepoError::Validation(db.message().to_string());
            }
        }
        RepoError::Backend(err)
    }
}

/// How repository failures are reported over HTTP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Every failure is a 400 with the operation's static message.
    #[default]
    Compat,
    /// Failures keep their message but get a status matching their kind.
    Strict,
}

impl FromStr for ErrorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compat" => Ok(ErrorMode::Compat),
            "strict" => Ok(ErrorMode::Strict),
            _ => Err(ConfigError::InvalidValue {
                key: "ERROR_MODE",
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned by handlers: a status and a fixed `mensagem` for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub mensagem: &'static str,
}

impl ApiError {
    pub fn bad_request(mensagem: &'static str) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            mensagem,
        }
    }

    /// Map a repository failure; detail stays in the logs.
    pub fn from_repo(err: &RepoError, mode: ErrorMode, mensagem: &'static str) -> Self {
        let status = match mode {
            ErrorMode::Compat => StatusCode::BAD_REQUEST,
            ErrorMode::Strict => match err {
                RepoError::NotFound { .. } => StatusCode::NOT_FOUND,
                RepoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                RepoError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };
        ApiError { status, mensagem }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.mensagem))).into_response()
    }
}
