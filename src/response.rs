//! Response bodies shared by all handlers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// `{"mensagem": "..."}`, the body of every write response and every failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    pub mensagem: String,
}

impl MessageBody {
    pub fn new(mensagem: impl Into<String>) -> Self {
        MessageBody {
            mensagem: mensagem.into(),
        }
    }
}

pub fn message_ok(mensagem: &str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody::new(mensagem)))
}

/// Bare JSON array, no envelope.
pub fn list_ok<T: Serialize>(rows: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(rows))
}
