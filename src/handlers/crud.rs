//! Generic CRUD handlers. Each entity plugs in through `Resource`.

use crate::error::ApiError;
use crate::extractors::{InvalidRecordId, RecordId};
use crate::model::Entity;
use crate::repository::Repository;
use crate::response::{list_ok, message_ok};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client-facing messages for one entity. "failed" is used when the repository reports
/// an error; "rejected" when the request cannot even be parsed.
#[derive(Debug)]
pub struct Messages {
    pub list_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub create_rejected: &'static str,
    pub removed: &'static str,
    pub remove_failed: &'static str,
    pub remove_rejected: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub update_rejected: &'static str,
}

pub trait Resource: Entity + Serialize {
    type Dto: DeserializeOwned + Send + 'static;

    const MESSAGES: Messages;

    fn from_dto(dto: Self::Dto) -> Self;

    fn repository(state: &AppState) -> Arc<dyn Repository<Self>>;
}

pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let msgs = R::MESSAGES;
    match R::repository(&state).list().await {
        Ok(rows) => Ok(list_ok(rows)),
        Err(e) => {
            tracing::error!(entity = R::NAME, error = %e, "list failed");
            Err(ApiError::from_repo(&e, state.error_mode, msgs.list_failed))
        }
    }
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<R::Dto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let msgs = R::MESSAGES;
    let Json(dto) = body.map_err(|e| {
        tracing::warn!(entity = R::NAME, error = %e.body_text(), "create: unreadable body");
        ApiError::bad_request(msgs.create_rejected)
    })?;
    let entity = R::from_dto(dto);
    match R::repository(&state).create(&entity).await {
        Ok(id) => {
            tracing::info!(entity = R::NAME, id, "created");
            Ok(message_ok(msgs.created))
        }
        Err(e) => {
            tracing::error!(entity = R::NAME, error = %e, "create failed");
            Err(ApiError::from_repo(&e, state.error_mode, msgs.create_failed))
        }
    }
}

pub async fn remove<R: Resource>(
    State(state): State<AppState>,
    id: Result<RecordId, InvalidRecordId>,
) -> Result<impl IntoResponse, ApiError> {
    let msgs = R::MESSAGES;
    let RecordId(id) = id.map_err(|e| {
        tracing::warn!(entity = R::NAME, raw = %e.0, "remove: invalid id");
        ApiError::bad_request(msgs.remove_rejected)
    })?;
    match R::repository(&state).remove(id).await {
        Ok(()) => {
            tracing::info!(entity = R::NAME, id, "removed");
            Ok(message_ok(msgs.removed))
        }
        Err(e) => {
            tracing::warn!(entity = R::NAME, id, error = %e, "remove failed");
            Err(ApiError::from_repo(&e, state.error_mode, msgs.remove_failed))
        }
    }
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    id: Result<RecordId, InvalidRecordId>,
    body: Result<Json<R::Dto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let msgs = R::MESSAGES;
    let RecordId(id) = id.map_err(|e| {
        tracing::warn!(entity = R::NAME, raw = %e.0, "update: invalid id");
        ApiError::bad_request(msgs.update_rejected)
    })?;
    let Json(dto) = body.map_err(|e| {
        tracing::warn!(entity = R::NAME, id, error = %e.body_text(), "update: unreadable body");
        ApiError::bad_request(msgs.update_rejected)
    })?;
    let mut entity = R::from_dto(dto);
    entity.set_id(id);
    match R::repository(&state).update(&entity).await {
        Ok(()) => {
            tracing::info!(entity = R::NAME, id, "updated");
            Ok(message_ok(msgs.updated))
        }
        Err(e) => {
            tracing::warn!(entity = R::NAME, id, error = %e, "update failed");
            Err(ApiError::from_repo(&e, state.error_mode, msgs.update_failed))
        }
    }
}
