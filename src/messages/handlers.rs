//! Message HTTP Handlers
//!
//! This module contains the HTTP handlers for the five message endpoints:
//! insert, get-all, update, delete and patch.
//!
//! Handlers decode the body, call the store (and the allocator, for
//! inserts), and shape the response. Decode failures are always 400: the
//! `Json` extractor rejection is taken explicitly so a type error in the
//! body cannot surface as axum's default 422.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;

use super::id;
use super::model::{Message, NewMessage, StatusPatch, UpdateMessage};
use super::store::MessageStore;

/// Insert a new message.
///
/// Allocates a fresh id, inserts the record, then re-reads it so the
/// response carries the canonical stored state.
pub async fn insert_message(
    State(store): State<MessageStore>,
    payload: Result<Json<NewMessage>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!("Failed to decode insert body: {}", e.body_text());
        ApiError::bad_request(e.body_text())
    })?;

    let record = Message {
        id: id::allocate(&store).await?,
        name: payload.name,
        email: payload.email,
        message: payload.message,
        status: payload.status,
    };

    store.insert(&record).await.map_err(|e| {
        tracing::error!("Failed to insert message: {:?}", e);
        ApiError::from(e)
    })?;

    // Re-read the inserted row and respond with what the store holds.
    let created = store
        .fetch(&record.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to re-read inserted message: {:?}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::from(sqlx::Error::RowNotFound))?;

    tracing::info!(id = %created.id, "message inserted");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch every message. An empty store yields an empty array, not an error.
pub async fn get_messages(
    State(store): State<MessageStore>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = store.fetch_all().await.map_err(|e| {
        tracing::error!("Failed to fetch messages: {:?}", e);
        ApiError::from(e)
    })?;

    tracing::debug!(count = messages.len(), "messages retrieved");
    Ok(Json(messages))
}

/// Replace all four mutable fields of a message.
///
/// Fields missing from the body are written as their defaults; this is a
/// full replace, not a merge. An id that matches nothing is 404 and nothing
/// is created.
pub async fn update_message(
    State(store): State<MessageStore>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMessage>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!("Failed to decode update body: {}", e.body_text());
        ApiError::bad_request(e.body_text())
    })?;

    let matched = store
        .update_full(
            &id,
            &payload.name,
            &payload.email,
            &payload.message,
            payload.status,
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to update message: {:?}", e);
            ApiError::from(e)
        })?;

    if matched == 0 {
        tracing::warn!(id = %id, "update target not found");
        return Err(ApiError::not_found(id));
    }

    let updated = fetch_existing(&store, &id).await?;
    tracing::info!(id = %id, "message updated");
    Ok(Json(updated))
}

/// Mutate only the status flag of a message. Same not-found semantics as
/// [`update_message`].
pub async fn patch_message(
    State(store): State<MessageStore>,
    Path(id): Path<String>,
    payload: Result<Json<StatusPatch>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!("Failed to decode patch body: {}", e.body_text());
        ApiError::bad_request(e.body_text())
    })?;

    let matched = store.update_status(&id, payload.status).await.map_err(|e| {
        tracing::error!("Failed to patch message status: {:?}", e);
        ApiError::from(e)
    })?;

    if matched == 0 {
        tracing::warn!(id = %id, "patch target not found");
        return Err(ApiError::not_found(id));
    }

    let updated = fetch_existing(&store, &id).await?;
    tracing::info!(id = %id, status = updated.status, "message status updated");
    Ok(Json(updated))
}

/// Delete a message by id.
///
/// Idempotent by contract: deleting an id that matches nothing still
/// reports success, unlike update and patch.
pub async fn delete_message(
    State(store): State<MessageStore>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let removed = store.delete(&id).await.map_err(|e| {
        tracing::error!("Failed to delete message: {:?}", e);
        ApiError::from(e)
    })?;

    tracing::info!(id = %id, removed, "message deleted");
    Ok("Data deleted successfully")
}

/// Re-fetch a row that a preceding UPDATE just matched. The row vanishing
/// between the two statements is a store error, not a not-found.
async fn fetch_existing(store: &MessageStore, id: &str) -> Result<Message, ApiError> {
    store
        .fetch(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to re-read updated message: {:?}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::from(sqlx::Error::RowNotFound))
}
