//! Message record and request body types.

use serde::{Deserialize, Serialize};

/// A stored contact message.
///
/// The `id` is assigned by the allocator at insertion time and is immutable
/// afterwards; every other field is replaceable through the update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: bool,
}

/// Body of `POST /api/insertdata`. All fields are required; a body missing
/// any of them fails to decode and the request is rejected with 400.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: bool,
}

/// Body of `PUT /api/updatedata/{id}`.
///
/// This is a full replace of the four mutable fields, so fields absent from
/// the body fall back to their defaults rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: bool,
}

/// Body of `PATCH /api/patchdata/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPatch {
    pub status: bool,
}
