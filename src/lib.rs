//! Contactbox
//!
//! A contact-message CRUD backend: HTTP endpoints to create, list, update,
//! partially update and delete message records, plus a self-describing API
//! index page at `/api/all`.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, app creation
//! - **`routes`** - router assembly, CORS, fallback
//! - **`messages`** - the record type, store, ID allocator and handlers
//! - **`docs`** - rendered HTML pages (API index, 404)
//! - **`error`** - the `ApiError` taxonomy and response conversion

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Message records, store, allocator and handlers
pub mod messages;

/// Rendered documentation pages
pub mod docs;

/// Error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use messages::{Message, MessageStore};
pub use server::create_app;
