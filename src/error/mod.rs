//! Error Module
//!
//! Error types for the HTTP handlers and their conversion to responses.
//!
//! - **`types`** - the `ApiError` taxonomy and status-code mapping
//! - **`conversion`** - `IntoResponse` so handlers can return `ApiError`

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
