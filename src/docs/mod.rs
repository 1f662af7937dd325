//! Documentation Pages
//!
//! Rendered HTML pages: the `/api/all` index and the 404 fallback.

/// Page rendering and handlers
pub mod pages;

// Re-export commonly used handlers
pub use pages::{api_index, not_found_page};
