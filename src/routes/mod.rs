//! Route Configuration Module
//!
//! HTTP route wiring for the server.
//!
//! - **`router`** - Main router creation, CORS, fallback
//! - **`api_routes`** - Data API endpoint wiring

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
