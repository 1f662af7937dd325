//! Server Module
//!
//! Server lifecycle: configuration loading, application state, and app
//! creation.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports
//! ├── state.rs   - AppState and FromRef implementations
//! ├── config.rs  - Environment configuration and database pool
//! └── init.rs    - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. `ServerConfig::from_env` reads the environment once
//! 2. `connect_database` builds the pool (10s timeout) and runs migrations
//! 3. `create_app` wraps the pool in `AppState` and assembles the router
//!
//! Any failure in steps 1-2 is fatal: the process aborts before serving.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{connect_database, ServerConfig, StartupError};
pub use init::create_app;
pub use state::AppState;
