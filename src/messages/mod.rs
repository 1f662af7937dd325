//! Contact Messages
//!
//! Everything about the one domain entity: the record type, the store
//! wrapper around the database pool, the unique-ID allocator, and the HTTP
//! handlers for the five endpoints.
//!
//! # Module Structure
//!
//! ```text
//! messages/
//! ├── mod.rs       - Module exports
//! ├── model.rs     - Message record and request body types
//! ├── store.rs     - MessageStore database operations
//! ├── id.rs        - Unique-ID allocation
//! └── handlers.rs  - HTTP handlers
//! ```

/// Record and request body types
pub mod model;

/// Database operations
pub mod store;

/// Unique-ID allocation
pub mod id;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used types
pub use model::Message;
pub use store::MessageStore;
