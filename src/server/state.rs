/**
 * Application State Management
 *
 * `AppState` is the central state container for the Axum application. It
 * owns the one process-wide resource: the message store around the database
 * pool, constructed at startup and read-only afterwards. There is no other
 * shared mutable state; handlers run concurrently against the pool, which
 * is safe for concurrent use by the driver.
 *
 * The `FromRef` implementation lets handlers extract `MessageStore`
 * directly with `State(store)` instead of taking the whole `AppState`.
 */

use axum::extract::FromRef;

use crate::messages::MessageStore;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Store handle for the messages table.
    pub store: MessageStore,
}

impl FromRef<AppState> for MessageStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
