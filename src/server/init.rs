/**
 * Server Initialization
 *
 * Builds the Axum application from an already-connected database pool.
 * Taking the pool as an argument keeps the app constructible in tests with
 * an in-memory database; the real pool is wired up by `main` via
 * `server::config`.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::messages::MessageStore;
use crate::routes::create_router;
use crate::server::state::AppState;

/// Create and configure the Axum application.
pub fn create_app(pool: SqlitePool) -> Router<()> {
    let app_state = AppState {
        store: MessageStore::new(pool),
    };

    create_router(app_state)
}
