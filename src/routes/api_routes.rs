/**
 * API Route Handlers
 *
 * Wires the message endpoints onto the router:
 *
 * - `POST   /api/insertdata`      - insert a new message
 * - `GET    /api/getdata`         - fetch all messages
 * - `PUT    /api/updatedata/{id}` - replace a message's mutable fields
 * - `DELETE /api/deletedata/{id}` - delete a message (idempotent)
 * - `PATCH  /api/patchdata/{id}`  - update only the status flag
 */

use axum::Router;

use crate::messages::handlers::{
    delete_message, get_messages, insert_message, patch_message, update_message,
};
use crate::server::state::AppState;

/// Configure the data API routes.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/insertdata",
            axum::routing::post(insert_message),
        )
        .route(
            "/api/getdata",
            axum::routing::get(get_messages),
        )
        .route(
            "/api/updatedata/{id}",
            axum::routing::put(update_message),
        )
        .route(
            "/api/deletedata/{id}",
            axum::routing::delete(delete_message),
        )
        .route(
            "/api/patchdata/{id}",
            axum::routing::patch(patch_message),
        )
}
