/**
 * Router Configuration
 *
 * Combines the data API routes, the documentation index, the 404 fallback
 * page and the CORS layer into the final Axum router.
 *
 * # Route Order
 *
 * 1. Data API routes (`/api/insertdata` etc.)
 * 2. Documentation index (`/api/all`)
 * 3. Fallback handler (rendered 404 page)
 */

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::docs::{api_index, not_found_page};
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
///
/// CORS is wide open on purpose: any origin, any method, any header, with
/// credentials allowed, matching the service's public-form use case.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/api/all", axum::routing::get(api_index));

    // Add the data API routes
    let router = configure_api_routes(router);

    // Fallback handler renders the 404 page for unmatched routes
    let router = router.fallback(not_found_page);

    router
        .layer(CorsLayer::very_permissive())
        .with_state(app_state)
}
