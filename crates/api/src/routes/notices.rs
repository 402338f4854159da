//! Route definitions for notices.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notices;
use crate::state::AppState;

/// Public routes mounted at `/notices`.
///
/// ```text
/// GET /       -> list_notices (?limit, offset)
/// GET /{id}   -> get_notice
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notices::list_notices))
        .route("/{id}", get(notices::get_notice))
}

/// Admin routes mounted at `/admin/notices`.
///
/// ```text
/// GET    /       -> list_all_notices
/// POST   /       -> create_notice
/// PUT    /{id}   -> update_notice
/// DELETE /{id}   -> delete_notice
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(notices::list_all_notices).post(notices::create_notice),
        )
        .route(
            "/{id}",
            put(notices::update_notice).delete(notices::delete_notice),
        )
}
