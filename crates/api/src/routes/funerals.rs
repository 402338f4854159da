//! Route definitions for funeral records and public obituaries.

use axum::routing::get;
use axum::Router;

use crate::handlers::funerals;
use crate::state::AppState;

/// Session-scoped routes mounted at `/funerals`.
///
/// ```text
/// GET    /                 -> list_funerals
/// GET    /rooms/{room_id}  -> get_funeral
/// PUT    /rooms/{room_id}  -> save_funeral
/// DELETE /rooms/{room_id}  -> delete_funeral
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(funerals::list_funerals)).route(
        "/rooms/{room_id}",
        get(funerals::get_funeral)
            .put(funerals::save_funeral)
            .delete(funerals::delete_funeral),
    )
}

/// Public routes mounted at `/obituaries`.
///
/// ```text
/// GET /{funeral_home_id}/rooms/{room_id}  -> get_obituary
/// ```
pub fn obituary_router() -> Router<AppState> {
    Router::new().route(
        "/{funeral_home_id}/rooms/{room_id}",
        get(funerals::get_obituary),
    )
}
