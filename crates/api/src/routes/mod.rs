pub mod auth;
pub mod categories;
pub mod completions;
pub mod diagnostics;
pub mod funerals;
pub mod health;
pub mod notices;
pub mod sms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/logout                                 logout (public, idempotent)
/// /auth/session                                current session (session)
///
/// /categories                                  mapping table
/// /categories/map                              map one label (?category)
///
/// /notices                                     list active
/// /notices/{id}                                get, counts a view
/// /admin/notices                               list all, create (admin key)
/// /admin/notices/{id}                          update, delete (admin key)
///
/// /funerals                                    list for session home
/// /funerals/rooms/{room_id}                    get, save, delete (session)
/// /obituaries/{funeral_home_id}/rooms/{room_id} public obituary
///
/// /orders/{order_id}/completion                get, submit (multipart)
///
/// /sms/send                                    send one message
///
/// /debug/checks                                typed diagnostics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/categories", categories::router())
        .nest("/notices", notices::router())
        .nest("/admin/notices", notices::admin_router())
        .nest("/funerals", funerals::router())
        .nest("/obituaries", funerals::obituary_router())
        .nest("/orders", completions::router())
        .nest("/sms", sms::router())
        .nest("/debug", diagnostics::router())
}
