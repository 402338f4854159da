//! Route definitions for diagnostics.

use axum::routing::get;
use axum::Router;

use crate::handlers::diagnostics;
use crate::state::AppState;

/// Routes mounted at `/debug`.
pub fn router() -> Router<AppState> {
    Router::new().route("/checks", get(diagnostics::run_checks))
}
