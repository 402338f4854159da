//! Route definitions for SMS.

use axum::routing::post;
use axum::Router;

use crate::handlers::sms;
use crate::state::AppState;

/// Routes mounted at `/sms`.
///
/// ```text
/// POST /send  -> send_sms
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/send", post(sms::send_sms))
}
