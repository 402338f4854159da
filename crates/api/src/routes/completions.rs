//! Route definitions for order completions.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use flowerdesk_core::completion::{MAX_COMPLETION_PHOTOS, MAX_PHOTO_BYTES};

use crate::handlers::completions;
use crate::state::AppState;

/// Headroom for text fields and multipart framing on top of the photos.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET  /{order_id}/completion  -> get_completion
/// POST /{order_id}/completion  -> submit_completion (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{order_id}/completion",
            get(completions::get_completion).post(completions::submit_completion),
        )
        .layer(DefaultBodyLimit::max(
            MAX_COMPLETION_PHOTOS * MAX_PHOTO_BYTES + FORM_OVERHEAD_BYTES,
        ))
}
