//! Handlers for notices: public reads and admin management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use flowerdesk_core::error::CoreError;
use flowerdesk_core::notice::{validate_notice_content, validate_notice_title};
use flowerdesk_core::types::DbId;
use flowerdesk_db::models::notice::{CreateNotice, UpdateNotice};
use flowerdesk_db::repositories::NoticeRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Pagination query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found("Notice", id))
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/notices
///
/// Active notices, pinned first, then newest.
pub async fn list_notices(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let notices = NoticeRepo::list_active(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: notices }))
}

/// GET /api/notices/{id}
///
/// Read one active notice and count the view.
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let notice = NoticeRepo::record_view(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: notice }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/notices
///
/// Every notice, including inactive ones.
pub async fn list_all_notices(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let notices = NoticeRepo::list_all(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: notices }))
}

/// POST /api/admin/notices
pub async fn create_notice(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateNotice>,
) -> AppResult<impl IntoResponse> {
    validate_notice_title(&input.title).map_err(AppError::BadRequest)?;
    validate_notice_content(&input.content).map_err(AppError::BadRequest)?;

    let notice = NoticeRepo::create(&state.pool, &input).await?;

    tracing::info!(notice_id = notice.id, pinned = notice.is_pinned, "Notice created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: notice })))
}

/// PUT /api/admin/notices/{id}
pub async fn update_notice(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNotice>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_notice_title(title).map_err(AppError::BadRequest)?;
    }
    if let Some(ref content) = input.content {
        validate_notice_content(content).map_err(AppError::BadRequest)?;
    }

    let notice = NoticeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(notice_id = id, "Notice updated");

    Ok(Json(DataResponse { data: notice }))
}

/// DELETE /api/admin/notices/{id}
pub async fn delete_notice(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !NoticeRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(notice_id = id, "Notice deleted");

    Ok(StatusCode::NO_CONTENT)
}
