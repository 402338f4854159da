//! Handlers for funeral records.
//!
//! Management routes are scoped to the funeral home in the session; the
//! obituary route is the public read used by the micro-site.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use flowerdesk_core::error::CoreError;
use flowerdesk_core::funeral::{validate_deceased_name, validate_room_id};
use flowerdesk_core::types::DbId;
use flowerdesk_db::models::funeral::{Funeral, SaveFuneral};
use flowerdesk_db::repositories::{FuneralHomeRepo, FuneralRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::session::FuneralSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Public obituary: the funeral plus the hosting home's name.
#[derive(Debug, Serialize)]
pub struct Obituary {
    pub funeral_home_name: String,
    pub funeral: Funeral,
}

fn room_not_found(room_id: &str) -> AppError {
    AppError::Core(CoreError::not_found("Funeral room", room_id))
}

/// GET /api/funerals
///
/// Every funeral of the session's home, ordered by room.
pub async fn list_funerals(
    FuneralSession(session): FuneralSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let funerals = FuneralRepo::get_funerals_by_home(&state.pool, session.funeral_home_id).await?;
    Ok(Json(DataResponse { data: funerals }))
}

/// GET /api/funerals/rooms/{room_id}
pub async fn get_funeral(
    FuneralSession(session): FuneralSession,
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let funeral = FuneralRepo::get_funeral_by_room(&state.pool, session.funeral_home_id, &room_id)
        .await?
        .ok_or_else(|| room_not_found(&room_id))?;
    Ok(Json(DataResponse { data: funeral }))
}

/// PUT /api/funerals/rooms/{room_id}
///
/// Create or replace the funeral held in a room.
pub async fn save_funeral(
    FuneralSession(session): FuneralSession,
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(input): Json<SaveFuneral>,
) -> AppResult<impl IntoResponse> {
    validate_room_id(&room_id).map_err(AppError::BadRequest)?;
    validate_deceased_name(&input.deceased_name).map_err(AppError::BadRequest)?;

    let funeral =
        FuneralRepo::save_funeral(&state.pool, session.funeral_home_id, &room_id, &input).await?;

    tracing::info!(
        funeral_home_id = session.funeral_home_id,
        room_id = %room_id,
        funeral_id = funeral.id,
        "Funeral saved"
    );

    Ok(Json(DataResponse { data: funeral }))
}

/// DELETE /api/funerals/rooms/{room_id}
pub async fn delete_funeral(
    FuneralSession(session): FuneralSession,
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted =
        FuneralRepo::delete_funeral(&state.pool, session.funeral_home_id, &room_id).await?;
    if !deleted {
        return Err(room_not_found(&room_id));
    }

    tracing::info!(
        funeral_home_id = session.funeral_home_id,
        room_id = %room_id,
        "Funeral deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/obituaries/{funeral_home_id}/rooms/{room_id}
///
/// Public obituary read. Inactive homes are hidden.
pub async fn get_obituary(
    State(state): State<AppState>,
    Path((funeral_home_id, room_id)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let home = FuneralHomeRepo::find_by_id(&state.pool, funeral_home_id)
        .await?
        .filter(|h| h.is_active)
        .ok_or_else(|| AppError::Core(CoreError::not_found("FuneralHome", funeral_home_id)))?;

    let funeral = FuneralRepo::get_funeral_by_room(&state.pool, home.id, &room_id)
        .await?
        .ok_or_else(|| room_not_found(&room_id))?;

    Ok(Json(DataResponse {
        data: Obituary {
            funeral_home_name: home.name,
            funeral,
        },
    }))
}
