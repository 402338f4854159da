//! Handlers for delivery completions.
//!
//! A completion is submitted once per order as a multipart form. The whole
//! form is read and validated before any photo is written, and photos
//! written for a submission that then fails are removed again.

use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use flowerdesk_core::completion::{
    photo_extension, validate_completion, CompletionData, CompletionFormData, CompletionResponse,
    PhotoMeta,
};
use flowerdesk_core::error::CoreError;
use flowerdesk_core::types::DbId;
use flowerdesk_db::models::completion::CreateOrderCompletion;
use flowerdesk_db::repositories::CompletionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::StoredPhoto;

/// A photo field read from the form.
struct UploadedPhoto {
    meta: PhotoMeta,
    data: Bytes,
}

/// POST /api/orders/{order_id}/completion
///
/// Multipart fields: `recipient_name`, `recipient_phone`, `memo` (text) and
/// any number of `photos` (files).
pub async fn submit_completion(
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    // 1. Read the whole form.
    let mut form = CompletionFormData::default();
    let mut photos: Vec<UploadedPhoto> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "photos" => {
                let file_name = field.file_name().unwrap_or("photo").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read photo: {e}")))?;
                photos.push(UploadedPhoto {
                    meta: PhotoMeta {
                        file_name,
                        content_type,
                        size: data.len(),
                    },
                    data,
                });
            }
            "recipient_name" | "recipient_phone" | "memo" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read '{name}': {e}")))?;
                match name.as_str() {
                    "recipient_name" => form.recipient_name = text,
                    "recipient_phone" => form.recipient_phone = Some(text),
                    _ => form.memo = text,
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    // 2. Validate before touching storage.
    let metas: Vec<PhotoMeta> = photos.iter().map(|p| p.meta.clone()).collect();
    let data = validate_completion(CompletionData::from(form), &metas)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // 3. One completion per order.
    if CompletionRepo::exists_for_order(&state.pool, order_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Order {order_id} is already completed"
        ))));
    }

    // 4. Store photos.
    let mut stored: Vec<StoredPhoto> = Vec::with_capacity(photos.len());
    for photo in &photos {
        let extension = photo_extension(&photo.meta.content_type)
            .ok_or_else(|| AppError::InternalError("Unsupported photo type after validation".into()))?;
        match state
            .storage
            .store_completion_photo(order_id, extension, &photo.data)
            .await
        {
            Ok(s) => stored.push(s),
            Err(e) => {
                state.storage.discard(&stored).await;
                return Err(e.into());
            }
        }
    }

    // 5. Persist.
    let input = CreateOrderCompletion {
        order_id,
        recipient_name: data.recipient_name,
        recipient_phone: data.recipient_phone,
        note: data.note,
        photo_urls: stored.iter().map(|s| s.url.clone()).collect(),
    };
    let row = match CompletionRepo::create(&state.pool, &input).await {
        Ok(row) => row,
        Err(e) => {
            state.storage.discard(&stored).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        order_id,
        photo_count = row.photo_urls.len(),
        "Order completion recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CompletionResponse::from(row),
        }),
    ))
}

/// GET /api/orders/{order_id}/completion
pub async fn get_completion(
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = CompletionRepo::find_by_order(&state.pool, order_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("OrderCompletion", order_id)))?;
    Ok(Json(DataResponse {
        data: CompletionResponse::from(row),
    }))
}
