//! Order completion model.

use flowerdesk_core::completion::CompletionResponse;
use flowerdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `order_completions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderCompletion {
    pub id: DbId,
    pub order_id: DbId,
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
    pub note: Option<String>,
    pub photo_urls: Vec<String>,
    pub completed_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for recording a completion once photos have been stored.
#[derive(Debug, Clone)]
pub struct CreateOrderCompletion {
    pub order_id: DbId,
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
    pub note: Option<String>,
    pub photo_urls: Vec<String>,
}

impl From<OrderCompletion> for CompletionResponse {
    fn from(row: OrderCompletion) -> Self {
        Self {
            order_id: row.order_id,
            recipient_name: row.recipient_name,
            recipient_phone: row.recipient_phone,
            note: row.note,
            photo_urls: row.photo_urls,
            completed_at: row.completed_at,
        }
    }
}
