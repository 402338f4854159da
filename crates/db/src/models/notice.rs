//! Notice model.

use flowerdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notices` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notice {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub is_active: bool,
    pub is_pinned: bool,
    pub view_count: i64,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a notice.
#[derive(Debug, Deserialize)]
pub struct CreateNotice {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub is_active: Option<bool>,
    pub is_pinned: Option<bool>,
    pub created_by: Option<String>,
}

/// DTO for updating a notice. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNotice {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_active: Option<bool>,
    pub is_pinned: Option<bool>,
}
