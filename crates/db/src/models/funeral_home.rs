//! Funeral home (tenant) model.

use flowerdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `funeral_homes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FuneralHome {
    pub id: DbId,
    pub login_id: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a funeral home. `password_hash` is already bcrypt.
#[derive(Debug)]
pub struct CreateFuneralHome {
    pub login_id: String,
    pub name: String,
    pub password_hash: String,
}
