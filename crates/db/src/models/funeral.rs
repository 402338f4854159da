//! Funeral record model.

use flowerdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `funerals` table: one funeral held in one room.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Funeral {
    pub id: DbId,
    pub funeral_home_id: DbId,
    pub room_id: String,
    pub deceased_name: String,
    pub deceased_age: Option<i32>,
    pub chief_mourner: Option<String>,
    pub mourners: Vec<String>,
    pub religion: Option<String>,
    pub encoffin_at: Option<Timestamp>,
    pub departure_at: Option<Timestamp>,
    pub burial_place: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a funeral into a room. The home and room come from the
/// session and the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveFuneral {
    pub deceased_name: String,
    pub deceased_age: Option<i32>,
    pub chief_mourner: Option<String>,
    #[serde(default)]
    pub mourners: Vec<String>,
    pub religion: Option<String>,
    pub encoffin_at: Option<Timestamp>,
    pub departure_at: Option<Timestamp>,
    pub burial_place: Option<String>,
    pub notes: Option<String>,
}
