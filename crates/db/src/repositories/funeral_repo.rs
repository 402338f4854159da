//! Repository for the `funerals` table.
//!
//! Records are addressed by `(funeral_home_id, room_id)`; a room holds at
//! most one funeral at a time. Errors from Postgres are returned unchanged.

use flowerdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::funeral::{Funeral, SaveFuneral};

/// Column list for funerals queries.
const COLUMNS: &str = "id, funeral_home_id, room_id, deceased_name, deceased_age, \
    chief_mourner, mourners, religion, encoffin_at, departure_at, burial_place, notes, \
    created_at, updated_at";

/// CRUD facade over funeral records.
pub struct FuneralRepo;

impl FuneralRepo {
    /// Insert a funeral into a room, or replace the room's current record.
    pub async fn save_funeral(
        pool: &PgPool,
        funeral_home_id: DbId,
        room_id: &str,
        input: &SaveFuneral,
    ) -> Result<Funeral, sqlx::Error> {
        let query = format!(
            "INSERT INTO funerals
                (funeral_home_id, room_id, deceased_name, deceased_age, chief_mourner,
                 mourners, religion, encoffin_at, departure_at, burial_place, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT ON CONSTRAINT uq_funerals_home_room DO UPDATE SET
                deceased_name = EXCLUDED.deceased_name,
                deceased_age = EXCLUDED.deceased_age,
                chief_mourner = EXCLUDED.chief_mourner,
                mourners = EXCLUDED.mourners,
                religion = EXCLUDED.religion,
                encoffin_at = EXCLUDED.encoffin_at,
                departure_at = EXCLUDED.departure_at,
                burial_place = EXCLUDED.burial_place,
                notes = EXCLUDED.notes
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Funeral>(&query)
            .bind(funeral_home_id)
            .bind(room_id)
            .bind(input.deceased_name.trim())
            .bind(input.deceased_age)
            .bind(&input.chief_mourner)
            .bind(&input.mourners)
            .bind(&input.religion)
            .bind(input.encoffin_at)
            .bind(input.departure_at)
            .bind(&input.burial_place)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// All funerals of a home, ordered by room.
    pub async fn get_funerals_by_home(
        pool: &PgPool,
        funeral_home_id: DbId,
    ) -> Result<Vec<Funeral>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM funerals
             WHERE funeral_home_id = $1
             ORDER BY room_id ASC"
        );
        sqlx::query_as::<_, Funeral>(&query)
            .bind(funeral_home_id)
            .fetch_all(pool)
            .await
    }

    /// The funeral currently held in a room, if any.
    pub async fn get_funeral_by_room(
        pool: &PgPool,
        funeral_home_id: DbId,
        room_id: &str,
    ) -> Result<Option<Funeral>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM funerals
             WHERE funeral_home_id = $1 AND room_id = $2"
        );
        sqlx::query_as::<_, Funeral>(&query)
            .bind(funeral_home_id)
            .bind(room_id)
            .fetch_optional(pool)
            .await
    }

    /// Clear a room. Returns `true` if a record was deleted.
    pub async fn delete_funeral(
        pool: &PgPool,
        funeral_home_id: DbId,
        room_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM funerals WHERE funeral_home_id = $1 AND room_id = $2")
                .bind(funeral_home_id)
                .bind(room_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
