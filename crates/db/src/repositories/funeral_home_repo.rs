//! Repository for the `funeral_homes` table.

use flowerdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::funeral_home::{CreateFuneralHome, FuneralHome};

/// Column list for funeral_homes queries.
const COLUMNS: &str = "id, login_id, name, password_hash, is_active, created_at, updated_at";

/// Lookup and maintenance of funeral-home accounts.
pub struct FuneralHomeRepo;

impl FuneralHomeRepo {
    /// Register a funeral home.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFuneralHome,
    ) -> Result<FuneralHome, sqlx::Error> {
        let query = format!(
            "INSERT INTO funeral_homes (login_id, name, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FuneralHome>(&query)
            .bind(&input.login_id)
            .bind(&input.name)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a funeral home by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FuneralHome>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM funeral_homes WHERE id = $1");
        sqlx::query_as::<_, FuneralHome>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a funeral home by its login id.
    pub async fn find_by_login_id(
        pool: &PgPool,
        login_id: &str,
    ) -> Result<Option<FuneralHome>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM funeral_homes WHERE login_id = $1");
        sqlx::query_as::<_, FuneralHome>(&query)
            .bind(login_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a funeral home inactive. Returns `true` if the home exists.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE funeral_homes SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
