//! Repository for the `notices` table.

use flowerdesk_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use flowerdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::notice::{CreateNotice, Notice, UpdateNotice};

/// Column list for notices queries.
const COLUMNS: &str = "id, title, content, is_active, is_pinned, view_count, created_by, \
    created_at, updated_at";

/// Provides CRUD operations for notices.
pub struct NoticeRepo;

impl NoticeRepo {
    /// Create a notice, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNotice) -> Result<Notice, sqlx::Error> {
        let query = format!(
            "INSERT INTO notices (title, content, is_active, is_pinned, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(input.title.trim())
            .bind(&input.content)
            .bind(input.is_active.unwrap_or(true))
            .bind(input.is_pinned.unwrap_or(false))
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a notice by id regardless of its active flag.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices WHERE id = $1");
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active notices, pinned first then newest.
    pub async fn list_active(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Notice>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM notices
             WHERE is_active = TRUE
             ORDER BY is_pinned DESC, created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List every notice, including inactive ones, newest first.
    pub async fn list_all(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Notice>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM notices
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Increment the view count of an active notice and return it.
    ///
    /// Returns `None` when the notice is missing or inactive.
    pub async fn record_view(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!(
            "UPDATE notices SET view_count = view_count + 1
             WHERE id = $1 AND is_active = TRUE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a notice by id, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotice,
    ) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!(
            "UPDATE notices SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                is_active = COALESCE($4, is_active),
                is_pinned = COALESCE($5, is_pinned)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.content)
            .bind(input.is_active)
            .bind(input.is_pinned)
            .fetch_optional(pool)
            .await
    }

    /// Delete a notice by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
