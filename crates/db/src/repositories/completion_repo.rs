//! Repository for the `order_completions` table.

use flowerdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::completion::{CreateOrderCompletion, OrderCompletion};

/// Column list for order_completions queries.
const COLUMNS: &str = "id, order_id, recipient_name, recipient_phone, note, photo_urls, \
    completed_at, created_at";

/// Persistence for delivery confirmations.
pub struct CompletionRepo;

impl CompletionRepo {
    /// Record a completion; `completed_at` is assigned by the database.
    ///
    /// A second completion for the same order violates
    /// `uq_order_completions_order_id`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrderCompletion,
    ) -> Result<OrderCompletion, sqlx::Error> {
        let query = format!(
            "INSERT INTO order_completions
                (order_id, recipient_name, recipient_phone, note, photo_urls)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderCompletion>(&query)
            .bind(input.order_id)
            .bind(&input.recipient_name)
            .bind(&input.recipient_phone)
            .bind(&input.note)
            .bind(&input.photo_urls)
            .fetch_one(pool)
            .await
    }

    /// Find the completion of an order.
    pub async fn find_by_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Option<OrderCompletion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM order_completions WHERE order_id = $1");
        sqlx::query_as::<_, OrderCompletion>(&query)
            .bind(order_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an order already has a completion.
    pub async fn exists_for_order(pool: &PgPool, order_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM order_completions WHERE order_id = $1)",
        )
        .bind(order_id)
        .fetch_one(pool)
        .await
    }
}
