//! Repository for the `genres` table.

use catalog_core::genre::GenreRecord;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;
use crate::non_empty;

const COLUMNS: &str = "id, name, is_active, created_at, updated_at";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row. `is_active` defaults to `true`.
    pub async fn create(pool: &PgPool, id: DbId, input: &GenreRecord) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (id, name, is_active)
             VALUES ($1, $2, COALESCE($3, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE deleted_at IS NULL ORDER BY name");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Update a genre. Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GenreRecord,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!(
            "UPDATE genres SET
                name = COALESCE($2, name),
                is_active = COALESCE($3, is_active)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(non_empty(&input.name))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a genre by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE genres SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
