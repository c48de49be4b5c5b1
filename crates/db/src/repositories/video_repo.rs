//! Repository for the `videos` table.

use catalog_core::types::DbId;
use catalog_core::video::VideoRecord;
use sqlx::PgPool;

use crate::models::video::Video;
use crate::non_empty;

const COLUMNS: &str =
    "id, title, description, year_launched, opened, rating, duration, created_at, updated_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row. `opened` defaults to `false`.
    pub async fn create(pool: &PgPool, id: DbId, input: &VideoRecord) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (id, title, description, year_launched, opened, rating, duration)
             VALUES ($1, $2, $3, $4, COALESCE($5, FALSE), $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.year_launched)
            .bind(input.opened)
            .bind(&input.rating)
            .bind(input.duration)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos, most recently created first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos WHERE deleted_at IS NULL ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// Apply a partial update. Zero-valued fields keep their stored value.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VideoRecord,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                year_launched = COALESCE($4, year_launched),
                opened = COALESCE($5, opened),
                rating = COALESCE($6, rating),
                duration = COALESCE($7, duration)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(non_empty(&input.title))
            .bind(non_empty(&input.description))
            .bind((input.year_launched != 0).then_some(input.year_launched))
            .bind(input.opened)
            .bind(non_empty(&input.rating))
            .bind((input.duration != 0).then_some(input.duration))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a video by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE videos SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
