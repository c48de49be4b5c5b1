//! Repository for the `categories` table.

use catalog_core::category::CategoryRecord;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::non_empty;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category under a server-assigned `id`, returning the created row.
    ///
    /// If `is_active` is `None` in the input, defaults to `true`.
    pub async fn create(
        pool: &PgPool,
        id: DbId,
        input: &CategoryRecord,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, name, description, is_active)
             VALUES ($1, $2, $3, COALESCE($4, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(non_empty(&input.description))
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by name. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE deleted_at IS NULL ORDER BY name");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Update a category. Empty text fields and `None` flags keep their stored value.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoryRecord,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(non_empty(&input.name))
            .bind(non_empty(&input.description))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a category by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE categories SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
