//! Repository for the `cast_members` table.

use catalog_core::cast_member::CastMemberRecord;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::cast_member::CastMember;
use crate::non_empty;

const COLUMNS: &str = "id, name, type, created_at, updated_at";

/// Provides CRUD operations for cast members.
pub struct CastMemberRepo;

impl CastMemberRepo {
    pub async fn create(
        pool: &PgPool,
        id: DbId,
        input: &CastMemberRecord,
    ) -> Result<CastMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO cast_members (id, name, type)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CastMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.kind)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CastMember>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cast_members WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, CastMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<CastMember>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cast_members WHERE deleted_at IS NULL ORDER BY name");
        sqlx::query_as::<_, CastMember>(&query).fetch_all(pool).await
    }

    /// Update a cast member. An empty name or a zero type keeps the stored value.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CastMemberRecord,
    ) -> Result<Option<CastMember>, sqlx::Error> {
        let query = format!(
            "UPDATE cast_members SET
                name = COALESCE($2, name),
                type = COALESCE($3, type)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CastMember>(&query)
            .bind(id)
            .bind(non_empty(&input.name))
            .bind((input.kind != 0).then_some(input.kind))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a cast member by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cast_members SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
