//! Cast member row model.

use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `cast_members` table.
///
/// The `type` column holds the integer code of
/// [`catalog_core::cast_member::CastMemberType`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastMember {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
