//! Video row model.

use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub opened: bool,
    pub rating: String,
    /// Running time in minutes.
    pub duration: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
