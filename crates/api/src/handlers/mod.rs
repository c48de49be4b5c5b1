//! HTTP handlers, one module per resource.
//!
//! Every mutating handler follows the same pipeline: decode the body into a
//! candidate record, normalize its text fields, validate it, then hand it to
//! the repository.

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod video;

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_core::validation;
use uuid::Uuid;

use crate::error::AppResult;

/// Message returned when a create request carries its own `id`.
pub const CLIENT_ID_REJECTED: &str = "id is assigned by the server";

/// Parse a path identifier, reporting a malformed one as a validation error.
pub(crate) fn parse_id(raw: &str) -> AppResult<DbId> {
    Ok(validation::parse_id(raw)?)
}

/// Generate the identity for a new record.
///
/// Identities are always server-assigned; a non-empty client `id` is rejected.
pub(crate) fn assign_id(client_id: &str) -> AppResult<DbId> {
    if !client_id.is_empty() {
        return Err(CoreError::validation(CLIENT_ID_REJECTED).into());
    }
    Ok(Uuid::new_v4())
}

pub(crate) fn not_found(entity: &'static str, id: DbId) -> CoreError {
    CoreError::NotFound { entity, id }
}
