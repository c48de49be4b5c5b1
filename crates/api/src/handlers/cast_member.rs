//! Handlers for the `/cast-members` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::cast_member::CastMemberRecord;
use catalog_core::normalize::Normalize;
use catalog_core::validation::{validate, Action};
use catalog_db::repositories::CastMemberRepo;

use super::{assign_id, not_found, parse_id};
use crate::error::AppResult;
use crate::response::{created, ok};
use crate::state::AppState;

/// POST /api/v1/cast-members
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CastMemberRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let id = assign_id(&input.id)?;
    let input = CastMemberRecord {
        id: id.to_string(),
        ..input
    }
    .normalize();
    validate(&input, Action::Create)?;

    let member = CastMemberRepo::create(&state.pool, id, &input).await?;
    tracing::info!(cast_member_id = %id, kind = member.kind, "Cast member created");
    Ok(created(member))
}

/// GET /api/v1/cast-members
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let members = CastMemberRepo::list(&state.pool).await?;
    Ok(ok(members))
}

/// GET /api/v1/cast-members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let member = CastMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("CastMember", id))?;
    Ok(ok(member))
}

/// PUT /api/v1/cast-members/{id}
///
/// Partial update: at least one of `name` or `type` must be supplied. A
/// supplied `type` is range-checked; the name is stored as given.
///
/// Name length is not re-validated here, so a name over 255 characters is
/// refused by the `VARCHAR(255)` column and surfaces as a 500, not a 422.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CastMemberRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let Json(input) = payload?;
    let input = CastMemberRecord { id: raw_id, ..input }.normalize();
    validate(&input, Action::Update)?;

    let member = CastMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found("CastMember", id))?;
    Ok(ok(member))
}

/// DELETE /api/v1/cast-members/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if !CastMemberRepo::soft_delete(&state.pool, id).await? {
        return Err(not_found("CastMember", id).into());
    }
    tracing::info!(cast_member_id = %id, "Cast member deleted");
    Ok(StatusCode::NO_CONTENT)
}
