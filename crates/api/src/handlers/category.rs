//! Handlers for the `/categories` resource.
//!
//! Categories have a single rule set: an update is validated exactly like a
//! create, so `name` must always be supplied.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::category::{validate_category, CategoryRecord};
use catalog_core::normalize::Normalize;
use catalog_db::repositories::CategoryRepo;

use super::{assign_id, not_found, parse_id};
use crate::error::AppResult;
use crate::response::{created, ok};
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CategoryRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let id = assign_id(&input.id)?;
    let input = CategoryRecord {
        id: id.to_string(),
        ..input
    }
    .normalize();
    validate_category(&input)?;

    let category = CategoryRepo::create(&state.pool, id, &input).await?;
    tracing::info!(category_id = %id, "Category created");
    Ok(created(category))
}

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(ok(categories))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Category", id))?;
    Ok(ok(category))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CategoryRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let Json(input) = payload?;
    let input = CategoryRecord { id: raw_id, ..input }.normalize();
    validate_category(&input)?;

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found("Category", id))?;
    Ok(ok(category))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if !CategoryRepo::soft_delete(&state.pool, id).await? {
        return Err(not_found("Category", id).into());
    }
    tracing::info!(category_id = %id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
