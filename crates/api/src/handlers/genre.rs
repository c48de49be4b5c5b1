//! Handlers for the `/genres` resource.
//!
//! Genres have a single rule set: an update is validated exactly like a
//! create, so `name` must always be supplied.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::genre::{validate_genre, GenreRecord};
use catalog_core::normalize::Normalize;
use catalog_db::repositories::GenreRepo;

use super::{assign_id, not_found, parse_id};
use crate::error::AppResult;
use crate::response::{created, ok};
use crate::state::AppState;

/// POST /api/v1/genres
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<GenreRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let id = assign_id(&input.id)?;
    let input = GenreRecord {
        id: id.to_string(),
        ..input
    }
    .normalize();
    validate_genre(&input)?;

    let genre = GenreRepo::create(&state.pool, id, &input).await?;
    tracing::info!(genre_id = %id, "Genre created");
    Ok(created(genre))
}

/// GET /api/v1/genres
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(ok(genres))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Genre", id))?;
    Ok(ok(genre))
}

/// PUT /api/v1/genres/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<GenreRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let Json(input) = payload?;
    let input = GenreRecord { id: raw_id, ..input }.normalize();
    validate_genre(&input)?;

    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found("Genre", id))?;
    Ok(ok(genre))
}

/// DELETE /api/v1/genres/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if !GenreRepo::soft_delete(&state.pool, id).await? {
        return Err(not_found("Genre", id).into());
    }
    tracing::info!(genre_id = %id, "Genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
