//! Handlers for the `/videos` resource.
//!
//! Updates are partial: zero-valued fields in the body are left untouched
//! and skipped by validation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::normalize::Normalize;
use catalog_core::validation::{validate, Action};
use catalog_core::video::VideoRecord;
use catalog_db::repositories::VideoRepo;

use super::{assign_id, not_found, parse_id};
use crate::error::AppResult;
use crate::response::{created, ok};
use crate::state::AppState;

/// POST /api/v1/videos
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<VideoRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let id = assign_id(&input.id)?;
    let input = VideoRecord {
        id: id.to_string(),
        ..input
    }
    .normalize();
    validate(&input, Action::Create)?;

    let video = VideoRepo::create(&state.pool, id, &input).await?;
    tracing::info!(video_id = %id, title = %video.title, "Video created");
    Ok(created(video))
}

/// GET /api/v1/videos
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let videos = VideoRepo::list(&state.pool).await?;
    Ok(ok(videos))
}

/// GET /api/v1/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Video", id))?;
    Ok(ok(video))
}

/// PUT /api/v1/videos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<VideoRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let Json(input) = payload?;
    let input = VideoRecord { id: raw_id, ..input }.normalize();
    validate(&input, Action::Update)?;

    let video = VideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found("Video", id))?;
    Ok(ok(video))
}

/// DELETE /api/v1/videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if !VideoRepo::soft_delete(&state.pool, id).await? {
        return Err(not_found("Video", id).into());
    }
    tracing::info!(video_id = %id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}
