//! Route definitions for videos.

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list).post(video::create))
        .route(
            "/{id}",
            get(video::get_by_id)
                .put(video::update)
                .delete(video::delete),
        )
}
