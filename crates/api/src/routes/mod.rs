pub mod cast_member;
pub mod category;
pub mod genre;
pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                 list, create
/// /categories/{id}            get, update, delete
///
/// /genres                     list, create
/// /genres/{id}                get, update, delete
///
/// /cast-members               list, create
/// /cast-members/{id}          get, update, delete
///
/// /videos                     list, create
/// /videos/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/genres", genre::router())
        .nest("/cast-members", cast_member::router())
        .nest("/videos", video::router())
}
