//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lookups return `Option`
//! and deletes return `bool` so "not found" stays distinct from
//! `sqlx::Error`. Soft-deleted rows are invisible to every method.

pub mod cast_member_repo;
pub mod category_repo;
pub mod genre_repo;
pub mod video_repo;

pub use cast_member_repo::CastMemberRepo;
pub use category_repo::CategoryRepo;
pub use genre_repo::GenreRepo;
pub use video_repo::VideoRepo;
