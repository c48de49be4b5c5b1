//! Video catalog domain logic.
//!
//! Record shapes for the four catalog entities, free-text normalization and
//! the field validation rules applied before anything reaches the database.
//! Nothing in this crate performs I/O.

pub mod cast_member;
pub mod category;
pub mod error;
pub mod genre;
pub mod normalize;
pub mod types;
pub mod validation;
pub mod video;
