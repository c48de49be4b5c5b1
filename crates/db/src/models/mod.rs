//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row. Request payloads are the candidate records from
//! `catalog_core`, which repositories accept directly.

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod video;
