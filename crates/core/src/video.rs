//! Video record shape and validation rules.
//!
//! Every sub-check is public so callers can validate a single field. On
//! update only supplied fields are checked; a zero value means "not being
//! updated".

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::normalize::{clean_text, Normalize};
use crate::validation::{FieldRule, OnUpdate, Validate};

/* --------------------------------------------------------------------------
   Limits
   -------------------------------------------------------------------------- */

pub const MIN_TITLE_LEN: usize = 3;
pub const MAX_TITLE_LEN: usize = 255;

pub const MIN_DESCRIPTION_LEN: usize = 15;
pub const MIN_DESCRIPTION_WORDS: usize = 10;

/// Year of the first public film screening.
pub const FIRST_FILM_YEAR: i32 = 1895;

pub const MIN_DURATION: i32 = 1;

/// Advisory ratings, matched exactly and case-sensitively.
pub const VALID_RATINGS: &[&str] = &["L", "10", "12", "14", "16", "18"];

/* --------------------------------------------------------------------------
   Messages
   -------------------------------------------------------------------------- */

pub const TITLE_LENGTH: &str = "Title length must be between 3 and 255 characters";
pub const DESCRIPTION_INVALID: &str = "Description must have at least 10 words and 15 characters";
pub const YEAR_INVALID: &str = "Year launched must be between 1895 and current year";
pub const RATING_INVALID: &str = "Rating must be a valid value";
pub const DURATION_INVALID: &str = "Duration must be greater than 0";
pub const EMPTY_UPDATE: &str = "Video must update at least one field";

/* --------------------------------------------------------------------------
   Record
   -------------------------------------------------------------------------- */

/// Candidate video decoded from a request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub opened: Option<bool>,
    pub rating: String,
    /// Running time in minutes.
    pub duration: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoField {
    Title,
    Description,
    YearLaunched,
    Rating,
    Duration,
}

impl Normalize for VideoRecord {
    fn normalize(self) -> Self {
        Self {
            title: clean_text(&self.title),
            description: clean_text(&self.description),
            ..self
        }
    }
}

impl Validate for VideoRecord {
    type Field = VideoField;

    const FIELDS: &'static [FieldRule<VideoField>] = &[
        FieldRule::required(VideoField::Title, OnUpdate::IfPresent),
        FieldRule::required(VideoField::Description, OnUpdate::IfPresent),
        FieldRule::required(VideoField::YearLaunched, OnUpdate::IfPresent),
        FieldRule::required(VideoField::Rating, OnUpdate::IfPresent),
        FieldRule::required(VideoField::Duration, OnUpdate::IfPresent),
    ];

    const EMPTY_UPDATE: &'static str = EMPTY_UPDATE;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_present(&self, field: VideoField) -> bool {
        match field {
            VideoField::Title => !self.title.is_empty(),
            VideoField::Description => !self.description.is_empty(),
            VideoField::YearLaunched => self.year_launched != 0,
            VideoField::Rating => !self.rating.is_empty(),
            VideoField::Duration => self.duration != 0,
        }
    }

    fn check(&self, field: VideoField) -> Result<(), CoreError> {
        match field {
            VideoField::Title => validate_title(self.title.chars().count()),
            VideoField::Description => validate_description(
                self.description.chars().count(),
                word_count(&self.description),
            ),
            VideoField::YearLaunched => validate_year_launched(self.year_launched),
            VideoField::Rating => validate_rating(&self.rating),
            VideoField::Duration => validate_duration(self.duration),
        }
    }
}

/* --------------------------------------------------------------------------
   Sub-checks
   -------------------------------------------------------------------------- */

/// Number of whitespace-separated words. Runs of whitespace count once.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate a title length in characters.
pub fn validate_title(len: usize) -> Result<(), CoreError> {
    if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&len) {
        return Err(CoreError::validation(TITLE_LENGTH));
    }
    Ok(())
}

/// Validate a description: both the length and the word count must hold.
pub fn validate_description(len: usize, words: usize) -> Result<(), CoreError> {
    if len < MIN_DESCRIPTION_LEN || words < MIN_DESCRIPTION_WORDS {
        return Err(CoreError::validation(DESCRIPTION_INVALID));
    }
    Ok(())
}

/// Validate a launch year against the current UTC calendar year.
pub fn validate_year_launched(year: i32) -> Result<(), CoreError> {
    validate_year_launched_at(year, chrono::Utc::now().year())
}

/// Validate a launch year against an explicit current year.
pub fn validate_year_launched_at(year: i32, current_year: i32) -> Result<(), CoreError> {
    if year < FIRST_FILM_YEAR || year > current_year {
        return Err(CoreError::validation(YEAR_INVALID));
    }
    Ok(())
}

/// Validate that `rating` is exactly one of [`VALID_RATINGS`].
pub fn validate_rating(rating: &str) -> Result<(), CoreError> {
    if !VALID_RATINGS.contains(&rating) {
        return Err(CoreError::validation(RATING_INVALID));
    }
    Ok(())
}

/// Validate a duration in minutes.
pub fn validate_duration(duration: i32) -> Result<(), CoreError> {
    if duration < MIN_DURATION {
        return Err(CoreError::validation(DURATION_INVALID));
    }
    Ok(())
}
