//! Genre record shape and validation rules.

use serde::{Deserialize, Serialize};
use validator::ValidateLength;

use crate::error::CoreError;
use crate::normalize::{clean_text, Normalize};
use crate::validation::{
    validate, Action, FieldRule, OnUpdate, Validate, MAX_NAME_LEN, MIN_NAME_LEN,
};

pub const NAME_REQUIRED: &str = "Genre name is required";
pub const NAME_LENGTH: &str = "Genre name must be between 3 and 255 characters";

/// Candidate genre decoded from a request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenreRecord {
    pub id: String,
    pub name: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreField {
    Name,
}

impl Normalize for GenreRecord {
    fn normalize(self) -> Self {
        Self {
            name: clean_text(&self.name),
            ..self
        }
    }
}

impl Validate for GenreRecord {
    type Field = GenreField;

    // Only the create plan reads this table; see `validate_genre`.
    const FIELDS: &'static [FieldRule<GenreField>] =
        &[FieldRule::required(GenreField::Name, OnUpdate::Always)];

    const EMPTY_UPDATE: &'static str = "Genre must update at least one field";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_present(&self, field: GenreField) -> bool {
        match field {
            GenreField::Name => !self.name.is_empty(),
        }
    }

    fn check(&self, field: GenreField) -> Result<(), CoreError> {
        match field {
            GenreField::Name => {
                if self.name.is_empty() {
                    return Err(CoreError::validation(NAME_REQUIRED));
                }
                if !self
                    .name
                    .validate_length(Some(MIN_NAME_LEN), Some(MAX_NAME_LEN), None)
                {
                    return Err(CoreError::validation(NAME_LENGTH));
                }
                Ok(())
            }
        }
    }
}

/// Validate a genre. Create and update share the same rules.
pub fn validate_genre(record: &GenreRecord) -> Result<(), CoreError> {
    validate(record, Action::Create)
}
