//! Cast member record shape and validation rules.
//!
//! On update the name is not re-checked for length; only a supplied `type`
//! is range-checked. This asymmetry lives in the rule table below.

use serde::{Deserialize, Serialize};
use validator::ValidateLength;

use crate::error::CoreError;
use crate::normalize::{clean_text, Normalize};
use crate::validation::{FieldRule, OnUpdate, Validate, MAX_NAME_LEN, MIN_NAME_LEN};

pub const NAME_REQUIRED: &str = "CastMember name is required";
pub const NAME_LENGTH: &str = "CastMember name must be between 3 and 255 characters";
pub const TYPE_REQUIRED: &str = "CastMember type is required";
pub const TYPE_INVALID: &str = "CastMember type must be 1 (Director) or 2 (Actor)";
pub const EMPTY_UPDATE: &str = "CastMember must update at least name or type";

/// Role of a cast member, stored as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CastMemberType {
    Director = 1,
    Actor = 2,
}

impl TryFrom<i32> for CastMemberType {
    type Error = CoreError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CastMemberType::Director),
            2 => Ok(CastMemberType::Actor),
            _ => Err(CoreError::validation(TYPE_INVALID)),
        }
    }
}

impl From<CastMemberType> for i32 {
    fn from(kind: CastMemberType) -> Self {
        kind as i32
    }
}

/// Candidate cast member decoded from a request body.
///
/// `kind` is kept as a raw integer so out-of-range codes reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastMemberRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastMemberField {
    Name,
    Type,
}

impl Normalize for CastMemberRecord {
    fn normalize(self) -> Self {
        Self {
            name: clean_text(&self.name),
            ..self
        }
    }
}

impl Validate for CastMemberRecord {
    type Field = CastMemberField;

    const FIELDS: &'static [FieldRule<CastMemberField>] = &[
        FieldRule::required(CastMemberField::Name, OnUpdate::Never),
        FieldRule::required(CastMemberField::Type, OnUpdate::IfPresent),
    ];

    const EMPTY_UPDATE: &'static str = EMPTY_UPDATE;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_present(&self, field: CastMemberField) -> bool {
        match field {
            CastMemberField::Name => !self.name.is_empty(),
            CastMemberField::Type => self.kind != 0,
        }
    }

    fn check(&self, field: CastMemberField) -> Result<(), CoreError> {
        match field {
            CastMemberField::Name => {
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
            CastMemberField::Type => {
                if self.kind == 0 {
                    return Err(CoreError::validation(TYPE_REQUIRED));
                }
                CastMemberType::try_from(self.kind).map(|_| ())
            }
        }
    }
}
