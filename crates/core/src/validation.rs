//! Generic record validation driver.
//!
//! Each entity declares a static table of [`FieldRule`]s describing which
//! fields are required on create and how they are re-checked on update.
//! [`validate`] walks that table for the requested [`Action`] and stops at
//! the first failing rule.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Shared limits and messages
   -------------------------------------------------------------------------- */

/// Minimum length (in characters) for names and titles.
pub const MIN_NAME_LEN: u64 = 3;

/// Maximum length (in characters) for names, titles and short descriptions.
pub const MAX_NAME_LEN: u64 = 255;

/// Message reported when a record's `id` is not a uuid.
pub const INVALID_ID: &str = "Invalid id";

/* --------------------------------------------------------------------------
   Rule table types
   -------------------------------------------------------------------------- */

/// Which rule subset applies to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Create,
    Update,
}

impl Action {
    /// Parse an action tag.
    ///
    /// `"update"` selects update rules. Every other tag, including
    /// `"create"` and the empty tag, selects create rules.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "update" {
            Action::Update
        } else {
            Action::Create
        }
    }
}

/// How a field is re-checked when the action is [`Action::Update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnUpdate {
    /// Checked on every update, supplied or not.
    Always,
    /// Checked only when the update supplies a non-zero value.
    IfPresent,
    /// Never checked on update.
    Never,
}

/// One row of an entity's validation table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule<F> {
    pub field: F,
    /// Whether the field must pass its check on create even when empty.
    pub required: bool,
    pub on_update: OnUpdate,
}

impl<F> FieldRule<F> {
    pub const fn required(field: F, on_update: OnUpdate) -> Self {
        Self {
            field,
            required: true,
            on_update,
        }
    }

    pub const fn optional(field: F, on_update: OnUpdate) -> Self {
        Self {
            field,
            required: false,
            on_update,
        }
    }
}

/// A record that can be checked by [`validate`].
pub trait Validate {
    /// Field selector used by the rule table.
    type Field: Copy + 'static;

    /// Rule table, in the order checks are run.
    const FIELDS: &'static [FieldRule<Self::Field>];

    /// Message reported for an update that supplies no field at all.
    const EMPTY_UPDATE: &'static str;

    fn id(&self) -> &str;

    /// Whether `field` carries a non-zero / non-empty value.
    fn is_present(&self, field: Self::Field) -> bool;

    /// Run the check for a single field.
    fn check(&self, field: Self::Field) -> Result<(), CoreError>;
}

/* --------------------------------------------------------------------------
   Driver
   -------------------------------------------------------------------------- */

/// Validate `record` against its rule table for `action`.
///
/// The id is checked first regardless of action. On create every required
/// field is checked, and optional fields are checked when present. On update
/// a record with no field present is rejected with the entity's
/// [`Validate::EMPTY_UPDATE`] message; the remaining fields follow their
/// [`OnUpdate`] policy.
pub fn validate<R: Validate>(record: &R, action: Action) -> Result<(), CoreError> {
    validate_id(record.id())?;

    match action {
        Action::Create => {
            for rule in R::FIELDS {
                if rule.required || record.is_present(rule.field) {
                    record.check(rule.field)?;
                }
            }
        }
        Action::Update => {
            if !R::FIELDS.iter().any(|rule| record.is_present(rule.field)) {
                return Err(CoreError::validation(R::EMPTY_UPDATE));
            }
            for rule in R::FIELDS {
                let run = match rule.on_update {
                    OnUpdate::Always => true,
                    OnUpdate::IfPresent => record.is_present(rule.field),
                    OnUpdate::Never => false,
                };
                if run {
                    record.check(rule.field)?;
                }
            }
        }
    }

    Ok(())
}

/// Length of the hyphenated `8-4-4-4-12` uuid form.
const HYPHENATED_UUID_LEN: usize = 36;

/// Parse `id` as a uuid in its hyphenated `8-4-4-4-12` form.
///
/// The simple (no hyphens), braced and `urn:uuid:` forms are rejected.
pub fn parse_id(id: &str) -> Result<Uuid, CoreError> {
    if id.len() != HYPHENATED_UUID_LEN {
        return Err(CoreError::validation(INVALID_ID));
    }
    Uuid::try_parse(id).map_err(|_| CoreError::validation(INVALID_ID))
}

/// Validate that `id` is a hyphenated uuid.
pub fn validate_id(id: &str) -> Result<(), CoreError> {
    parse_id(id).map(|_| ())
}
