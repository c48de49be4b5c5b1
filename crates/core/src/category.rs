//! Category record shape and validation rules.

use serde::{Deserialize, Serialize};
use validator::ValidateLength;

use crate::error::CoreError;
use crate::normalize::{clean_text, Normalize};
use crate::validation::{
    validate, Action, FieldRule, OnUpdate, Validate, MAX_NAME_LEN, MIN_NAME_LEN,
};

pub const NAME_REQUIRED: &str = "Category name is required";
pub const NAME_LENGTH: &str = "Category name must be between 3 and 255 characters";
pub const DESCRIPTION_LENGTH: &str = "Category description must be between 3 and 255 characters";

/// Candidate category decoded from a request body.
///
/// Missing fields decode to their zero values; `is_active` stays `None`
/// until the database default (`true`) applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Name,
    Description,
}

impl Normalize for CategoryRecord {
    fn normalize(self) -> Self {
        Self {
            name: clean_text(&self.name),
            description: clean_text(&self.description),
            ..self
        }
    }
}

impl Validate for CategoryRecord {
    type Field = CategoryField;

    // Only the create plan reads this table: `validate_category` runs
    // `Action::Create` for updates too, so `on_update` and `EMPTY_UPDATE`
    // are never consulted.
    const FIELDS: &'static [FieldRule<CategoryField>] = &[
        FieldRule::required(CategoryField::Name, OnUpdate::Always),
        FieldRule::optional(CategoryField::Description, OnUpdate::IfPresent),
    ];

    const EMPTY_UPDATE: &'static str = "Category must update at least one field";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_present(&self, field: CategoryField) -> bool {
        match field {
            CategoryField::Name => !self.name.is_empty(),
            CategoryField::Description => !self.description.is_empty(),
        }
    }

    fn check(&self, field: CategoryField) -> Result<(), CoreError> {
        match field {
            CategoryField::Name => {
                if self.name.is_empty() {
                    return Err(CoreError::validation(NAME_REQUIRED));
                }
                if !self
                    .name
                    .validate_length(Some(MIN_NAME_LEN), Some(MAX_NAME_LEN), None)
                {
                    return Err(CoreError::validation(NAME_LENGTH));
                }
            }
            CategoryField::Description => {
                if !self
                    .description
                    .validate_length(Some(MIN_NAME_LEN), Some(MAX_NAME_LEN), None)
                {
                    return Err(CoreError::validation(DESCRIPTION_LENGTH));
                }
            }
        }
        Ok(())
    }
}

/// Validate a category. Create and update share the same rules.
pub fn validate_category(record: &CategoryRecord) -> Result<(), CoreError> {
    validate(record, Action::Create)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use uuid::Uuid;

    use super::*;
    use crate::validation::INVALID_ID;

    fn category(name: &str, description: &str) -> CategoryRecord {
        CategoryRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            is_active: Some(true),
        }
        .normalize()
    }

    fn message(record: &CategoryRecord) -> String {
        match validate_category(record) {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_record_fails() {
        assert!(validate_category(&CategoryRecord::default()).is_err());
    }

    #[test]
    fn fully_filled_record_passes() {
        assert!(validate_category(&category("Action", "Explosions and chases")).is_ok());
    }

    #[test]
    fn description_and_flag_are_optional() {
        let record = CategoryRecord {
            id: Uuid::new_v4().to_string(),
            name: "Drama".to_string(),
            ..Default::default()
        };
        assert!(validate_category(&record).is_ok());
    }

    #[test]
    fn non_uuid_id_fails_even_when_fields_are_valid() {
        let record = CategoryRecord {
            id: "abc".to_string(),
            ..category("Action", "")
        };
        assert_eq!(message(&record), INVALID_ID);
    }

    #[test]
    fn non_hyphenated_uuid_id_fails() {
        for id in [
            "67e5504410b1426f9247bb680e5fe0c8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
            "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8",
        ] {
            let record = CategoryRecord {
                id: id.to_string(),
                ..category("Action", "")
            };
            assert_eq!(message(&record), INVALID_ID);
        }
    }

    #[test]
    fn description_only_record_still_requires_name() {
        assert_eq!(message(&category("", "A lone description")), NAME_REQUIRED);
    }

    #[test]
    fn missing_name_is_required() {
        assert_eq!(message(&category("   ", "")), NAME_REQUIRED);
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(message(&category("ab", "")), NAME_LENGTH);
        assert_eq!(message(&category(&"a".repeat(256), "")), NAME_LENGTH);
        assert!(validate_category(&category("abc", "")).is_ok());
        assert!(validate_category(&category(&"a".repeat(255), "")).is_ok());
    }

    #[test]
    fn present_description_is_length_checked() {
        assert_eq!(message(&category("Action", "ab")), DESCRIPTION_LENGTH);
        assert_eq!(
            message(&category("Action", &"d".repeat(256))),
            DESCRIPTION_LENGTH
        );
    }

    #[test]
    fn escaped_characters_count_toward_length() {
        // "a<" escapes to "a&lt;" (5 chars).
        assert!(validate_category(&category("a<", "")).is_ok());
    }

    #[test]
    fn decodes_with_missing_fields_as_zero_values() {
        let record: CategoryRecord =
            serde_json::from_value(serde_json::json!({"name": "Horror", "extra": 1})).unwrap();
        assert_eq!(record.name, "Horror");
        assert_eq!(record.description, "");
        assert_eq!(record.is_active, None);
        assert_matches!(serde_json::from_value::<CategoryRecord>(serde_json::json!({"name": 1})), Err(_));
    }
}
