// Built-in validators

use crate::{FieldValue, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$").unwrap()
});

/// Validates that a value is present: non-empty text, at least one list
/// entry or at least one file. Whitespace counts as content.
pub struct Required;

impl Required {
    pub fn validate(value: FieldValue<'_>, field: &str) -> Result<(), ValidationError> {
        if value.item_count() > 0 {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{} is required", field))
                    .with_constraint("required"),
            )
        }
    }
}

/// Validates minimum string length, in characters
pub struct MinLength(pub usize);

impl MinLength {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if value.chars().count() < self.0 {
            Err(ValidationError::new(
                field,
                format!("{} must be at least {} characters", field, self.0),
            )
            .with_constraint("minLength")
            .with_value(value.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Validates email format
pub struct IsEmail;

impl IsEmail {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{} must be a valid email", field))
                    .with_constraint("isEmail")
                    .with_value(value.to_string()),
            )
        }
    }
}

/// Validates that a value belongs to a fixed set (exact match)
pub struct OneOf(pub &'static [&'static str]);

impl OneOf {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if self.0.contains(&value) {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("{} must be one of: {}", field, self.0.join(", ")),
            )
            .with_constraint("oneOf")
            .with_value(value.to_string()))
        }
    }
}

/// Validates the minimum number of selected entries
pub struct MinItems(pub usize);

impl MinItems {
    pub fn validate(&self, count: usize, field: &str) -> Result<(), ValidationError> {
        if count < self.0 {
            Err(ValidationError::new(
                field,
                format!("{} must have at least {} item(s)", field, self.0),
            )
            .with_constraint("minItems")
            .with_value(count.to_string()))
        } else {
            Ok(())
        }
    }
}
