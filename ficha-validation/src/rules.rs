// Declarative validation rules
//
// A form's rule set is a table of field -> constraints plus a list of
// record-level refinements. `ValidationBuilder` evaluates the whole table and
// never stops at the first failure.

use crate::{FieldSource, FieldValue, ValidationError, ValidationErrors, validators};
use std::sync::Arc;

type ValidatorFn = Arc<dyn Fn(FieldValue<'_>, &str) -> Result<(), ValidationError> + Send + Sync>;

type RefinementFn<S> = Arc<dyn Fn(&S) -> Result<(), ValidationError> + Send + Sync>;

/// A single built-in constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Non-empty text, non-empty list or at least one file
    Required,
    /// Text with at least this many characters
    MinLength(usize),
    /// Text in email format
    Email,
    /// Text equal to one of the listed values
    OneOf(&'static [&'static str]),
    /// At least this many selected entries
    MinItems(usize),
}

impl Constraint {
    /// Check a value against this constraint
    pub fn check(&self, value: FieldValue<'_>, field: &str) -> Result<(), ValidationError> {
        match self {
            Constraint::Required => validators::Required::validate(value, field),
            Constraint::MinLength(min) => {
                validators::MinLength(*min).validate(expect_text(value, field)?, field)
            }
            Constraint::Email => validators::IsEmail::validate(expect_text(value, field)?, field),
            Constraint::OneOf(values) => {
                validators::OneOf(*values).validate(expect_text(value, field)?, field)
            }
            Constraint::MinItems(min) => {
                validators::MinItems(*min).validate(value.item_count(), field)
            }
        }
    }
}

fn expect_text<'a>(value: FieldValue<'a>, field: &str) -> Result<&'a str, ValidationError> {
    value.as_text().ok_or_else(|| {
        ValidationError::new(field, format!("{} must be text", field)).with_constraint("type")
    })
}

/// A constraint with an optional user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: Option<String>,
}

/// Rules attached to one field
#[derive(Clone)]
pub struct ValidationRules {
    field: String,
    rules: Vec<Rule>,
    custom: Vec<ValidatorFn>,
}

impl ValidationRules {
    /// Create new validation rules for a field
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
            custom: Vec::new(),
        }
    }

    /// Field these rules apply to
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Built-in rules, in declaration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Append a built-in constraint
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.rules.push(Rule {
            constraint,
            message: None,
        });
        self
    }

    pub fn required(self) -> Self {
        self.constraint(Constraint::Required)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.constraint(Constraint::MinLength(min))
    }

    pub fn email(self) -> Self {
        self.constraint(Constraint::Email)
    }

    pub fn one_of(self, values: &'static [&'static str]) -> Self {
        self.constraint(Constraint::OneOf(values))
    }

    pub fn min_items(self, min: usize) -> Self {
        self.constraint(Constraint::MinItems(min))
    }

    /// Override the message of the most recently added constraint
    pub fn message(mut self, message: impl Into<String>) -> Self {
        if let Some(rule) = self.rules.last_mut() {
            rule.message = Some(message.into());
        }
        self
    }

    /// Add a custom validator function
    #[allow(clippy::should_implement_trait)]
    pub fn add<F>(mut self, validator: F) -> Self
    where
        F: Fn(FieldValue<'_>, &str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.custom.push(Arc::new(validator));
        self
    }

    /// Validate a value against all rules
    pub fn validate(&self, value: FieldValue<'_>) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for rule in &self.rules {
            if let Err(error) = rule.constraint.check(value, &self.field) {
                errors.push(match rule.message {
                    Some(ref message) => error.with_message(message.clone()),
                    None => error,
                });
            }
        }

        for validator in &self.custom {
            if let Err(error) = validator(value, &self.field) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A complete rule set: field rules first, then record-level refinements.
pub struct ValidationBuilder<S: ?Sized> {
    rules: Vec<ValidationRules>,
    refinements: Vec<RefinementFn<S>>,
}

impl<S: ?Sized> ValidationBuilder<S> {
    /// Create a new validation builder
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// Add rules for a field
    pub fn field(mut self, rules: ValidationRules) -> Self {
        self.rules.push(rules);
        self
    }

    /// Add a record-level rule, evaluated after every field rule
    pub fn refine<F>(mut self, refinement: F) -> Self
    where
        F: Fn(&S) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.refinements.push(Arc::new(refinement));
        self
    }

    /// Rules declared for a field
    pub fn rules_for(&self, field: &str) -> Option<&ValidationRules> {
        self.rules.iter().find(|r| r.field == field)
    }

    /// Every field that has rules, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.field.as_str())
    }
}

impl<S: FieldSource + ?Sized> ValidationBuilder<S> {
    /// Validate all fields, then all refinements, collecting every error
    pub fn validate(&self, source: &S) -> Result<(), ValidationErrors> {
        let mut all_errors = Vec::new();

        for rule in &self.rules {
            if let Err(mut errors) = rule.validate(source.field(&rule.field)) {
                all_errors.append(&mut errors);
            }
        }

        for refinement in &self.refinements {
            if let Err(error) = refinement(source) {
                all_errors.push(error);
            }
        }

        ValidationErrors::new(all_errors).into_result()
    }

    /// Errors currently reported for one field, including refinements that
    /// target it
    pub fn validate_field(&self, source: &S, field: &str) -> Vec<ValidationError> {
        match self.validate(source) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.into_iter().filter(|e| e.field == field).collect(),
        }
    }
}

impl<S: ?Sized> Default for ValidationBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
