// Validation traits

use std::collections::HashMap;

/// Borrowed view of a single field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text, select or radio value
    Text(&'a str),
    /// Multi-select values
    List(&'a [String]),
    /// Number of files attached to the field
    Files(usize),
    /// The source has no such field or it was never set
    Missing,
}

impl<'a> FieldValue<'a> {
    /// Text content; `Missing` reads as the empty string.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Missing => Some(""),
            _ => None,
        }
    }

    /// Number of entries for list-like values
    pub fn item_count(&self) -> usize {
        match *self {
            FieldValue::Text(s) => usize::from(!s.is_empty()),
            FieldValue::List(items) => items.len(),
            FieldValue::Files(count) => count,
            FieldValue::Missing => 0,
        }
    }
}

/// Anything that can hand out field values by name.
pub trait FieldSource {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> FieldValue<'_> {
        self.get(name)
            .map(|v| FieldValue::Text(v.as_str()))
            .unwrap_or(FieldValue::Missing)
    }
}

impl FieldSource for HashMap<String, Vec<String>> {
    fn field(&self, name: &str) -> FieldValue<'_> {
        self.get(name)
            .map(|v| FieldValue::List(v.as_slice()))
            .unwrap_or(FieldValue::Missing)
    }
}
