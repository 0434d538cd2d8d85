//! Postal code normalization.

use crate::{LookupError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a CEP.
pub const POSTAL_CODE_DIGITS: usize = 8;

/// A CEP reduced to its eight digits.
///
/// Any punctuation or spacing in the input is discarded, so `"80010-000"`,
/// `"80.010-000"` and `"80010000"` all normalize to the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Normalize raw input, failing unless exactly eight digits remain.
    pub fn parse(input: &str) -> Result<Self> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.len() == POSTAL_CODE_DIGITS {
            Ok(Self(digits))
        } else {
            Err(LookupError::InvalidCode(input.to_string()))
        }
    }

    /// Normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `NNNNN-NNN` form.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl FromStr for PostalCode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
