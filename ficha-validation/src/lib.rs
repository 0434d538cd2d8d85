//! Validation engine for the ficha registration form
//!
//! Rules are data: each field gets a list of constraints, and record-level
//! refinements run after the field rules. Evaluation never short-circuits,
//! so a form surface can show every problem at once.
//!
//! # Examples
//!
//! ## Field rules
//!
//! ```
//! use ficha_validation::{FieldValue, ValidationRules};
//!
//! let rules = ValidationRules::for_field("cnpj")
//!     .min_length(14)
//!     .message("CNPJ must have at least 14 characters");
//!
//! assert!(rules.validate(FieldValue::Text("12.345.678/0001-90")).is_ok());
//! assert!(rules.validate(FieldValue::Text("123")).is_err());
//! ```
//!
//! ## Rule set with a refinement
//!
//! ```
//! use ficha_validation::{ValidationBuilder, ValidationError, ValidationRules};
//! use std::collections::HashMap;
//!
//! let rules: ValidationBuilder<HashMap<String, String>> = ValidationBuilder::new()
//!     .field(ValidationRules::for_field("email").email())
//!     .refine(|data: &HashMap<String, String>| match data.get("email") {
//!         Some(email) if email.ends_with(".br") => Ok(()),
//!         _ => Err(ValidationError::new("email", "must be a .br address")),
//!     });
//!
//! let mut data = HashMap::new();
//! data.insert("email".to_string(), "compras@acme.com.br".to_string());
//! assert!(rules.validate(&data).is_ok());
//! ```

mod errors;
mod rules;
mod traits;
mod validators;

pub use errors::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;
