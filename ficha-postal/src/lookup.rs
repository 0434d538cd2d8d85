//! Lookup trait and the address patch it produces.

use crate::{PostalCode, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Address fields filled from a successful lookup.
///
/// Every field is written back to the form, so an empty value here clears
/// the corresponding form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPatch {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// Two-letter state code (UF)
    pub state: String,
}

/// Resolves a postal code to an address.
#[async_trait]
pub trait PostalCodeLookup: Send + Sync {
    /// Look up a normalized postal code.
    async fn lookup(&self, code: &PostalCode) -> Result<AddressPatch>;
}
