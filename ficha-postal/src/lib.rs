//! Postal code lookup for Ficha
//!
//! Resolves a Brazilian postal code (CEP) to street, neighborhood, city and
//! state so the address block of the form can be filled automatically.
//!
//! # Example
//!
//! ```rust,no_run
//! use ficha_postal::{PostalCode, PostalCodeLookup, ViaCepClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ViaCepClient::new("https://viacep.com.br/ws")?;
//!     let code = PostalCode::parse("80010-000")?;
//!
//!     let address = client.lookup(&code).await?;
//!     println!("{}, {} - {}", address.street, address.city, address.state);
//!     Ok(())
//! }
//! ```

mod code;
mod error;
mod lookup;
mod viacep;

pub use code::{POSTAL_CODE_DIGITS, PostalCode};
pub use error::{LookupError, Result};
pub use lookup::{AddressPatch, PostalCodeLookup};
pub use viacep::ViaCepClient;
