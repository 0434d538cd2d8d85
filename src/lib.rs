//! Ficha - business registration form toolkit
//!
//! Re-exports the workspace crates and adds [`FormApp`], which wires
//! configuration, logging, webhook delivery and postal-code lookup together.
//!
//! # Example
//!
//! ```rust,no_run
//! use ficha::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = FormApp::from_env()?;
//!     let mut session = app.session();
//!
//!     session.set_text(Field::LegalName, "ACME Comercio LTDA");
//!     app.postal_code_changed(&mut session, "80010-000").await;
//!
//!     match app.submit(&mut session).await {
//!         Ok(delivered) => println!("{}", delivered.notice.title),
//!         Err(e) => eprintln!("{}", e),
//!     }
//!     Ok(())
//! }
//! ```

mod app;

pub use app::{AppError, FormApp};

pub use ficha_config;
pub use ficha_form;
pub use ficha_log;
pub use ficha_postal;
pub use ficha_validation;
pub use ficha_webhooks;

pub use ficha_form::*;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{AppError, FormApp};
    pub use ficha_config::FormConfig;
    pub use ficha_form::{
        AttachmentCandidate, Delivered, Field, FormRecord, FormSession, Notice, SubmitError,
        parse_currency, search_banks,
    };
    pub use ficha_postal::{PostalCode, PostalCodeLookup, ViaCepClient};
    pub use ficha_validation::{ValidationError, ValidationErrors};
    pub use ficha_webhooks::{WebhookClient, WebhookConfig, WebhookError};
}
