//! Business registration form
//!
//! The pieces behind a company onboarding ("ficha cadastral") form: the
//! record and its rules, attachment screening, the Brazilian currency
//! parser, the bank directory and a [`FormSession`] that ties them to
//! webhook delivery and postal-code lookup.
//!
//! # Example
//!
//! ```rust,no_run
//! use ficha_form::{AttachmentCandidate, Field, FormSession};
//! use ficha_webhooks::{WebhookClient, WebhookConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WebhookClient::new(
//!         WebhookConfig::builder().url("https://hooks.example.com/ficha").build(),
//!     )?;
//!
//!     let mut session = FormSession::new();
//!     session.set_text(Field::LegalName, "ACME Comercio LTDA");
//!     session.set_text(Field::CreditLimit, "R$ 25.000,00");
//!     session.select_attachments(vec![AttachmentCandidate::from_path("balanco.pdf")]);
//!
//!     match session.submit(&client).await {
//!         Ok(delivered) => println!("{}", delivered.notice.title),
//!         Err(e) => match e.validation_errors() {
//!             Some(errors) => println!("{}", errors),
//!             None => println!("{}", e),
//!         },
//!     }
//!     Ok(())
//! }
//! ```

mod attachment;
mod banks;
pub mod catalog;
mod currency;
mod error;
mod notice;
mod payload;
mod record;
pub mod rules;
mod session;

pub use attachment::{
    ALLOWED_CONTENT_TYPES, ALLOWED_EXTENSIONS, Attachment, AttachmentBatch, AttachmentCandidate,
    AttachmentPolicy, MAX_ATTACHMENT_BYTES, REASON_TOO_LARGE, REASON_TYPE_NOT_ALLOWED,
    REASON_UNREADABLE, Rejection,
};
pub use banks::{BANKS, Bank, find_bank, search_banks};
pub use currency::parse_currency;
pub use error::SubmitError;
pub use notice::{Notice, NoticeKind};
pub use payload::{SubmissionPayload, build_submission};
pub use record::{Field, FormRecord, ValidRecord, YES_NO_VALUES, YesNo};
pub use rules::{
    ATTACHMENTS_REQUIRED_MESSAGE, CREDIT_LIMIT_THRESHOLD, attachments_required, validate_record,
};
pub use session::{AttachmentSelection, Delivered, FormSession};
