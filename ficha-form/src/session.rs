//! One person filling in one form.

use crate::{
    AttachmentCandidate, AttachmentPolicy, Field, FormRecord, Notice, Rejection, SubmitError,
    ValidRecord, build_submission, rules, validate_record,
};
use ficha_postal::{AddressPatch, PostalCode, PostalCodeLookup};
use ficha_validation::{ValidationError, ValidationErrors};
use ficha_webhooks::{Submission, WebhookClient, WebhookError, WebhookReceipt};
use tracing::{debug, error, info, warn};

/// Outcome of picking files
#[derive(Debug, Clone)]
pub struct AttachmentSelection {
    /// Number of files now attached
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
    /// Batch notice listing the rejected files
    pub notice: Option<Notice>,
    /// Current errors on the attachments field
    pub errors: Vec<ValidationError>,
}

/// A delivery the endpoint accepted
#[derive(Debug, Clone)]
pub struct Delivered {
    pub receipt: WebhookReceipt,
    pub notice: Notice,
}

/// Form state owned by a single user
#[derive(Debug, Default)]
pub struct FormSession {
    record: FormRecord,
    policy: AttachmentPolicy,
    submitting: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record, e.g. one restored from JSON
    pub fn with_record(record: FormRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    /// Use a different attachment policy
    pub fn with_policy(mut self, policy: AttachmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Whether a submission is outstanding
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update a text field and return its current errors
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Vec<ValidationError> {
        if !self.record.set_text(field, value) {
            return vec![not_a(field, "text")];
        }
        rules::validate_field(&self.record, field)
    }

    /// Replace a multi-select field and return its current errors
    pub fn set_selection(&mut self, field: Field, values: Vec<String>) -> Vec<ValidationError> {
        if !self.record.set_selection(field, values) {
            return vec![not_a(field, "selection")];
        }
        rules::validate_field(&self.record, field)
    }

    /// Screen a new file selection
    pub fn select_attachments(&mut self, candidates: Vec<AttachmentCandidate>) -> AttachmentSelection {
        let batch = self.policy.partition(candidates);
        let notice = Notice::rejected_files(&batch.rejected);

        // A new selection replaces the attached files; nothing is merged.
        self.record.attachments = batch.accepted;

        AttachmentSelection {
            accepted: self.record.attachments.len(),
            rejected: batch.rejected,
            notice,
            errors: rules::validate_field(&self.record, Field::Attachments),
        }
    }

    /// Store a postal code and, once it has eight digits, fill the address
    /// from `lookup`. Lookup failures are logged and leave the address as is.
    pub async fn postal_code_changed(
        &mut self,
        value: impl Into<String>,
        lookup: &dyn PostalCodeLookup,
    ) -> Option<AddressPatch> {
        let value = value.into();
        self.record.postal_code = value.clone();

        let code = PostalCode::parse(&value).ok()?;
        match lookup.lookup(&code).await {
            Ok(patch) => {
                debug!(postal_code = %code, "Address filled from postal code");
                self.apply_address(&patch);
                Some(patch)
            }
            Err(e) => {
                warn!(postal_code = %code, error = %e, "Postal code lookup failed");
                None
            }
        }
    }

    fn apply_address(&mut self, patch: &AddressPatch) {
        self.record.street = patch.street.clone();
        self.record.neighborhood = patch.neighborhood.clone();
        self.record.city = patch.city.clone();
        self.record.state = patch.state.clone();
    }

    /// Validate the whole record
    pub fn validate(&self) -> Result<ValidRecord, ValidationErrors> {
        validate_record(self.record.clone())
    }

    /// Validate, build the outgoing submission and mark the session busy.
    ///
    /// Every successful call must be paired with [`finish_submit`].
    ///
    /// [`finish_submit`]: FormSession::finish_submit
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }

        let valid = self.validate().inspect_err(|errors| {
            debug!(fields = ?errors.fields(), "Submission blocked by validation");
        })?;
        let submission = build_submission(&valid).inspect_err(|e| {
            error!(error = %e, "Error building submission payload");
        })?;

        self.submitting = true;
        Ok(submission)
    }

    /// Record the delivery result. Success clears the form; failure keeps
    /// everything so the user can retry.
    pub fn finish_submit(
        &mut self,
        result: Result<WebhookReceipt, WebhookError>,
    ) -> Result<Delivered, SubmitError> {
        self.submitting = false;

        match result {
            Ok(receipt) => {
                info!(delivery_id = %receipt.id, status = receipt.status, "Registration submitted");
                self.reset();
                Ok(Delivered {
                    receipt,
                    notice: Notice::submitted(),
                })
            }
            Err(e) => {
                error!(error = %e, "Error submitting form");
                Err(SubmitError::Delivery(e))
            }
        }
    }

    /// Validate and deliver in one step.
    ///
    /// Dropping the returned future mid-delivery frees the session again and
    /// leaves the record untouched.
    pub async fn submit(&mut self, client: &WebhookClient) -> Result<Delivered, SubmitError> {
        let submission = self.begin_submit()?;
        let result = {
            let _busy = BusyGuard(&mut self.submitting);
            client.deliver(submission).await
        };
        self.finish_submit(result)
    }

    /// Clear the record and drop all attachments
    pub fn reset(&mut self) {
        self.record = FormRecord::default();
    }
}

/// Clears the in-flight flag however the delivery ends
struct BusyGuard<'a>(&'a mut bool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn not_a(field: Field, kind: &str) -> ValidationError {
    ValidationError::new(field.name(), format!("{} is not a {} field", field, kind))
        .with_constraint("type")
}
