//! Webhook client for delivering form submissions

use crate::{Encoding, Result, Submission, WebhookConfig, WebhookError, WebhookFile, WebhookReceipt};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};
use tracing::{debug, info, warn};
use url::Url;

/// Message used when the endpoint rejects without saying why.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Client that posts submissions to the configured intake endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    config: WebhookConfig,
    http_client: Client,
}

impl WebhookClient {
    /// Create a new webhook client
    pub fn new(config: WebhookConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(config: WebhookConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Deliver a submission with a single POST.
    ///
    /// Fails with [`WebhookError::ConfigError`] before any I/O when no URL is
    /// configured, with [`WebhookError::Status`] on a non-2xx answer and with
    /// [`WebhookError::Rejected`] when a 2xx body reports `success: false`.
    pub async fn deliver(&self, submission: Submission) -> Result<WebhookReceipt> {
        let url = self.endpoint()?;
        let encoding = submission.encoding();

        debug!(
            url = %url,
            encoding = ?encoding,
            files = submission.files.len(),
            "Delivering submission"
        );

        let request = self.http_client.post(url.clone());
        let request = match encoding {
            Encoding::Json => request.json(&json!({
                "source": self.config.source,
                "data": submission.data,
            })),
            Encoding::Multipart => request.multipart(self.multipart_form(submission)?),
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Submission endpoint returned an error status");
            return Err(WebhookError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let body = parse_body(&text, status.as_u16());
        if let Some(reason) = rejection(&body) {
            warn!(url = %url, reason = %reason, "Submission rejected by endpoint");
            return Err(WebhookError::Rejected(reason));
        }

        info!(url = %url, status = status.as_u16(), "Submission delivered");
        Ok(WebhookReceipt::new(status.as_u16(), encoding, body))
    }

    fn endpoint(&self) -> Result<Url> {
        match self.config.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(Url::parse(url)?),
            _ => Err(WebhookError::ConfigError(
                "webhook URL is not configured".to_string(),
            )),
        }
    }

    fn multipart_form(&self, submission: Submission) -> Result<Form> {
        let data = serde_json::to_string(&submission.data)?;
        let mut form = Form::new()
            .text("source", self.config.source.clone())
            .text("data", data);

        for file in &submission.files {
            form = form.part(self.config.file_field.clone(), file_part(file));
        }

        Ok(form)
    }
}

fn file_part(file: &WebhookFile) -> Part {
    let part = || Part::bytes(file.data.to_vec()).file_name(file.name.clone());

    if file.content_type.is_empty() {
        return part();
    }

    match part().mime_str(&file.content_type) {
        Ok(part) => part,
        Err(_) => {
            debug!(name = %file.name, content_type = %file.content_type, "Ignoring unparseable content type");
            part()
        }
    }
}

/// JSON body, or a generic success object when the body is not JSON.
fn parse_body(text: &str, status: u16) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "success": true, "status": status }))
}

/// Reason carried by a `success: false` body
fn rejection(body: &Value) -> Option<String> {
    if body.get("success") != Some(&Value::Bool(false)) {
        return None;
    }

    let reason = body
        .get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_ERROR);

    Some(reason.to_string())
}
