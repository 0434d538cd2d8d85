// Application wiring: configuration, logging and the two HTTP clients.

use ficha_config::{ConfigError, FormConfig};
use ficha_form::{Delivered, FormSession, SubmitError};
use ficha_postal::{AddressPatch, LookupError, ViaCepClient};
use ficha_webhooks::{WebhookClient, WebhookConfig, WebhookError};
use thiserror::Error;
use tracing::info;

/// Errors raised while assembling a [`FormApp`]
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Webhook client error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("Postal lookup client error: {0}")]
    Postal(#[from] LookupError),
}

/// A configured form deployment.
///
/// Holds the clients shared by every [`FormSession`]; sessions themselves
/// are independent and owned by the caller.
#[derive(Debug, Clone)]
pub struct FormApp {
    config: FormConfig,
    webhook: WebhookClient,
    postal: ViaCepClient,
}

impl FormApp {
    /// Build from an explicit configuration
    pub fn new(config: FormConfig) -> Result<Self, AppError> {
        config.validate()?;

        let webhook = WebhookClient::new(WebhookConfig::from(&config))?;
        let postal = ViaCepClient::from_config(&config)?;

        Ok(Self {
            config,
            webhook,
            postal,
        })
    }

    /// Install logging, read `.env` and `FICHA_*` variables, then build.
    pub fn from_env() -> Result<Self, AppError> {
        ficha_log::init();

        let config = FormConfig::from_env()?;
        info!(
            webhook_configured = config.webhook_url.is_some(),
            postal_lookup_url = %config.postal_lookup_url,
            "Form configuration loaded"
        );

        Self::new(config)
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn webhook(&self) -> &WebhookClient {
        &self.webhook
    }

    pub fn postal(&self) -> &ViaCepClient {
        &self.postal
    }

    /// Fresh, empty session
    pub fn session(&self) -> FormSession {
        FormSession::new()
    }

    /// Validate and deliver a session's record
    pub async fn submit(&self, session: &mut FormSession) -> Result<Delivered, SubmitError> {
        session.submit(&self.webhook).await
    }

    /// Store a postal code on the session and fill the address when it resolves
    pub async fn postal_code_changed(
        &self,
        session: &mut FormSession,
        value: impl Into<String>,
    ) -> Option<AddressPatch> {
        session.postal_code_changed(value, &self.postal).await
    }
}
