//! Configuration for the webhook client

use ficha_config::FormConfig;
use std::time::Duration;

/// Multipart field that carries each attached file.
pub const DEFAULT_FILE_FIELD: &str = "anexos";

/// Configuration for the webhook client
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Intake endpoint. Checked on every delivery, not at construction.
    pub url: Option<String>,

    /// Value of the `source` marker
    pub source: String,

    /// Multipart field name for attachments
    pub file_field: String,

    /// Request timeout; `None` leaves the request unbounded
    pub timeout: Option<Duration>,

    /// User-Agent header for outgoing requests
    pub user_agent: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            source: ficha_config::DEFAULT_SOURCE.to_string(),
            file_field: DEFAULT_FILE_FIELD.to_string(),
            timeout: None,
            user_agent: format!("Ficha-Webhooks/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl WebhookConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> WebhookConfigBuilder {
        WebhookConfigBuilder::new()
    }
}

impl From<&FormConfig> for WebhookConfig {
    fn from(config: &FormConfig) -> Self {
        Self {
            url: config.webhook_url.clone(),
            source: config.source.clone(),
            timeout: config.request_timeout(),
            ..Self::default()
        }
    }
}

/// Builder for WebhookConfig
#[derive(Debug, Clone, Default)]
pub struct WebhookConfigBuilder {
    config: WebhookConfig,
}

impl WebhookConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: WebhookConfig::default(),
        }
    }

    /// Set the endpoint URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = Some(url.into());
        self
    }

    /// Set the source marker
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.config.source = source.into();
        self
    }

    /// Set the multipart field used for files
    pub fn file_field(mut self, field: impl Into<String>) -> Self {
        self.config.file_field = field.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> WebhookConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WebhookConfig::default();
        assert!(config.url.is_none());
        assert_eq!(config.source, "ficha-cadastral");
        assert_eq!(config.file_field, "anexos");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder() {
        let config = WebhookConfig::builder()
            .url("https://hooks.example.com/ficha")
            .timeout_secs(60)
            .source("test-form")
            .build();

        assert_eq!(config.url.as_deref(), Some("https://hooks.example.com/ficha"));
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.source, "test-form");
    }

    #[test]
    fn test_from_form_config() {
        let form = FormConfig {
            webhook_url: Some("https://hooks.example.com/ficha".to_string()),
            request_timeout_secs: Some(12),
            ..FormConfig::default()
        };

        let config = WebhookConfig::from(&form);
        assert_eq!(config.url, form.webhook_url);
        assert_eq!(config.timeout, Some(Duration::from_secs(12)));
        assert_eq!(config.file_field, DEFAULT_FILE_FIELD);
    }
}
