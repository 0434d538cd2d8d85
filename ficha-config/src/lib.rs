// Configuration for the ficha registration form
//
// Settings come from, in increasing precedence: built-in defaults, an
// optional config file (JSON, TOML or env format), the process environment,
// and explicit overrides. The environment only contributes the webhook URL.

pub mod env;
pub mod error;
pub mod loader;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::time::Duration;

/// Prefix of every environment variable read by this crate.
pub const ENV_PREFIX: &str = "FICHA";

/// Public ViaCEP endpoint used when no lookup URL is configured.
pub const DEFAULT_POSTAL_LOOKUP_URL: &str = "https://viacep.com.br/ws";

/// Marker sent as `source` with every submission.
pub const DEFAULT_SOURCE: &str = "ficha-cadastral";

/// Typed settings for a form deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Intake webhook. `None` is allowed at load time and reported when a
    /// submission is attempted.
    pub webhook_url: Option<String>,

    /// Base URL of the postal-code lookup service
    pub postal_lookup_url: String,

    /// Value of the `source` marker
    pub source: String,

    /// HTTP timeout. Unset means no client-side timeout.
    #[serde(deserialize_with = "de_opt_u64")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            postal_lookup_url: DEFAULT_POSTAL_LOOKUP_URL.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl FormConfig {
    /// Builder for a layered configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Load `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        Self::builder().load_dotenv(None).load_env().build()
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Check URL syntax and required values.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref webhook_url) = self.webhook_url {
            check_http_url("webhook_url", webhook_url)?;
        }

        check_http_url("postal_lookup_url", &self.postal_lookup_url)?;

        if self.source.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "source".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn check_http_url(key: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Env-format files only carry strings, so numbers may arrive quoted.
fn de_opt_u64<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("expected a non-negative integer")),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected integer, found {}",
            other
        ))),
    }
}

/// Builder for [`FormConfig`]
pub struct ConfigBuilder {
    load_dotenv: bool,
    dotenv_path: Option<PathBuf>,
    load_env: bool,
    files: Vec<PathBuf>,
    overrides: Map<String, Value>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            load_dotenv: false,
            dotenv_path: None,
            load_env: false,
            files: Vec::new(),
            overrides: Map::new(),
        }
    }

    /// Enable loading from a .env file (default location when `None`)
    pub fn load_dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.load_dotenv = true;
        self.dotenv_path = path;
        self
    }

    /// Enable reading `FICHA_WEBHOOK_URL` from the environment
    pub fn load_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Add a configuration file; the format follows its extension
    pub fn add_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Set a value explicitly, overriding every other source
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.to_lowercase(), value.into());
        self
    }

    /// Merge all sources, deserialize and validate
    pub fn build(self) -> Result<FormConfig> {
        if self.load_dotenv {
            match self.dotenv_path {
                Some(ref path) => {
                    dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
                }
                None => {
                    dotenvy::dotenv().ok(); // Ignore if .env doesn't exist
                }
            }
        }

        let mut merged = Map::new();

        for path in &self.files {
            let loader = ConfigLoader::auto(path)?;
            if let Value::Object(map) = loader.load_file(path)? {
                merged.extend(map);
            }
        }

        if self.load_env
            && let Some(url) = EnvLoader::default().load_var_opt("webhook_url")
        {
            merged.insert("webhook_url".to_string(), Value::String(url));
        }

        merged.extend(self.overrides);

        let mut config: FormConfig = serde_json::from_value(Value::Object(merged))
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        config.webhook_url = config
            .webhook_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        config.validate()?;

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
