//! ViaCEP-style HTTP lookup.

use crate::{AddressPatch, LookupError, PostalCode, PostalCodeLookup, Result};
use async_trait::async_trait;
use ficha_config::FormConfig;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Raw service response. Unknown codes come back as `{"erro": true}`
/// (older deployments send the string `"true"`).
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: Option<Value>,
}

impl ViaCepResponse {
    fn is_error(&self) -> bool {
        match &self.erro {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => !s.is_empty() && s != "false",
            Some(_) => true,
        }
    }
}

impl From<ViaCepResponse> for AddressPatch {
    fn from(response: ViaCepResponse) -> Self {
        Self {
            street: response.logradouro,
            neighborhood: response.bairro,
            city: response.localidade,
            state: response.uf,
        }
    }
}

/// Client for `GET {base}/{cep}/json/`.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    base_url: String,
    http_client: Client,
}

impl ViaCepClient {
    /// Create a client for the given base URL, e.g. `https://viacep.com.br/ws`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client with an optional request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.into();
        // Fail early on a malformed base
        Url::parse(&base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            http_client: builder.build()?,
        })
    }

    /// Create a client from form configuration.
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        Self::with_timeout(config.postal_lookup_url.clone(), config.request_timeout())
    }

    /// Base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full lookup URL for a code.
    pub fn lookup_url(&self, code: &PostalCode) -> Result<Url> {
        let url = format!("{}/{}/json/", self.base_url.trim_end_matches('/'), code);
        Ok(Url::parse(&url)?)
    }
}

#[async_trait]
impl PostalCodeLookup for ViaCepClient {
    async fn lookup(&self, code: &PostalCode) -> Result<AddressPatch> {
        let url = self.lookup_url(code)?;
        debug!(url = %url, "Looking up postal code");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let body: ViaCepResponse = serde_json::from_str(&text)?;
        if body.is_error() {
            return Err(LookupError::NotFound(code.to_string()));
        }

        Ok(body.into())
    }
}
