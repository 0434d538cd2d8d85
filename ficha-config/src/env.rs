// Environment variable lookup

use crate::{ConfigError, Result};
use std::env;

/// Prefixed environment variable reader.
///
/// `EnvLoader::new(Some("FICHA"))` resolves `webhook_url` to `FICHA_WEBHOOK_URL`.
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Full variable name for a key
    pub fn key_for(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        env::var(self.key_for(key)).map_err(ConfigError::EnvError)
    }

    /// Load a variable, treating unset and blank values alike
    pub fn load_var_opt(&self, key: &str) -> Option<String> {
        self.load_var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Load with default value
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var_opt(key).unwrap_or_else(|| default.to_string())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(crate::ENV_PREFIX.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_for_with_prefix() {
        let loader = EnvLoader::new(Some("FICHA".to_string()));
        assert_eq!(loader.key_for("webhook_url"), "FICHA_WEBHOOK_URL");
    }

    #[test]
    fn test_key_for_without_prefix() {
        let loader = EnvLoader::new(None);
        assert_eq!(loader.key_for("path"), "PATH");
    }

    #[test]
    fn test_env_loader_with_default() {
        let loader = EnvLoader::new(None);
        let value = loader.load_var_or("NONEXISTENT_VAR_12345", "default");

        assert_eq!(value, "default");
    }

    #[test]
    fn test_env_loader_missing_var() {
        let loader = EnvLoader::new(Some("FICHA_TEST".to_string()));
        assert!(loader.load_var("MISSING_VAR_67890").is_err());
        assert!(loader.load_var_opt("MISSING_VAR_67890").is_none());
    }
}
