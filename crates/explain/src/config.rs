use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by [`ExplainConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("model name must not be empty")]
    EmptyModel,

    #[error("base url must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),

    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration for an explanation service.
///
/// Construct with [`ExplainConfig::new`] or [`ExplainConfig::from_env`] and
/// chain builder methods as needed. Also deserializes from a settings table
/// where every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExplainConfig {
    /// Model identifier passed to the service.
    pub model: String,

    /// Base URL of the service, without a trailing slash.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Credential sent with each request.
    pub api_key: Option<String>,
}

impl ExplainConfig {
    /// Model used when none is configured.
    pub const DEFAULT_MODEL: &'static str = "gemini-3-pro-preview";

    /// Public Gemini API endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    /// Environment variable holding the API key.
    pub const API_KEY_VAR: &'static str = "GEMINI_API_KEY";

    /// Secondary environment variable holding the API key.
    pub const FALLBACK_API_KEY_VAR: &'static str = "API_KEY";

    /// Environment variable overriding the model.
    pub const MODEL_VAR: &'static str = "QUADRA_GEMINI_MODEL";

    /// Creates a config with the default model and endpoint and no API key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_owned(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: 45,
            api_key: None,
        }
    }

    /// Creates a default config, then applies the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new().with_env()
    }

    /// Overrides the API key and model from the environment, when set.
    ///
    /// The key is read from `GEMINI_API_KEY`, then `API_KEY`; the model from
    /// `QUADRA_GEMINI_MODEL`. Empty variables are ignored.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_lookup(|name| std::env::var(name).ok())
    }

    fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) =
            non_empty(Self::API_KEY_VAR).or_else(|| non_empty(Self::FALLBACK_API_KEY_VAR))
        {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty(Self::MODEL_VAR) {
            self.model = model;
        }
        self
    }

    /// Sets the model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout, truncated to whole seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the model name, base URL, and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is blank, the base URL is not HTTP(S),
    /// or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = ExplainConfig::default();
        assert_eq!(config.model, ExplainConfig::DEFAULT_MODEL);
        assert_eq!(config.api_key, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn primary_key_variable_wins() {
        let config = ExplainConfig::new().with_lookup(lookup(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "secondary"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn secondary_key_variable_is_used_when_primary_is_blank() {
        let config = ExplainConfig::new()
            .with_lookup(lookup(&[("GEMINI_API_KEY", " "), ("API_KEY", "secondary")]));
        assert_eq!(config.api_key.as_deref(), Some("secondary"));
    }

    #[test]
    fn environment_overrides_model_but_keeps_unset_fields() {
        let config = ExplainConfig::new()
            .api_key("from-file")
            .with_lookup(lookup(&[("QUADRA_GEMINI_MODEL", "gemini-2.5-flash")]));
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn rejects_invalid_settings() {
        assert_eq!(
            ExplainConfig::new().model("  ").validate(),
            Err(ConfigError::EmptyModel)
        );
        assert_eq!(
            ExplainConfig::new().base_url("ftp://example.com").validate(),
            Err(ConfigError::InvalidBaseUrl("ftp://example.com".to_owned()))
        );
        assert_eq!(
            ExplainConfig::new().timeout(Duration::from_millis(500)).validate(),
            Err(ConfigError::ZeroTimeout)
        );
    }
}
