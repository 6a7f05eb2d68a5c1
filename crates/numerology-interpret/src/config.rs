//! Interpreter configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const AUTH_ENV_VAR: &str = "GEMINI_API_KEY";

#[derive(Clone, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Model name inserted into the `generateContent` path
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL, or a full `...:generateContent` URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key; interpretation degrades to the fallback payload without one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

// The key never appears in logs.
impl fmt::Debug for InterpreterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpreterConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl InterpreterConfig {
    /// Defaults plus the API key from `GEMINI_API_KEY`, if set and non-blank.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(AUTH_ENV_VAR).ok(),
            ..Self::default()
        }
        .normalized()
    }

    /// Fill a missing key from the environment, as `from_env` reads it.
    pub fn with_env_fallback(mut self) -> Self {
        if self.api_key().is_none() {
            self.api_key = Self::from_env().api_key;
        }
        self.normalized()
    }

    /// The API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn normalized(mut self) -> Self {
        self.api_key = self.api_key().map(str::to_string);
        self
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InterpreterConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api_key().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = InterpreterConfig {
            api_key: Some("   ".into()),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
    }

    #[test]
    fn debug_redacts_key() {
        let config = InterpreterConfig {
            api_key: Some("secret-key".into()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn key_is_read_from_environment() {
        std::env::set_var(AUTH_ENV_VAR, "  env-key  ");
        let from_env = InterpreterConfig::from_env();
        let filled = InterpreterConfig::default().with_env_fallback();
        let explicit = InterpreterConfig {
            api_key: Some("file-key".into()),
            ..Default::default()
        }
        .with_env_fallback();

        std::env::set_var(AUTH_ENV_VAR, "   ");
        let blank = InterpreterConfig::from_env();
        std::env::remove_var(AUTH_ENV_VAR);
        let unset = InterpreterConfig::from_env();

        assert_eq!(from_env.api_key(), Some("env-key"));
        assert_eq!(from_env.api_key.as_deref(), Some("env-key"));
        assert_eq!(from_env.model, DEFAULT_MODEL);
        assert_eq!(filled.api_key(), Some("env-key"));
        assert_eq!(explicit.api_key(), Some("file-key"));
        assert!(blank.api_key.is_none());
        assert!(unset.api_key().is_none());
    }

    #[test]
    fn partial_sections_deserialize() {
        let config: InterpreterConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
