use crate::Error;
use std::env;
use std::fmt;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const ORGANIZATION_VAR: &str = "OPENAI_ORG_ID";
pub const PROJECT_VAR: &str = "OPENAI_PROJECT_ID";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// The API key used to authenticate requests.
///
/// Resolved once and passed explicitly to the provider. The key is never
/// included in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    /// Wrap an API key. Empty keys are rejected.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::config("API key must not be empty"));
        }
        Ok(Self { api_key })
    }

    /// Resolve the key from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_var(API_KEY_VAR)
    }

    /// Resolve the key from the named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self, Error> {
        match env::var(name) {
            Ok(value) if !value.is_empty() => Ok(Self { api_key: value }),
            Ok(_) => Err(Error::config(format!(
                "{name} environment variable is set but empty"
            ))),
            Err(_) => Err(Error::config(format!(
                "{name} environment variable is required"
            ))),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Endpoint settings for the chat-completion client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            project: None,
        }
    }
}

impl ClientConfig {
    /// Create configuration pointing at a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read `OPENAI_BASE_URL`, `OPENAI_ORG_ID` and `OPENAI_PROJECT_ID`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            base_url: get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            organization: get(ORGANIZATION_VAR),
            project: get(PROJECT_VAR),
        }
    }

    /// Full URL of the chat-completions endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
