use crate::{ClientConfig, Credentials, Error, OpenAIProvider};
use std::env;
use std::path::Path;
use tracing::{debug, warn};

/// Default name of the optional environment file in the working directory.
pub const ENV_FILE: &str = ".env";

/// Load `KEY=value` pairs from `path` into the process environment.
///
/// Variables already present in the environment are never overridden, so
/// loading the same file repeatedly is a no-op after the first time.
/// Lines that fail to parse are logged and skipped; the remaining lines still
/// load. Returns `Ok(false)` when the file does not exist.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, Error> {
    let path = path.as_ref();
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => {
            debug!(path = %path.display(), "no environment file");
            return Ok(false);
        }
        Err(err) => {
            return Err(Error::config(format!(
                "Failed to load {}: {err}",
                path.display()
            )))
        }
    };

    for entry in entries {
        match entry {
            Ok((key, value)) => {
                if env::var_os(&key).is_none() {
                    env::set_var(&key, value);
                }
            }
            Err(dotenvy::Error::LineParse(line, index)) => {
                warn!(path = %path.display(), %line, index, "skipping unparsable line in environment file");
            }
            Err(err) => {
                return Err(Error::config(format!(
                    "Failed to read {}: {err}",
                    path.display()
                )))
            }
        }
    }

    debug!(path = %path.display(), "loaded environment file");
    Ok(true)
}

/// Everything needed to build a provider, resolved once from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub credentials: Credentials,
    pub client: ClientConfig,
}

impl ProviderConfig {
    pub fn new(credentials: Credentials, client: ClientConfig) -> Self {
        Self {
            credentials,
            client,
        }
    }

    /// Resolve the credential and endpoint settings from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        let credentials = Credentials::from_env()?;
        Ok(Self::new(credentials, ClientConfig::from_env()))
    }
}

/// Factory for creating providers.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from configuration.
    pub fn create(config: &ProviderConfig) -> Result<OpenAIProvider, Error> {
        OpenAIProvider::with_config(config.credentials.clone(), config.client.clone())
    }

    /// Create a provider from environment variables.
    pub fn from_env() -> Result<OpenAIProvider, Error> {
        let config = ProviderConfig::from_env()?;
        Self::create(&config)
    }
}
