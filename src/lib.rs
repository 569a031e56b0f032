//! A minimal chat-completion client.
//!
//! Resolves an API key from the environment (optionally seeded from a `.env`
//! file), sends one fixed request to an OpenAI-compatible Chat Completions
//! endpoint and prints the text of the first choice.

pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod response;
pub mod runner;
pub mod types;

// Re-export core types for easy usage
pub use error::Error;
pub use factory::{load_env_file, ProviderConfig, ProviderFactory};
pub use provider::ChatProvider;
pub use providers::*;
pub use response::*;
pub use runner::{greeting_request, run_from_env, RequestRunner};
pub use types::*;

/// Configure logging to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is reserved for the reply. Calling this more than once is harmless.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
