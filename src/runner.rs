//! The single request/print cycle behind the `hello-agent` binary.

use crate::factory::{self, ProviderFactory};
use crate::provider::ChatProvider;
use crate::{ChatRequest, Error, Prompt};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub const MODEL: &str = "gpt-4o-mini";
pub const SYSTEM_MESSAGE: &str = "You are a friendly AI assistant.";
pub const USER_MESSAGE: &str = "Say hello and explain what an AI agent is in one sentence.";

/// The fixed greeting request: system instruction first, user prompt second.
pub fn greeting_request() -> ChatRequest {
    let prompt = Prompt::system(SYSTEM_MESSAGE).with_user(USER_MESSAGE);
    ChatRequest::from_prompt(MODEL, &prompt)
}

/// Sends one request through a provider and prints the first reply.
pub struct RequestRunner<P> {
    provider: P,
    request: ChatRequest,
}

impl<P: ChatProvider> RequestRunner<P> {
    /// A runner that sends the fixed greeting request.
    pub fn new(provider: P) -> Self {
        Self::with_request(provider, greeting_request())
    }

    pub fn with_request(provider: P, request: ChatRequest) -> Self {
        Self { provider, request }
    }

    pub fn request(&self) -> &ChatRequest {
        &self.request
    }

    /// Send the request and write the first choice's content plus a newline to `out`.
    ///
    /// Nothing is written unless the call succeeds and the first choice has content.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<String, Error> {
        let response = self.provider.complete(&self.request).await?;
        let content = response.first_content()?.to_string();

        writeln!(out, "{content}")?;
        out.flush()?;
        info!(bytes = content.len(), "printed first choice");

        Ok(content)
    }
}

/// Load `env_file` if present, resolve configuration, and run the greeting once.
///
/// The credential is resolved before any provider is built, so a missing key
/// fails without touching the network.
pub async fn run_from_env<W: Write>(env_file: impl AsRef<Path>, out: &mut W) -> Result<String, Error> {
    factory::load_env_file(env_file)?;
    let provider = ProviderFactory::from_env()?;
    debug!(base_url = %provider.config().base_url, "provider ready");

    RequestRunner::new(provider).run(out).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{ChatResponse, Choice, FinishReason};
    use crate::Role;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Replays a canned result and records what it was asked.
    struct StubProvider {
        reply: fn() -> Result<ChatResponse, Error>,
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<ChatRequest>>>,
    }

    impl StubProvider {
        fn new(reply: fn() -> Result<ChatResponse, Error>) -> Self {
            Self {
                reply,
                calls: Arc::new(AtomicUsize::new(0)),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl ChatProvider for StubProvider {
        async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            (self.reply)()
        }
    }

    fn hello_reply() -> Result<ChatResponse, Error> {
        Ok(ChatResponse {
            choices: vec![Choice {
                index: 0,
                role: Role::Assistant,
                content: Some(
                    "Hello! An AI agent is a program that perceives and acts.".to_string(),
                ),
                finish_reason: Some(FinishReason::Stop),
            }],
            usage: None,
        })
    }

    #[test]
    fn test_greeting_request_order() {
        let request = greeting_request();
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, SYSTEM_MESSAGE);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, USER_MESSAGE);
    }

    #[test]
    fn test_run_prints_first_choice_once() {
        let provider = StubProvider::new(hello_reply);
        let calls = provider.calls.clone();
        let seen = provider.seen.clone();
        let runner = RequestRunner::new(provider);

        let mut out = Vec::new();
        let content = tokio_test::block_on(runner.run(&mut out)).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello! An AI agent is a program that perceives and acts.\n"
        );
        assert_eq!(content, "Hello! An AI agent is a program that perceives and acts.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(seen.lock().unwrap()[0], greeting_request());
    }

    #[test]
    fn test_api_error_prints_nothing() {
        let runner = RequestRunner::new(StubProvider::new(|| {
            Err(Error::api(429, "You exceeded your current quota"))
        }));

        let mut out = Vec::new();
        let err = tokio_test::block_on(runner.run(&mut out)).unwrap_err();

        assert!(matches!(err, Error::Api { status: 429, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_choices_prints_nothing() {
        let runner = RequestRunner::new(StubProvider::new(|| {
            Ok(ChatResponse {
                choices: vec![],
                usage: None,
            })
        }));

        let mut out = Vec::new();
        let err = tokio_test::block_on(runner.run(&mut out)).unwrap_err();

        assert!(matches!(err, Error::EmptyResponse));
        assert!(out.is_empty());
    }

    #[test]
    fn test_boxed_provider_runs() {
        let provider: Box<dyn ChatProvider> = Box::new(StubProvider::new(hello_reply));
        let runner = RequestRunner::new(provider);

        let mut out = Vec::new();
        tokio_test::block_on(runner.run(&mut out)).unwrap();
        assert!(!out.is_empty());
    }
}
