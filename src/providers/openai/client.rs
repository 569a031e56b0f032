use super::types::{ChatCompletionRequest, ChatCompletionResponse, OpenAIError};
use crate::provider::ChatProvider;
use crate::{ChatRequest, ChatResponse, ClientConfig, Credentials, Error};
use reqwest::Client;
use tracing::{debug, warn};

/// OpenAI Chat Completions provider.
pub struct OpenAIProvider {
    client: Client,
    credentials: Credentials,
    config: ClientConfig,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider against the public API.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new OpenAI provider with custom base URL.
    pub fn new_with_base_url(credentials: Credentials, base_url: String) -> Result<Self, Error> {
        Self::with_config(credentials, ClientConfig::with_base_url(base_url))
    }

    /// Create a new OpenAI provider with full endpoint configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, Error> {
        // No client-side timeout: the call waits for whatever the transport allows.
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Turn a non-success response body into an [`Error::Api`].
    fn api_error(status: u16, body: &str) -> Error {
        let message = match serde_json::from_str::<OpenAIError>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) => body.to_string(),
        };
        Error::api(status, message)
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenAIProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
        let url = self.config.chat_completions_url();
        let body = ChatCompletionRequest {
            model: &request.model,
            messages: &request.messages,
        };

        debug!(
            %url,
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let mut builder = self
            .client
            .post(&url)
            .bearer_auth(self.credentials.api_key())
            .json(&body);
        if let Some(organization) = &self.config.organization {
            builder = builder.header("OpenAI-Organization", organization);
        }
        if let Some(project) = &self.config.project {
            builder = builder.header("OpenAI-Project", project);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "chat completion request rejected");
            return Err(Self::api_error(status.as_u16(), &text));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;
        debug!(
            id = parsed.id.as_deref().unwrap_or("-"),
            model = parsed.model.as_deref().unwrap_or("-"),
            choices = parsed.choices.len(),
            "received chat completion"
        );

        Ok(parsed.into())
    }
}
