use crate::{ChatRequest, ChatResponse, Error};

/// A transport that can answer a chat-completion request.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync + 'static {
    /// Send one request and return the decoded response.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error>;
}

#[async_trait::async_trait]
impl<P: ChatProvider + ?Sized> ChatProvider for Box<P> {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
        (**self).complete(request).await
    }
}
