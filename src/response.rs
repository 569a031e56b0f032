//! Response handling for chat completions.

use crate::{Error, Role};
use serde::{Deserialize, Serialize};

/// A complete chat-completion response.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    /// Candidate replies, in the order the endpoint returned them.
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

/// One candidate reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub index: u32,
    pub role: Role,
    /// Text of the reply. `None` when the endpoint returned no text.
    pub content: Option<String>,
    pub finish_reason: Option<FinishReason>,
}

/// Reason why generation finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
    Other(String),
}

impl FinishReason {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "stop" => FinishReason::Stop,
            "length" => FinishReason::Length,
            "tool_calls" | "function_call" => FinishReason::ToolCalls,
            "content_filter" => FinishReason::ContentFilter,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatResponse {
    /// The first choice, or [`Error::EmptyResponse`] if there are none.
    pub fn first_choice(&self) -> Result<&Choice, Error> {
        self.choices.first().ok_or(Error::EmptyResponse)
    }

    /// Text content of the first choice.
    pub fn first_content(&self) -> Result<&str, Error> {
        let choice = self.first_choice()?;
        choice
            .content
            .as_deref()
            .ok_or(Error::MissingContent {
                index: choice.index,
            })
    }
}
