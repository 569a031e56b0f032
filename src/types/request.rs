use super::message::Message;
use super::prompt::Prompt;

/// A single chat-completion request: the model identifier and its messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Create a request for `model` from the messages of `prompt`.
    pub fn from_prompt(model: impl Into<String>, prompt: &Prompt) -> Self {
        Self {
            model: model.into(),
            messages: prompt.messages().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prompt_copies_messages() {
        let prompt = Prompt::system("sys").with_user("usr");
        let request = ChatRequest::from_prompt("gpt-4o-mini", &prompt);

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages, prompt.messages());
    }
}
