//! Advisor chat tool
//!
//! The transcript is the only conversational memory: the user message is
//! appended optimistically, and removed again if the provider call fails so
//! the history only ever shows completed exchanges.

use std::sync::Arc;
use tracing::error;

use super::ToolState;
use crate::gateway::AdvisoryGateway;
use crate::models::ChatMessage;

pub const GREETING: &str =
    "I'm your AI Financial Advisor. Ask me anything about personal finance!";
pub const FAILURE_MESSAGE: &str = "Sorry, I couldn't get a response. Please try again.";

pub struct ChatTool {
    gateway: Arc<AdvisoryGateway>,
    history: Vec<ChatMessage>,
    state: ToolState<String>,
}

impl ChatTool {
    pub fn new(gateway: Arc<AdvisoryGateway>) -> Self {
        Self {
            gateway,
            history: vec![ChatMessage::ai(GREETING)],
            state: ToolState::new(""),
        }
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.state.input = value.into();
    }

    pub fn state(&self) -> &ToolState<String> {
        &self.state
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send the current input to the advisor.
    ///
    /// Submissions while a request is in flight are ignored, as are empty
    /// inputs. On failure the optimistically-appended user message is rolled
    /// back and a generic error is set; `is_loading` is false on every
    /// terminal path.
    pub async fn submit(&mut self) {
        if self.state.is_loading {
            return;
        }

        let message = self.state.input.trim().to_string();
        if message.is_empty() {
            return;
        }

        self.history.push(ChatMessage::user(message.clone()));
        self.state.input.clear();
        self.state.begin();

        match self.gateway.get_advisory_reply(&message).await {
            Ok(reply) => {
                self.history.push(ChatMessage::ai(reply.clone()));
                self.state.succeed(reply);
            }
            Err(e) => {
                error!("Advisory reply failed: {}", e);
                self.history.pop();
                self.state.fail(FAILURE_MESSAGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;
    use crate::provider::testing::ScriptedProvider;

    fn tool_with(provider: Arc<ScriptedProvider>) -> ChatTool {
        ChatTool::new(Arc::new(AdvisoryGateway::with_provider(provider)))
    }

    #[tokio::test]
    async fn test_history_starts_with_greeting() {
        let tool = tool_with(Arc::new(ScriptedProvider::replying("")));

        assert_eq!(tool.history().len(), 1);
        assert_eq!(tool.history()[0].sender, Sender::Ai);
        assert_eq!(tool.history()[0].text, GREETING);
    }

    #[tokio::test]
    async fn test_successful_exchange_appends_both_messages() {
        let provider = Arc::new(ScriptedProvider::replying("Build an emergency fund first."));
        let mut tool = tool_with(provider);

        tool.set_input("How do I save more?");
        tool.submit().await;

        let history = tool.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].sender, Sender::User);
        assert_eq!(history[1].text, "How do I save more?");
        assert_eq!(history[2].sender, Sender::Ai);
        assert_eq!(history[2].text, "Build an emergency fund first.");

        assert!(tool.state().input.is_empty(), "input cleared on submit");
        assert!(!tool.state().is_loading);
        assert!(tool.state().error.is_none());
    }

    #[tokio::test]
    async fn test_failure_rolls_back_user_message() {
        let mut tool = tool_with(Arc::new(ScriptedProvider::failing()));

        tool.set_input("How do I save more?");
        tool.submit().await;

        // The optimistic append is undone: only the greeting remains
        assert_eq!(tool.history().len(), 1);
        assert_eq!(tool.state().error.as_deref(), Some(FAILURE_MESSAGE));
        assert!(!tool.state().is_loading);
    }

    #[tokio::test]
    async fn test_empty_input_is_a_no_op() {
        let provider = Arc::new(ScriptedProvider::replying("hi"));
        let mut tool = tool_with(provider.clone());

        tool.set_input("   ");
        tool.submit().await;

        assert_eq!(provider.call_count(), 0);
        assert_eq!(tool.history().len(), 1);
        assert!(tool.state().error.is_none());
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_a_no_op() {
        let provider = Arc::new(ScriptedProvider::replying("hi"));
        let mut tool = tool_with(provider.clone());

        tool.set_input("How do I save more?");
        tool.state.is_loading = true;
        tool.submit().await;

        assert_eq!(provider.call_count(), 0);
        assert_eq!(tool.history().len(), 1, "no optimistic append while loading");
    }
}
