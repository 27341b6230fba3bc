//! Expense categorizer tool

use std::sync::Arc;
use tracing::error;

use super::ToolState;
use crate::gateway::AdvisoryGateway;

pub const VALIDATION_MESSAGE: &str = "Please enter an expense description.";
pub const FAILURE_MESSAGE: &str = "Sorry, we couldn't categorize this expense.";

pub struct CategorizerTool {
    gateway: Arc<AdvisoryGateway>,
    state: ToolState<String>,
}

impl CategorizerTool {
    pub fn new(gateway: Arc<AdvisoryGateway>) -> Self {
        Self {
            gateway,
            state: ToolState::new(""),
        }
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.state.input = value.into();
    }

    pub fn state(&self) -> &ToolState<String> {
        &self.state
    }

    /// Validate the description and run categorization.
    ///
    /// An empty description (after trimming) fails locally; the gateway is
    /// never invoked.
    pub async fn submit(&mut self) {
        if self.state.is_loading {
            return;
        }

        let description = self.state.input.trim().to_string();
        if description.is_empty() {
            self.state.fail(VALIDATION_MESSAGE);
            return;
        }

        self.state.begin();

        match self.gateway.categorize_expense(&description).await {
            Ok(label) => self.state.succeed(label),
            Err(e) => {
                error!("Expense categorization failed: {}", e);
                self.state.fail(FAILURE_MESSAGE);
            }
        }
    }
}
