//! Budget generator tool

use std::sync::Arc;
use tracing::error;

use super::ToolState;
use crate::error::AdvisoryError;
use crate::gateway::AdvisoryGateway;
use crate::models::BudgetItem;

pub const VALIDATION_MESSAGE: &str = "Please enter a valid monthly income.";
pub const FAILURE_MESSAGE: &str = "Sorry, we couldn't generate a budget at this time.";

pub struct BudgetTool {
    gateway: Arc<AdvisoryGateway>,
    state: ToolState<Vec<BudgetItem>>,
}

impl BudgetTool {
    pub fn new(gateway: Arc<AdvisoryGateway>) -> Self {
        Self {
            gateway,
            state: ToolState::new(""),
        }
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.state.input = value.into();
    }

    pub fn state(&self) -> &ToolState<Vec<BudgetItem>> {
        &self.state
    }

    /// Validate the income field and run budget generation.
    ///
    /// Non-numeric or non-positive income fails locally with a field-level
    /// message; the gateway is never invoked for invalid input.
    pub async fn submit(&mut self) {
        if self.state.is_loading {
            return;
        }

        let monthly_income = match parse_income(&self.state.input) {
            Ok(value) => value,
            Err(AdvisoryError::Validation(message)) => {
                self.state.fail(message);
                return;
            }
            Err(_) => {
                self.state.fail(VALIDATION_MESSAGE);
                return;
            }
        };

        self.state.begin();

        match self.gateway.generate_budget(monthly_income).await {
            Ok(items) => self.state.succeed(items),
            Err(e) => {
                error!("Budget generation failed: {}", e);
                self.state.fail(FAILURE_MESSAGE);
            }
        }
    }
}

/// A monthly income must parse as a finite number greater than zero.
fn parse_income(raw: &str) -> crate::Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(AdvisoryError::Validation(VALIDATION_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::testing::ScriptedProvider;

    #[test]
    fn test_parse_income() {
        assert_eq!(parse_income(" 5000 ").unwrap(), 5000.0);
        assert!(matches!(
            parse_income("-5"),
            Err(AdvisoryError::Validation(_))
        ));
        assert!(matches!(
            parse_income("abc"),
            Err(AdvisoryError::Validation(_))
        ));
        assert!(matches!(
            parse_income("0"),
            Err(AdvisoryError::Validation(_))
        ));
        // Overflowing literals parse to infinity and are rejected
        assert!(parse_income("1e999").is_err());
    }

    fn tool_with(provider: Arc<ScriptedProvider>) -> BudgetTool {
        BudgetTool::new(Arc::new(AdvisoryGateway::with_provider(provider)))
    }

    #[tokio::test]
    async fn test_negative_income_never_reaches_gateway() {
        let provider = Arc::new(ScriptedProvider::replying(""));
        let mut tool = tool_with(provider.clone());

        tool.set_input("-5");
        tool.submit().await;

        assert_eq!(provider.call_count(), 0);
        assert_eq!(tool.state().error.as_deref(), Some(VALIDATION_MESSAGE));
        assert!(!tool.state().is_loading);
    }

    #[tokio::test]
    async fn test_non_numeric_income_never_reaches_gateway() {
        let provider = Arc::new(ScriptedProvider::replying(""));
        let mut tool = tool_with(provider.clone());

        tool.set_input("abc");
        tool.submit().await;

        assert_eq!(provider.call_count(), 0);
        assert_eq!(tool.state().error.as_deref(), Some(VALIDATION_MESSAGE));
    }

    #[tokio::test]
    async fn test_successful_generation_stores_items() {
        let provider = Arc::new(ScriptedProvider::replying(""));
        let mut tool = tool_with(provider.clone());

        tool.set_input("5000");
        tool.submit().await;

        let state = tool.state();
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        let items = state.result.as_ref().unwrap();
        assert!(items.iter().all(|item| item.spent == 0.0));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_uses_generic_message() {
        let mut tool = tool_with(Arc::new(ScriptedProvider::failing()));

        tool.set_input("5000");
        tool.submit().await;

        let state = tool.state();
        assert!(!state.is_loading);
        assert!(state.result.is_none());
        assert_eq!(state.error.as_deref(), Some(FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_a_no_op() {
        let provider = Arc::new(ScriptedProvider::replying(""));
        let mut tool = tool_with(provider.clone());

        tool.set_input("5000");
        tool.state.is_loading = true; // request already in flight
        tool.submit().await;

        assert_eq!(provider.call_count(), 0);
    }
}
