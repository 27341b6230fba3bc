//! Gemini-backed advisory provider
//!
//! Turns each advisory operation into a single generateContent call. Budget
//! generation constrains the response to a JSON array of category/amount
//! pairs; the other two operations are plain-text exchanges.

use async_trait::async_trait;
use serde_json::json;
use tracing::error;

use crate::error::AdvisoryError;
use crate::gemini::GeminiClient;
use crate::models::BudgetAllocation;
use crate::provider::AdvisoryProvider;
use crate::Result;

const ADVISOR_PERSONA: &str = "You are a friendly and helpful financial advisor chatbot.";

pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: GeminiClient::new(api_key, model),
        }
    }

    /// Response schema for budget generation: an ordered list of
    /// `{category, allocated}` records.
    fn budget_schema() -> serde_json::Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "category": {
                        "type": "STRING",
                        "description": "The name of the budget category (e.g., \"Groceries\", \"Entertainment\")."
                    },
                    "allocated": {
                        "type": "NUMBER",
                        "description": "The suggested monthly dollar amount for this category."
                    }
                },
                "required": ["category", "allocated"]
            }
        })
    }
}

#[async_trait]
impl AdvisoryProvider for GeminiProvider {
    async fn generate_budget(&self, monthly_income: f64) -> Result<Vec<BudgetAllocation>> {
        let prompt = format!(
            "Generate a simple monthly budget for someone with a monthly income of ${}. \
             Use standard categories like Housing, Groceries, Savings, etc. \
             Follow the 50/30/20 rule as a guideline but be realistic.",
            monthly_income
        );

        let raw = self
            .client
            .generate_structured(&prompt, Self::budget_schema())
            .await?;

        parse_budget_response(&raw)
    }

    async fn categorize_expense(&self, description: &str) -> Result<String> {
        let prompt = format!(
            "Categorize the following expense into a simple, common category \
             (e.g., \"Groceries\", \"Entertainment\", \"Utilities\", \"Shopping\", \
             \"Transportation\", \"Health\"): \"{}\". Respond with only the category name.",
            description
        );

        self.client.generate(&prompt, None).await
    }

    async fn advisory_reply(&self, message: &str) -> Result<String> {
        let prompt = format!(
            "A user asked: \"{}\". Provide a concise and helpful answer suitable \
             for a chat interface.",
            message
        );

        self.client.generate(&prompt, Some(ADVISOR_PERSONA)).await
    }
}

/// A budget response that does not match the requested structure is a
/// provider error, not a crash.
fn parse_budget_response(raw: &str) -> Result<Vec<BudgetAllocation>> {
    serde_json::from_str::<Vec<BudgetAllocation>>(raw.trim()).map_err(|e| {
        error!("Budget response did not match the expected structure: {}", e);
        AdvisoryError::Provider(format!("malformed budget response: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_response() {
        let raw = r#"[
            { "category": "Housing", "allocated": 1500.0 },
            { "category": "Savings", "allocated": 1000.0 }
        ]"#;

        let allocations = parse_budget_response(raw).unwrap();
        assert_eq!(allocations.len(), 2);
        assert_eq!(allocations[0].category, "Housing");
        assert_eq!(allocations[1].allocated, 1000.0);
    }

    #[test]
    fn test_parse_budget_response_tolerates_whitespace() {
        let raw = "\n  [{ \"category\": \"Housing\", \"allocated\": 900 }]  \n";
        let allocations = parse_budget_response(raw).unwrap();
        assert_eq!(allocations.len(), 1);
    }

    #[test]
    fn test_malformed_budget_response_is_provider_error() {
        let raw = "Here is your budget: Housing $1500";
        let err = parse_budget_response(raw).unwrap_err();

        assert!(matches!(err, AdvisoryError::Provider(_)));
    }

    #[test]
    fn test_budget_schema_requires_both_fields() {
        let schema = GeminiProvider::budget_schema();
        let required = schema["items"]["required"].as_array().unwrap();

        assert!(required.iter().any(|v| v == "category"));
        assert!(required.iter().any(|v| v == "allocated"));
    }
}
