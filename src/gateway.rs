//! Advisory gateway
//!
//! Uniform contract over the three advisory operations. Provider
//! availability is decided once at construction: a configured credential
//! selects the Gemini provider, otherwise every operation degrades to its
//! local fallback. The gateway also owns the cross-cutting post-processing:
//! textual replies are trimmed, budget allocations get `spent = 0`.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AdvisoryConfig;
use crate::models::BudgetItem;
use crate::provider::{AdvisoryProvider, FallbackProvider, GeminiProvider};
use crate::Result;

pub struct AdvisoryGateway {
    provider: Arc<dyn AdvisoryProvider>,
}

impl AdvisoryGateway {
    pub fn from_config(config: &AdvisoryConfig) -> Self {
        let provider: Arc<dyn AdvisoryProvider> = match &config.gemini_api_key {
            Some(key) => {
                info!("Advisory provider: gemini ({})", config.model);
                Arc::new(GeminiProvider::new(key.clone(), config.model.clone()))
            }
            None => {
                warn!("GEMINI_API_KEY is not set. Advisory operations will use local fallbacks.");
                Arc::new(FallbackProvider)
            }
        };

        Self { provider }
    }

    /// Build a gateway over an explicit provider implementation.
    pub fn with_provider(provider: Arc<dyn AdvisoryProvider>) -> Self {
        Self { provider }
    }

    /// Generate a monthly budget for the given income.
    ///
    /// Callers validate before calling: `monthly_income` is finite and
    /// greater than zero.
    pub async fn generate_budget(&self, monthly_income: f64) -> Result<Vec<BudgetItem>> {
        let allocations = self.provider.generate_budget(monthly_income).await?;

        Ok(allocations
            .into_iter()
            .map(BudgetItem::from_allocation)
            .collect())
    }

    /// Name a category for an expense description (non-empty after trim).
    pub async fn categorize_expense(&self, description: &str) -> Result<String> {
        let label = self.provider.categorize_expense(description).await?;
        Ok(label.trim().to_string())
    }

    /// Answer a chat message (non-empty after trim) in the advisor persona.
    pub async fn get_advisory_reply(&self, message: &str) -> Result<String> {
        let reply = self.provider.advisory_reply(message).await?;
        Ok(reply.trim().to_string())
    }
}
