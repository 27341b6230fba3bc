//! Provider trait and implementations
//!
//! The gateway talks to "a provider" through this trait so the Gemini-backed
//! implementation and the credential-less fallback are interchangeable and
//! independently testable.

use crate::models::BudgetAllocation;
use crate::Result;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::debug;

pub mod gemini;
pub use gemini::GeminiProvider;

/// Capability backing the three advisory operations.
///
/// Inputs are pre-validated by the callers: income is finite and positive,
/// descriptions and messages are non-empty after trimming.
#[async_trait]
pub trait AdvisoryProvider: Send + Sync {
    /// Produce category/amount pairs for a monthly income.
    async fn generate_budget(&self, monthly_income: f64) -> Result<Vec<BudgetAllocation>>;

    /// Name a single common-sense category for an expense description.
    async fn categorize_expense(&self, description: &str) -> Result<String>;

    /// Answer a user message in a financial-advisor persona.
    async fn advisory_reply(&self, message: &str) -> Result<String>;
}

/// Percentage split applied to monthly income when no credential is
/// configured. Shares sum to 100%.
const FALLBACK_BUDGET_SPLIT: &[(&str, f64)] = &[
    ("Housing", 0.30),
    ("Utilities", 0.05),
    ("Groceries", 0.15),
    ("Transport", 0.10),
    ("Savings", 0.20),
    ("Entertainment", 0.10),
    ("Miscellaneous", 0.10),
];

/// Fixed vocabulary for credential-less categorization.
const FALLBACK_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Shopping",
    "Entertainment",
    "Utilities",
    "Transportation",
];

const FALLBACK_REPLY: &str = "This is a placeholder response because the API key is not configured. \
     In a real scenario, I would provide a detailed answer to your question.";

/// Local provider used when no API key is configured.
/// Keeps every tool functional without the LLM dependency.
pub struct FallbackProvider;

#[async_trait]
impl AdvisoryProvider for FallbackProvider {
    async fn generate_budget(&self, monthly_income: f64) -> Result<Vec<BudgetAllocation>> {
        debug!("Using fallback data for budget generation");

        Ok(FALLBACK_BUDGET_SPLIT
            .iter()
            .map(|(category, share)| BudgetAllocation {
                category: (*category).to_string(),
                allocated: monthly_income * share,
            })
            .collect())
    }

    async fn categorize_expense(&self, _description: &str) -> Result<String> {
        debug!("Using fallback data for expense categorization");

        let label = FALLBACK_CATEGORIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(FALLBACK_CATEGORIES[0]);

        Ok(label.to_string())
    }

    async fn advisory_reply(&self, _message: &str) -> Result<String> {
        debug!("Using fallback data for advisory reply");

        Ok(FALLBACK_REPLY.to_string())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::AdvisoryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted provider for exercising gateway and controller behavior
    /// without network access. Counts calls so tests can assert that
    /// validation failures and in-flight guards never reach the provider.
    pub(crate) struct ScriptedProvider {
        budget: Vec<BudgetAllocation>,
        text: String,
        fail: bool,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                budget: vec![
                    BudgetAllocation {
                        category: "Housing".to_string(),
                        allocated: 1500.0,
                    },
                    BudgetAllocation {
                        category: "Savings".to_string(),
                        allocated: 1000.0,
                    },
                ],
                text: text.to_string(),
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            let mut provider = Self::replying("");
            provider.fail = true;
            provider
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn record(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AdvisoryError::Provider("scripted failure".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl AdvisoryProvider for ScriptedProvider {
        async fn generate_budget(&self, _monthly_income: f64) -> Result<Vec<BudgetAllocation>> {
            self.record()?;
            Ok(self.budget.clone())
        }

        async fn categorize_expense(&self, _description: &str) -> Result<String> {
            self.record()?;
            Ok(self.text.clone())
        }

        async fn advisory_reply(&self, _message: &str) -> Result<String> {
            self.record()?;
            Ok(self.text.clone())
        }
    }
}
