//! Core data models for the advisory toolkit

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Budget =================
//

/// Category/amount pair as produced by a provider, before the gateway
/// attaches spending state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub category: String,
    pub allocated: f64,
}

/// One line of a generated monthly budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
}

impl BudgetItem {
    /// Freshly generated budgets start with nothing spent.
    pub fn from_allocation(allocation: BudgetAllocation) -> Self {
        Self {
            category: allocation.category,
            allocated: allocation.allocated,
            spent: 0.0,
        }
    }
}

//
// ================= Chat =================
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// One entry in the chat transcript. The transcript is append-only except
/// for the rollback of an unanswered user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sender::User => "user",
            Sender::Ai => "ai",
        };
        write!(f, "{}", s)
    }
}
