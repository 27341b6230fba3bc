//! Tool interaction controllers
//!
//! One state machine per advisory tool:
//! Idle → Loading → {Success, Failed} → Idle
//!
//! Each controller owns its input, loading flag, result and error, validates
//! locally before touching the gateway, and guards against overlapping
//! submissions. Tools are independent; no cross-tool coordination exists.

pub mod budget;
pub mod categorize;
pub mod chat;

pub use budget::BudgetTool;
pub use categorize::CategorizerTool;
pub use chat::ChatTool;

/// Request-scoped state shared by every tool.
///
/// `is_loading` and a populated `error` are never both set while a request
/// is in flight; `result` is discarded when a new request begins.
#[derive(Debug, Clone)]
pub struct ToolState<T> {
    pub input: String,
    pub is_loading: bool,
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ToolState<T> {
    pub fn new(initial_input: impl Into<String>) -> Self {
        Self {
            input: initial_input.into(),
            is_loading: false,
            result: None,
            error: None,
        }
    }

    /// Move into the loading state, discarding the previous outcome.
    pub(crate) fn begin(&mut self) {
        self.is_loading = true;
        self.result = None;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, result: T) {
        self.is_loading = false;
        self.result = Some(result);
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.result = None;
        self.error = Some(message.into());
    }
}
