//! Startup configuration
//!
//! The provider credential is read from the environment exactly once at
//! startup and handed to the gateway at construction. Nothing consults
//! global state afterwards; the config value is read-only for the lifetime
//! of the process.

use std::env;

/// Model used for provider-backed calls unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    /// Gemini API key. `None` switches every advisory operation to its
    /// local fallback; the system must keep working without it.
    pub gemini_api_key: Option<String>,
    /// Model invoked for provider-backed calls.
    pub model: String,
    /// Port for the REST API server.
    pub port: u16,
}

impl AdvisoryConfig {
    /// Load configuration from the environment.
    ///
    /// A blank or placeholder `GEMINI_API_KEY` counts as absent.
    pub fn from_env() -> Self {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != "your_gemini_api_key_here");

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let port = env::var("PORT")
            .or_else(|_| env::var("API_PORT"))
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            gemini_api_key,
            model,
            port,
        }
    }

    pub fn has_provider(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
