//! Spendify Advisory Toolkit
//!
//! Backend core for the Spendify personal-finance demo:
//! - Advisory gateway wrapping the Gemini API, with local fallbacks when no
//!   credential is configured
//! - Per-tool interaction controllers (budget generator, expense
//!   categorizer, advisor chat)
//! - REST API exposing the three operations to the frontend
//!
//! FLOW:
//! INPUT → VALIDATE → GATEWAY → PROVIDER | FALLBACK → STATE UPDATE

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod models;
pub mod provider;
pub mod tools;

pub use error::Result;

// Re-export common types
pub use models::*;
