//! prepdeck-providers: LLM provider integrations.
//!
//! Implements the `LlmProvider` trait for Google Gemini, plus a mock provider
//! for tests, and loads the prepdeck configuration file.

pub mod config;
pub mod gemini;
pub mod mock;

pub use config::{create_provider, load_config, GeminiConfig, PrepdeckConfig};
pub use prepdeck_core::error::ProviderError;
