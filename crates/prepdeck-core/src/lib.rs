//! prepdeck-core: question bank, question generation, and provider traits.
//!
//! This crate defines the request/outcome data model, the static question
//! bank, and the two question sources (rule-based sampling and a single
//! LLM call) that the rest of prepdeck builds on.

pub mod bank;
pub mod error;
pub mod generator;
pub mod model;
pub mod traits;
