//! Error types.
//!
//! `ProviderError` covers failures talking to a remote model. It lives here so
//! the generator can describe remote failures without depending on a concrete
//! provider crate. `GenerationError` is the only failure that blocks a request;
//! everything else degrades into a `GenerationFailure`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when interacting with an LLM provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Errors that stop a generation request before any question source runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// AI-powered mode was selected without an API key.
    #[error("an API key is required for AI-powered mode")]
    MissingCredential,

    /// The requested question count was zero.
    #[error("question count must be at least 1, got {0}")]
    InvalidCount(u32),
}

/// Why a question source produced a warning instead of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// None of the supplied skills matched a bank entry.
    EmptyQuestionPool,
    /// Configuring or calling the remote model failed.
    RemoteInferenceFailure,
    /// The remote call succeeded but returned no usable text.
    EmptyRemoteResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::EmptyQuestionPool => write!(f, "empty question pool"),
            FailureKind::RemoteInferenceFailure => write!(f, "remote inference failure"),
            FailureKind::EmptyRemoteResponse => write!(f, "empty remote response"),
        }
    }
}

/// A degraded generation result: the user still sees `message` as a single
/// warning entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
