//! Core data model types for prepdeck.
//!
//! A `GenerationRequest` is built per user interaction and answered with a
//! `QuestionOutcome`. Nothing here outlives a single request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, GenerationFailure};

/// Prefix shown in front of every user-facing warning line.
pub const WARNING_MARKER: &str = "⚠️";

/// Smallest question count the CLI accepts.
pub const MIN_QUESTION_COUNT: u32 = 1;
/// Largest question count the CLI accepts.
pub const MAX_QUESTION_COUNT: u32 = 10;
/// Question count used when none is given.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// An ordered list of questions as shown to the user and written to the PDF.
pub type QuestionList = Vec<String>;

/// Where questions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Sample the static question bank; no network access.
    RuleBased,
    /// Ask a hosted model with a single templated prompt.
    AiPowered,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::RuleBased => write!(f, "rule-based"),
            Mode::AiPowered => write!(f, "ai-powered"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rule" | "rule-based" | "rules" => Ok(Mode::RuleBased),
            "ai" | "ai-powered" | "llm" => Ok(Mode::AiPowered),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// One generation request.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Job role the questions target (e.g. "Data Scientist").
    pub role: String,
    /// Comma-separated skills, or the text extracted from a resume.
    pub skills_text: String,
    /// How many questions to ask for. Sources may return fewer or more.
    pub requested_count: u32,
    pub mode: Mode,
    /// Required iff `mode` is `AiPowered`.
    pub api_key: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        role: impl Into<String>,
        skills_text: impl Into<String>,
        requested_count: u32,
        mode: Mode,
    ) -> Result<Self, GenerationError> {
        if requested_count < MIN_QUESTION_COUNT {
            return Err(GenerationError::InvalidCount(requested_count));
        }
        Ok(Self {
            role: role.into(),
            skills_text: skills_text.into(),
            requested_count,
            mode,
            api_key: None,
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// The API key, if one was supplied and is not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("role", &self.role)
            .field("skills_text", &self.skills_text)
            .field("requested_count", &self.requested_count)
            .field("mode", &self.mode)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

/// The result of running a question source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOutcome {
    /// Questions in display order.
    Questions(QuestionList),
    /// The source could not produce questions.
    Degraded(GenerationFailure),
}

impl QuestionOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, QuestionOutcome::Degraded(_))
    }

    /// Lines to display and export. A degraded outcome becomes a single
    /// warning line.
    pub fn into_lines(self) -> QuestionList {
        match self {
            QuestionOutcome::Questions(questions) => questions,
            QuestionOutcome::Degraded(failure) => {
                vec![format!("{WARNING_MARKER} {}", failure.message)]
            }
        }
    }
}
