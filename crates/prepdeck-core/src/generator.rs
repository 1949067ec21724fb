//! Question sources.
//!
//! Two sources, chosen by `Mode`: rule-based sampling of the question bank,
//! and a single prompt sent to a remote model. Both return a
//! `QuestionOutcome`; neither is forced to return exactly the requested count.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::bank::QuestionBank;
use crate::error::{FailureKind, GenerationError, GenerationFailure};
use crate::model::{GenerationRequest, Mode, QuestionList, QuestionOutcome};
use crate::traits::{GenerateRequest, LlmProvider};

/// Model used for AI-powered generation unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const EMPTY_POOL_MESSAGE: &str = "No predefined questions available for given skills.";

/// Remote model settings for AI-powered generation.
#[derive(Debug, Clone, PartialEq)]
pub struct AiSettings {
    pub model: String,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: None,
            max_tokens: None,
        }
    }
}

/// The prompt sent to the remote model.
pub fn build_prompt(role: &str, skills_text: &str, count: u32) -> String {
    format!(
        "Generate {count} interview questions for a {role} role. \
         Use the following skills and experience from the candidate's resume: {skills_text}. \
         Provide only the questions in numbered list format."
    )
}

/// Split a model response into question lines.
///
/// Lines are trimmed and blank lines dropped. Numbering such as `1.` is kept
/// as the model wrote it.
pub fn parse_question_lines(text: &str) -> QuestionList {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sample up to `count` questions for the given skills.
///
/// Picks `min(count, pool size)` distinct pool positions uniformly at random.
pub fn rule_based<R: Rng + ?Sized>(
    bank: &QuestionBank,
    skills_text: &str,
    count: u32,
    rng: &mut R,
) -> QuestionOutcome {
    let pool = bank.pool_for(skills_text);
    if pool.is_empty() {
        return QuestionOutcome::Degraded(GenerationFailure::new(
            FailureKind::EmptyQuestionPool,
            EMPTY_POOL_MESSAGE,
        ));
    }

    let amount = (count as usize).min(pool.len());
    debug!(pool = pool.len(), amount, "sampling question bank");

    let questions = rand::seq::index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].to_string())
        .collect();
    QuestionOutcome::Questions(questions)
}

/// Ask the remote model once for questions.
pub async fn ai_powered(
    provider: &dyn LlmProvider,
    settings: &AiSettings,
    role: &str,
    skills_text: &str,
    count: u32,
) -> QuestionOutcome {
    let request = GenerateRequest {
        model: settings.model.clone(),
        prompt: build_prompt(role, skills_text, count),
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    };

    match provider.generate(&request).await {
        Ok(response) => {
            let questions = parse_question_lines(&response.content);
            if questions.is_empty() {
                QuestionOutcome::Degraded(GenerationFailure::new(
                    FailureKind::EmptyRemoteResponse,
                    format!("No response from {}. Try again.", provider.name()),
                ))
            } else {
                info!(
                    provider = provider.name(),
                    model = %response.model,
                    latency_ms = response.latency_ms,
                    lines = questions.len(),
                    "received questions"
                );
                QuestionOutcome::Questions(questions)
            }
        }
        Err(e) => QuestionOutcome::Degraded(GenerationFailure::new(
            FailureKind::RemoteInferenceFailure,
            format!("Error: {e:#}"),
        )),
    }
}

/// Dispatches a `GenerationRequest` to the source its mode names.
pub struct QuestionGenerator<'a> {
    bank: &'a QuestionBank,
    settings: AiSettings,
}

impl<'a> QuestionGenerator<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            settings: AiSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AiSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Run one request.
    ///
    /// `connect` builds the remote client from the API key. It is only
    /// invoked in AI-powered mode and only when a key is present; a failure
    /// there degrades the outcome like a failed call does.
    pub async fn generate<C, R>(
        &self,
        request: &GenerationRequest,
        connect: C,
        rng: &mut R,
    ) -> Result<QuestionOutcome, GenerationError>
    where
        C: FnOnce(&str) -> anyhow::Result<Box<dyn LlmProvider>>,
        R: Rng + ?Sized,
    {
        if request.requested_count == 0 {
            return Err(GenerationError::InvalidCount(request.requested_count));
        }

        let outcome = match request.mode {
            Mode::RuleBased => rule_based(
                self.bank,
                &request.skills_text,
                request.requested_count,
                rng,
            ),
            Mode::AiPowered => {
                let api_key = request
                    .credential()
                    .ok_or(GenerationError::MissingCredential)?;
                match connect(api_key) {
                    Ok(provider) => {
                        ai_powered(
                            provider.as_ref(),
                            &self.settings,
                            &request.role,
                            &request.skills_text,
                            request.requested_count,
                        )
                        .await
                    }
                    Err(e) => QuestionOutcome::Degraded(GenerationFailure::new(
                        FailureKind::RemoteInferenceFailure,
                        format!("Error: {e:#}"),
                    )),
                }
            }
        };

        if let QuestionOutcome::Degraded(failure) = &outcome {
            warn!(mode = %request.mode, kind = %failure.kind, "{}", failure.message);
        }
        Ok(outcome)
    }
}
