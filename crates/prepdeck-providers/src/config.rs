//! Configuration loading and provider factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use prepdeck_core::generator::{AiSettings, DEFAULT_MODEL};
use prepdeck_core::model::{Mode, DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};
use prepdeck_core::traits::LlmProvider;

use crate::gemini::GeminiProvider;

/// Environment variable that overrides the Gemini API key.
pub const GEMINI_KEY_ENV: &str = "PREPDECK_GEMINI_KEY";

/// Gemini connection settings.
///
/// Note: Custom Debug impl masks the API key to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
    /// Request timeout; the HTTP client's default when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            temperature: None,
            max_output_tokens: None,
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Generation settings handed to the question generator.
    pub fn ai_settings(&self) -> AiSettings {
        AiSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_output_tokens,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Top-level prepdeck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepdeckConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default = "default_mode")]
    pub default_mode: Mode,
    #[serde(default = "default_count")]
    pub default_count: u32,
    #[serde(default = "default_role")]
    pub default_role: String,
    #[serde(default = "default_skills")]
    pub default_skills: String,
    /// Extra question bank merged into the built-in one.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    /// Where exported PDFs are delivered.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_mode() -> Mode {
    Mode::RuleBased
}
fn default_count() -> u32 {
    DEFAULT_QUESTION_COUNT
}
fn default_role() -> String {
    "Data Scientist".to_string()
}
fn default_skills() -> String {
    "python, sql, ml".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for PrepdeckConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            default_mode: default_mode(),
            default_count: default_count(),
            default_role: default_role(),
            default_skills: default_skills(),
            question_bank: None,
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        // Substituted values are not scanned again.
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `prepdeck.toml` in the current directory
/// 2. `~/.config/prepdeck/config.toml`
///
/// Environment variable override: `PREPDECK_GEMINI_KEY`.
pub fn load_config() -> Result<PrepdeckConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<PrepdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("prepdeck.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<PrepdeckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => PrepdeckConfig::default(),
    };

    if let Ok(key) = std::env::var(GEMINI_KEY_ENV) {
        config.gemini.api_key = Some(key);
    }

    config.gemini.api_key = config
        .gemini
        .api_key
        .as_deref()
        .map(resolve_env_vars)
        .filter(|k| !k.trim().is_empty());
    config.gemini.base_url = config.gemini.base_url.as_deref().map(resolve_env_vars);

    anyhow::ensure!(
        (MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(&config.default_count),
        "default_count must be between {MIN_QUESTION_COUNT} and {MAX_QUESTION_COUNT}, got {}",
        config.default_count
    );

    tracing::debug!(path = ?config_path, gemini = ?config.gemini, "loaded config");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("prepdeck"))
}

/// Create a Gemini provider for `api_key` from its configuration.
pub fn create_provider(config: &GeminiConfig, api_key: &str) -> Result<Box<dyn LlmProvider>> {
    let provider = GeminiProvider::new(api_key, config.base_url.clone(), config.timeout_secs)?;
    Ok(Box::new(provider))
}
