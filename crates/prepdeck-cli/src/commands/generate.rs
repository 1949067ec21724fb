//! The `prepdeck generate` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use prepdeck_core::bank::load_bank;
use prepdeck_core::error::GenerationError;
use prepdeck_core::generator::QuestionGenerator;
use prepdeck_core::model::{GenerationRequest, Mode};
use prepdeck_export::export;
use prepdeck_ingest::{extract_resume_text, preview, UploadedFile, PREVIEW_CHARS};
use prepdeck_providers::config::{load_config_from, GEMINI_KEY_ENV};
use prepdeck_providers::create_provider;

pub struct GenerateArgs {
    pub role: Option<String>,
    pub skills: Option<String>,
    pub count: Option<u32>,
    pub mode: Option<String>,
    pub api_key: Option<String>,
    pub resume: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub bank: Option<PathBuf>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;

    let role = args.role.unwrap_or_else(|| config.default_role.clone());
    let skills = args
        .skills
        .unwrap_or_else(|| config.default_skills.clone());
    let count = args.count.unwrap_or(config.default_count);
    let mode = match &args.mode {
        Some(m) => m.parse::<Mode>().map_err(anyhow::Error::msg)?,
        None => config.default_mode,
    };
    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    let bank = load_bank(args.bank.as_deref().or(config.question_bank.as_deref()))?;

    // A resume, when given, replaces the skills string as generation input
    // and as the summary printed in the PDF.
    let resume_text = match &args.resume {
        Some(path) => {
            let text = extract_resume_text(&UploadedFile::from_path(path)?)?;
            println!("Extracted resume content:");
            println!("{}", preview(&text, PREVIEW_CHARS));
            println!();
            Some(text)
        }
        None => None,
    };
    let input_text = resume_text.filter(|t| !t.is_empty()).unwrap_or(skills);

    let api_key = match mode {
        Mode::AiPowered => args.api_key.or_else(|| config.gemini.api_key.clone()),
        Mode::RuleBased => None,
    };
    let request = GenerationRequest::new(role.as_str(), input_text.as_str(), count, mode)?
        .with_api_key(api_key);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(%role, %mode, count, "generating questions");
    let generator = QuestionGenerator::new(&bank).with_settings(config.gemini.ai_settings());
    let outcome = match generator
        .generate(&request, |key| create_provider(&config.gemini, key), &mut rng)
        .await
    {
        Ok(outcome) => outcome,
        Err(GenerationError::MissingCredential) => anyhow::bail!(
            "Please enter a Gemini API key (--api-key, [gemini].api_key, or {GEMINI_KEY_ENV})."
        ),
        Err(e) => return Err(e.into()),
    };

    let questions = outcome.into_lines();
    if questions.is_empty() {
        println!("No questions generated.");
        return Ok(());
    }

    println!("Generated interview questions:");
    for (i, question) in questions.iter().enumerate() {
        println!("{}. {question}", i + 1);
    }

    std::fs::create_dir_all(&output)?;
    let artifact = export(&questions, &role, &input_text)?;
    let delivered = artifact.deliver_to(&output)?;
    println!();
    println!("Interview prep PDF: {}", delivered.display());

    Ok(())
}
