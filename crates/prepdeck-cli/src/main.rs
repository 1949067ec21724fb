//! The `prepdeck` binary: argument parsing, logging setup, command dispatch.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "prepdeck",
    version,
    about = "Resume-driven interview question generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate interview questions and export them as a PDF
    Generate {
        /// Job role the questions target
        #[arg(long)]
        role: Option<String>,

        /// Comma-separated skills (e.g. "python, sql, ml")
        #[arg(long)]
        skills: Option<String>,

        /// Number of questions (1-10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
        count: Option<u32>,

        /// Question source: rule or ai
        #[arg(long)]
        mode: Option<String>,

        /// Gemini API key (AI mode only)
        #[arg(long)]
        api_key: Option<String>,

        /// Resume to extract skills and experience from (.pdf or .docx)
        #[arg(long)]
        resume: Option<PathBuf>,

        /// Directory the PDF is delivered to
        #[arg(long)]
        output: Option<PathBuf>,

        /// Extra question bank (TOML) merged into the built-in one
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Seed for rule-based sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the text extracted from a resume
    Extract {
        /// Resume file (.pdf or .docx)
        #[arg(long)]
        resume: PathBuf,
    },

    /// List the skill tags in the question bank
    Skills {
        /// Extra question bank (TOML) merged into the built-in one
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("prepdeck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            role,
            skills,
            count,
            mode,
            api_key,
            resume,
            output,
            bank,
            seed,
            config,
        } => {
            commands::generate::execute(commands::generate::GenerateArgs {
                role,
                skills,
                count,
                mode,
                api_key,
                resume,
                output,
                bank,
                seed,
                config,
            })
            .await
        }
        Commands::Extract { resume } => commands::extract::execute(resume),
        Commands::Skills { bank, config } => commands::skills::execute(bank, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
