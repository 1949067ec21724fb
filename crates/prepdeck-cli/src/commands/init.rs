//! The `prepdeck init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("prepdeck.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("banks")?;
    write_if_missing(Path::new("banks/example.toml"), EXAMPLE_BANK)?;

    println!("\nNext steps:");
    println!("  1. Set PREPDECK_GEMINI_KEY (or edit prepdeck.toml) to use AI mode");
    println!("  2. Run: prepdeck skills --bank banks/example.toml");
    println!("  3. Run: prepdeck generate --role \"Data Engineer\" --skills \"python, rust\" --bank banks/example.toml");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# prepdeck configuration

default_mode = "rule-based"
default_count = 5
default_role = "Data Scientist"
default_skills = "python, sql, ml"
output_dir = "."
# question_bank = "banks/example.toml"

[gemini]
api_key = "${PREPDECK_GEMINI_KEY}"
model = "gemini-1.5-flash"
# base_url = "https://generativelanguage.googleapis.com"
# temperature = 0.7
# max_output_tokens = 1024
# timeout_secs = 60
"#;

const EXAMPLE_BANK: &str = r#"# Extra questions merged into the built-in bank.
# Tags are matched case-insensitively against the comma-separated skills.

[skills]
rust = [
    "What problem does the borrow checker solve?",
    "Explain the difference between String and &str.",
    "When would you reach for Rc<RefCell<T>> instead of a plain reference?",
    "How do traits differ from interfaces in other languages?",
]
python = [
    "What is the difference between a shallow and a deep copy?",
]
"#;
