//! The `prepdeck skills` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use prepdeck_core::bank::{load_bank, validate_bank};
use prepdeck_providers::config::load_config_from;

pub fn execute(bank_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = load_bank(bank_path.as_deref().or(config.question_bank.as_deref()))?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Skill", "Questions", "First question"]);

    for (tag, questions) in bank.iter() {
        table.add_row(vec![
            Cell::new(tag),
            Cell::new(questions.len()),
            Cell::new(questions.first().map(String::as_str).unwrap_or("-")),
        ]);
    }

    println!("{table}");
    println!("{} skill(s) known.", bank.len());

    let warnings = validate_bank(&bank);
    if !warnings.is_empty() {
        println!();
        for w in &warnings {
            println!("  WARN [{}]: {}", w.tag, w.message);
        }
    }

    Ok(())
}
