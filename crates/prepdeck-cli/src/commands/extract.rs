//! The `prepdeck extract` command.

use std::path::PathBuf;

use anyhow::Result;

use prepdeck_ingest::{extract_resume_text, UploadedFile};

pub fn execute(resume: PathBuf) -> Result<()> {
    let file = UploadedFile::from_path(&resume)?;
    let text = extract_resume_text(&file)?;

    if text.is_empty() {
        println!("No text found in {}.", resume.display());
    } else {
        println!("{text}");
    }

    Ok(())
}
