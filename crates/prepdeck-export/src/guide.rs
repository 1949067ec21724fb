//! Interview-prep guide layout.
//!
//! Page 1 carries the title, up to five summary lines, and the section
//! header; questions follow, one per line, flowing onto blank pages as the
//! cursor reaches the bottom margin.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::canvas::{Canvas, Font, LETTER};

const LEFT_MARGIN: i64 = 50;
/// Distance from the top edge to the first baseline on every page.
const TOP_MARGIN: i64 = 50;
/// A new page starts when the cursor falls below this.
const BOTTOM_MARGIN: i64 = 100;

const SUMMARY_MAX_LINES: usize = 5;
const SUMMARY_MAX_CHARS: usize = 90;
const SUMMARY_LEADING: i64 = 15;
const SECTION_GAP: i64 = 20;
const QUESTION_LEADING: i64 = 20;

/// The summary lines shown under the title: the first five lines of
/// `skills_text`, each cut to 90 characters.
pub fn summary_lines(skills_text: &str) -> Vec<String> {
    skills_text
        .split('\n')
        .take(SUMMARY_MAX_LINES)
        .map(|line| {
            line.trim_end_matches('\r')
                .chars()
                .take(SUMMARY_MAX_CHARS)
                .collect()
        })
        .collect()
}

/// Render the guide to `path`, returning the number of pages written.
pub fn write_pdf(questions: &[String], role: &str, skills_text: &str, path: &Path) -> Result<usize> {
    let mut canvas = Canvas::new(LETTER);
    let (_, height) = canvas.page_size();

    canvas.set_font(Font::HelveticaBold, 16);
    canvas.draw_string(
        LEFT_MARGIN,
        height - TOP_MARGIN,
        &format!("Interview Prep Guide for {role}"),
    );
    canvas.set_font(Font::Helvetica, 12);
    canvas.draw_string(
        LEFT_MARGIN,
        height - TOP_MARGIN - 20,
        "Extracted Skills/Resume Summary:",
    );

    let mut y = height - TOP_MARGIN - 40;
    for line in summary_lines(skills_text) {
        canvas.draw_string(LEFT_MARGIN, y, &line);
        y -= SUMMARY_LEADING;
    }

    y -= SECTION_GAP;
    canvas.set_font(Font::HelveticaBold, 14);
    canvas.draw_string(LEFT_MARGIN, y, "Interview Questions:");
    y -= SECTION_GAP;

    for (i, question) in questions.iter().enumerate() {
        if y < BOTTOM_MARGIN {
            canvas.show_page();
            y = height - TOP_MARGIN;
        }
        canvas.set_font(Font::Helvetica, 11);
        canvas.draw_string(LEFT_MARGIN, y, &format!("{}. {question}", i + 1));
        y -= QUESTION_LEADING;
    }

    let pages = canvas.save(path)?;
    debug!(path = %path.display(), questions = questions.len(), pages, "wrote interview guide");
    Ok(pages)
}
