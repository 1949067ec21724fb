//! The static question bank.
//!
//! Maps a skill tag (lowercase, trimmed) to an ordered list of questions.
//! The built-in bank is constructed once per process; a TOML bank file may
//! be merged into a copy of it at start-up. Banks are never mutated after
//! that.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use serde::Deserialize;

const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "What are Python decorators?",
            "Explain the difference between list and tuple.",
            "How does garbage collection work in Python?",
            "What are Python generators?",
            "Explain Python's Global Interpreter Lock (GIL).",
        ],
    ),
    (
        "sql",
        &[
            "What is the difference between INNER JOIN and LEFT JOIN?",
            "Explain the concept of normalization.",
            "What are indexes and why are they used?",
            "What is the difference between WHERE and HAVING?",
            "Explain ACID properties in databases.",
        ],
    ),
    (
        "ml",
        &[
            "What is the difference between supervised and unsupervised learning?",
            "Explain the bias-variance tradeoff.",
            "What is regularization in machine learning?",
            "What are precision, recall, and F1-score?",
            "What is gradient descent and how does it work?",
        ],
    ),
];

static BUILTIN: LazyLock<QuestionBank> = LazyLock::new(|| {
    let entries = BUILTIN_ENTRIES
        .iter()
        .map(|(tag, questions)| {
            (
                tag.to_string(),
                questions.iter().map(|q| q.to_string()).collect(),
            )
        })
        .collect();
    QuestionBank { entries }
});

/// Normalize a raw skill token into a bank key.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Skill tag → questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    entries: BTreeMap<String, Vec<String>>,
}

impl QuestionBank {
    /// The built-in bank (python, sql, ml).
    pub fn builtin() -> &'static QuestionBank {
        &BUILTIN
    }

    /// Questions for one tag, in bank order.
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Tags in sorted order with their questions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(tag, questions)| (tag.as_str(), questions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the candidate pool for a comma-separated skills string.
    ///
    /// Each recognized token contributes its whole question list in bank
    /// order; unknown tokens are ignored and repeated tokens contribute again.
    pub fn pool_for(&self, skills_text: &str) -> Vec<&str> {
        let mut pool = Vec::new();
        for token in skills_text.split(',') {
            if let Some(questions) = self.entries.get(&normalize_skill(token)) {
                pool.extend(questions.iter().map(String::as_str));
            }
        }
        pool
    }

    /// Return a copy of this bank with `other`'s entries appended.
    pub fn merged_with(&self, other: QuestionBank) -> QuestionBank {
        let mut entries = self.entries.clone();
        for (tag, questions) in other.entries {
            entries.entry(tag).or_default().extend(questions);
        }
        QuestionBank { entries }
    }

    /// Parse a bank from TOML (useful for testing).
    ///
    /// ```toml
    /// [skills]
    /// rust = ["What is ownership?", "Explain lifetimes."]
    /// ```
    pub fn from_toml_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
        let parsed: TomlBankFile = toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (tag, questions) in parsed.skills {
            let key = normalize_skill(&tag);
            anyhow::ensure!(
                !key.is_empty(),
                "empty skill tag in {}",
                source_path.display()
            );
            entries
                .entry(key)
                .or_default()
                .extend(questions.into_iter().map(|q| q.trim().to_string()));
        }
        Ok(QuestionBank { entries })
    }
}

#[derive(Debug, Deserialize)]
struct TomlBankFile {
    #[serde(default)]
    skills: BTreeMap<String, Vec<String>>,
}

/// Parse a TOML bank file.
pub fn parse_bank_file(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;
    QuestionBank::from_toml_str(&content, path)
}

/// The built-in bank, extended with the entries of `path` if one is given.
pub fn load_bank(path: Option<&Path>) -> Result<QuestionBank> {
    let builtin = QuestionBank::builtin();
    match path {
        Some(p) => {
            let extra = parse_bank_file(p)?;
            tracing::debug!(path = %p.display(), tags = extra.len(), "merging question bank");
            Ok(builtin.merged_with(extra))
        }
        None => Ok(builtin.clone()),
    }
}

/// A problem found in a question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankWarning {
    pub tag: String,
    pub message: String,
}

/// Check a bank for entries that would never yield useful questions.
pub fn validate_bank(bank: &QuestionBank) -> Vec<BankWarning> {
    let mut warnings = Vec::new();

    for (tag, questions) in bank.iter() {
        if questions.is_empty() {
            warnings.push(BankWarning {
                tag: tag.to_string(),
                message: "no questions".into(),
            });
            continue;
        }

        let mut seen = HashSet::new();
        for q in questions {
            if q.is_empty() {
                warnings.push(BankWarning {
                    tag: tag.to_string(),
                    message: "empty question".into(),
                });
            } else if !seen.insert(q.as_str()) {
                warnings.push(BankWarning {
                    tag: tag.to_string(),
                    message: format!("duplicate question: {q}"),
                });
            }
        }
    }

    warnings
}
