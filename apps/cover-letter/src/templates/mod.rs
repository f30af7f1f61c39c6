//! Template registry: one paragraph-set variant per industry field.
//!
//! A template binds a `LetterRequest` and answers `paragraph(1)..=paragraph(6)`.
//! `None` means "no such paragraph"; the layout engine skips it entirely.

pub mod data_entry;
pub mod data_scientist;
pub mod software_dev;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LetterError;
use crate::models::LetterRequest;
use crate::text::is_blank;

pub use data_entry::DataEntry;
pub use data_scientist::DataScientist;
pub use software_dev::SoftwareDev;

/// Number of paragraph slots every template exposes.
pub const PARAGRAPH_SLOTS: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Capability
// ────────────────────────────────────────────────────────────────────────────

/// Paragraph source for the letter body.
///
/// Implementations must be deterministic and side-effect free, and must not
/// panic for any `LetterRequest` (blank optional fields drop the clause that
/// needs them).
pub trait CoverLetterTemplate {
    /// Human-readable variant name, used in logs.
    fn name(&self) -> &'static str;

    /// Body paragraph `index` (1-based). `None` beyond the variant's count.
    fn paragraph(&self, index: usize) -> Option<String>;

    /// Non-empty paragraphs in slot order.
    fn paragraphs(&self) -> Vec<String> {
        (1..=PARAGRAPH_SLOTS)
            .filter_map(|i| self.paragraph(i))
            .filter(|p| !is_blank(p))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry key
// ────────────────────────────────────────────────────────────────────────────

/// The fixed set of industry fields a letter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryField {
    /// `data`: data entry / administration roles.
    Data,
    /// `dev`: software development roles.
    Dev,
    /// `sci`: data science roles.
    Sci,
}

impl IndustryField {
    pub const ALL: [IndustryField; 3] = [IndustryField::Data, IndustryField::Dev, IndustryField::Sci];

    pub fn key(self) -> &'static str {
        match self {
            IndustryField::Data => "data",
            IndustryField::Dev => "dev",
            IndustryField::Sci => "sci",
        }
    }

    /// Binds the variant for this field to `request`.
    pub fn template<'a>(self, request: &'a LetterRequest) -> Box<dyn CoverLetterTemplate + 'a> {
        match self {
            IndustryField::Data => Box::new(DataEntry::new(request)),
            IndustryField::Dev => Box::new(SoftwareDev::new(request)),
            IndustryField::Sci => Box::new(DataScientist::new(request)),
        }
    }
}

impl fmt::Display for IndustryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IndustryField {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}

/// Resolves an industry-field key (`data`, `dev`, `sci`; case-insensitive).
pub fn lookup(key: &str) -> Result<IndustryField, LetterError> {
    let normalized = key.trim().to_lowercase();
    IndustryField::ALL
        .into_iter()
        .find(|f| f.key() == normalized)
        .ok_or_else(|| LetterError::InvalidFieldSelector(key.trim().to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared phrasing helpers
// ────────────────────────────────────────────────────────────────────────────

/// `", a logistics company"` / `", an energy retailer"`, or `""` when blank.
pub(crate) fn genre_clause(genre: &str) -> String {
    let genre = genre.trim();
    if genre.is_empty() {
        return String::new();
    }
    let article = match genre.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    };
    format!(", {article} {genre}")
}

/// Normalizes free text into a sentence: capitalized, ending in punctuation.
/// Returns `None` for blank input.
pub(crate) fn as_sentence(text: &str) -> Option<String> {
    let text = text.trim();
    let mut chars = text.chars();
    let first = chars.next()?;
    let mut sentence: String = first.to_uppercase().chain(chars).collect();
    if !sentence.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    Some(sentence)
}

/// Mission text ready to follow "to": leading "to " and trailing dots removed.
/// Returns `None` for blank input.
pub(crate) fn mission_phrase(mission: &str) -> Option<String> {
    let mission = mission.trim().trim_end_matches('.').trim_end();
    let mission = match mission.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("to ") => mission[3..].trim_start(),
        _ => mission,
    };
    if mission.is_empty() {
        None
    } else {
        Some(mission.to_string())
    }
}
