use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LetterError;
use crate::templates::IndustryField;
use crate::text::is_blank;

/// Recipient courtesy title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Honorific {
    Mr,
    Mrs,
    Ms,
    Dr,
}

impl fmt::Display for Honorific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Honorific::Mr => "Mr.",
            Honorific::Mrs => "Mrs.",
            Honorific::Ms => "Ms.",
            Honorific::Dr => "Dr.",
        };
        f.write_str(s)
    }
}

impl FromStr for Honorific {
    type Err = LetterError;

    /// Accepts `mr`, `mrs`, `ms`, `dr` in any case, with or without a trailing dot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_end_matches('.').to_lowercase();
        match normalized.as_str() {
            "mr" => Ok(Honorific::Mr),
            "mrs" => Ok(Honorific::Mrs),
            "ms" => Ok(Honorific::Ms),
            "dr" => Ok(Honorific::Dr),
            _ => Err(LetterError::InvalidRequest(format!(
                "unknown recipient title '{}' (expected mr, mrs, ms or dr)",
                s.trim()
            ))),
        }
    }
}

/// A named letter recipient. Fields are private: a `Recipient` only exists
/// with all four parts filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    title: Honorific,
    first_name: String,
    last_name: String,
    position: String,
}

impl Recipient {
    pub fn new(
        title: Honorific,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: impl Into<String>,
    ) -> Result<Self, LetterError> {
        let recipient = Recipient {
            title,
            first_name: first_name.into(),
            last_name: last_name.into(),
            position: position.into(),
        };
        for (label, value) in [
            ("first name", &recipient.first_name),
            ("last name", &recipient.last_name),
            ("position", &recipient.position),
        ] {
            if is_blank(value) {
                return Err(LetterError::InvalidRequest(format!(
                    "recipient {label} must not be empty"
                )));
            }
        }
        Ok(recipient)
    }

    /// Builds an optional recipient from four optional parts.
    ///
    /// All absent → `Ok(None)`; all present → `Ok(Some(..))`; anything in
    /// between is rejected.
    #[allow(dead_code)]
    pub fn from_parts(
        title: Option<Honorific>,
        first_name: Option<String>,
        last_name: Option<String>,
        position: Option<String>,
    ) -> Result<Option<Self>, LetterError> {
        match (title, first_name, last_name, position) {
            (None, None, None, None) => Ok(None),
            (Some(t), Some(f), Some(l), Some(p)) => Recipient::new(t, f, l, p).map(Some),
            _ => Err(LetterError::InvalidRequest(
                "recipient title, first name, last name and position must be given together"
                    .to_string(),
            )),
        }
    }

    /// `"Mr. John Smith, Manager"`
    pub fn address_line(&self) -> String {
        format!(
            "{} {} {}, {}",
            self.title, self.first_name, self.last_name, self.position
        )
    }

    /// `"Dear Mr. Smith,"`
    pub fn salutation(&self) -> String {
        format!("Dear {} {},", self.title, self.last_name)
    }
}

/// Everything collected for one letter. Built fresh per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRequest {
    pub company: String,
    pub company_genre: String,
    pub company_description: String,
    pub company_mission: String,
    pub business_address_line_1: String,
    pub business_address_line_2: String,
    pub position: String,
    pub recipient: Option<Recipient>,
    pub field: IndustryField,
}
