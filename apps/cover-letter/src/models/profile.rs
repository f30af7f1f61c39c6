use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::LetterError;
use crate::text::title_case;

/// Profile keys that must be present in the profile file.
pub const REQUIRED_KEYS: [&str; 8] = [
    "FIRST_NAME",
    "LAST_NAME",
    "MOBILE",
    "EMAIL",
    "ADDRESS_L1",
    "ADDRESS_L2",
    "POSTCODE",
    "DOB",
];

/// The applicant's static identity. Loaded once per process and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub postcode: String,
    pub date_of_birth: String,
}

impl UserProfile {
    /// Builds a profile from key-value pairs. Every missing key is reported in
    /// a single `MissingConfiguration` error.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, LetterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect();
        if !missing.is_empty() {
            return Err(LetterError::MissingConfiguration(format!(
                "profile is missing required key(s): {}",
                missing.join(", ")
            )));
        }

        let mut take = |key: &str| map.remove(key).unwrap_or_default();
        Ok(UserProfile {
            first_name: take("FIRST_NAME"),
            last_name: take("LAST_NAME"),
            mobile: take("MOBILE"),
            email: take("EMAIL"),
            address_line_1: take("ADDRESS_L1"),
            address_line_2: take("ADDRESS_L2"),
            postcode: take("POSTCODE"),
            date_of_birth: take("DOB"),
        })
    }

    /// `"JANE DOE"`, the header form.
    pub fn full_name_upper(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).to_uppercase()
    }

    /// `"Jane Doe"`, the signature and file-name form.
    pub fn full_name_title(&self) -> String {
        format!("{} {}", title_case(&self.first_name), title_case(&self.last_name))
    }
}
