use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::errors::LetterError;
use crate::models::UserProfile;

/// Application configuration loaded from environment variables.
/// Every path defaults to a location under the program home.
#[derive(Debug, Clone)]
pub struct Config {
    pub home_dir: PathBuf,
    pub profile_path: PathBuf,
    pub fonts_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub staging_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let home_dir = match lookup("COVER_LETTER_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => install_dir()?,
        };
        let path_or = |key: &str, default: PathBuf| lookup(key).map(PathBuf::from).unwrap_or(default);

        let staging_dir = match lookup("COVER_LETTER_STAGING") {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().context("Could not determine the working directory")?,
        };

        Ok(Config {
            profile_path: path_or("COVER_LETTER_PROFILE", home_dir.join(".env")),
            fonts_dir: path_or("COVER_LETTER_FONTS", home_dir.join("fonts")),
            destination_dir: path_or("COVER_LETTER_DESTINATION", home_dir.join("CoverLetters")),
            staging_dir,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "warn".to_string()),
            home_dir,
        })
    }
}

/// Directory containing the running executable.
fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable path '{}' has no parent directory", exe.display()))
}

/// Reads the applicant profile from a key-value (`KEY=value`) file.
pub fn load_profile(path: &Path) -> Result<UserProfile, LetterError> {
    let unreadable = |e: dotenvy::Error| {
        LetterError::MissingConfiguration(format!(
            "profile file '{}' could not be read: {e}",
            path.display()
        ))
    };
    let pairs = dotenvy::from_path_iter(path)
        .map_err(unreadable)?
        .collect::<Result<Vec<(String, String)>, _>>()
        .map_err(unreadable)?;
    UserProfile::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_paths_default_under_home() {
        let config = Config::from_lookup(lookup_from(&[
            ("COVER_LETTER_HOME", "/opt/cover-letter"),
            ("COVER_LETTER_STAGING", "/tmp"),
        ]))
        .unwrap();
        assert_eq!(config.profile_path, PathBuf::from("/opt/cover-letter/.env"));
        assert_eq!(config.fonts_dir, PathBuf::from("/opt/cover-letter/fonts"));
        assert_eq!(config.destination_dir, PathBuf::from("/opt/cover-letter/CoverLetters"));
        assert_eq!(config.staging_dir, PathBuf::from("/tmp"));
        assert_eq!(config.rust_log, "warn");
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_lookup(lookup_from(&[
            ("COVER_LETTER_HOME", "/opt/cover-letter"),
            ("COVER_LETTER_STAGING", "/tmp"),
            ("COVER_LETTER_DESTINATION", "/home/jane/letters"),
            ("COVER_LETTER_PROFILE", "/home/jane/profile.env"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.destination_dir, PathBuf::from("/home/jane/letters"));
        assert_eq!(config.profile_path, PathBuf::from("/home/jane/profile.env"));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_home_defaults_to_install_dir() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(config.home_dir, exe.parent().unwrap());
    }

    #[test]
    fn test_load_profile_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "FIRST_NAME=jane\nLAST_NAME=doe\nMOBILE=\"0400 000 000\"\nEMAIL=jane@example.com\n\
             ADDRESS_L1=\"12 harbour st\"\nADDRESS_L2=\"Sydney NSW\"\nPOSTCODE=2000\nDOB=1990-01-01\n",
        )
        .unwrap();
        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.address_line_1, "12 harbour st");
        assert_eq!(profile.full_name_title(), "Jane Doe");
    }

    #[test]
    fn test_load_profile_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "FIRST_NAME=jane\n").unwrap();
        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, LetterError::MissingConfiguration(_)));
    }

    #[test]
    fn test_load_profile_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(&dir.path().join("absent.env")).unwrap_err();
        match err {
            LetterError::MissingConfiguration(msg) => assert!(msg.contains("absent.env")),
            other => panic!("expected MissingConfiguration, got {other:?}"),
        }
    }
}
