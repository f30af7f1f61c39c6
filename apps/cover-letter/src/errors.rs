use std::path::PathBuf;

use thiserror::Error;

use crate::layout::LayoutError;

/// Process exit codes surfaced by `main`.
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_RUN_FAILURE: u8 = 1;
pub const EXIT_CONFIG_FAILURE: u8 = 2;

/// Application-level error type.
/// `exit_code` maps every variant onto the process exit status.
#[derive(Debug, Error)]
pub enum LetterError {
    #[error("Invalid industry field '{0}' (expected one of: data, dev, sci)")]
    InvalidFieldSelector(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid letter request: {0}")]
    InvalidRequest(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Could not save '{path}': {message}")]
    Persistence { path: PathBuf, message: String },

    #[error("Input error: {0}")]
    Input(String),
}

impl LetterError {
    pub fn persistence(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        LetterError::Persistence {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Exit status for this error. Logs the internal detail on the way out.
    pub fn exit_code(&self) -> u8 {
        match self {
            LetterError::MissingConfiguration(msg) => {
                tracing::error!("Configuration error: {msg}");
                EXIT_CONFIG_FAILURE
            }
            LetterError::Layout(e) => {
                tracing::error!("Layout error: {e:?}");
                EXIT_RUN_FAILURE
            }
            LetterError::Persistence { path, message } => {
                tracing::error!("Persistence error at {}: {message}", path.display());
                EXIT_RUN_FAILURE
            }
            // Recovered by re-prompting at the intake boundary; reaching here
            // means the session ended before a valid answer was given.
            LetterError::InvalidFieldSelector(_)
            | LetterError::InvalidRequest(_)
            | LetterError::Input(_) => EXIT_RUN_FAILURE,
        }
    }
}
