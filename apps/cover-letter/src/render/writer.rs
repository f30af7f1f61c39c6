//! Document Writer: persists a rendered letter under its conventional name.
//!
//! Bytes are staged in a temporary file in the staging directory and only
//! renamed onto the destination once fully written and synced, so a failed
//! run never leaves a partial file at the destination path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::errors::LetterError;
use crate::layout::RenderedDocument;
use crate::models::{LetterRequest, UserProfile};
use crate::render::fonts::FontAssets;
use crate::render::pdf;
use crate::text::title_case;

/// `"Jane Doe - Cover Letter - Acme Corp.pdf"`
///
/// Path separators in the company name are replaced with `-`.
pub fn letter_file_name(profile: &UserProfile, request: &LetterRequest) -> String {
    let company: String = title_case(request.company.trim())
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{} - Cover Letter - {company}.pdf", profile.full_name_title())
}

pub struct DocumentWriter {
    staging_dir: PathBuf,
    fonts: FontAssets,
}

impl DocumentWriter {
    pub fn new(staging_dir: impl Into<PathBuf>, fonts: FontAssets) -> Self {
        Self {
            staging_dir: staging_dir.into(),
            fonts,
        }
    }

    pub fn fonts(&self) -> &FontAssets {
        &self.fonts
    }

    /// Writes `doc` as a PDF at `destination`, replacing any existing file.
    pub fn write(&self, doc: &RenderedDocument, destination: &Path) -> Result<(), LetterError> {
        let fail = |e: &dyn std::fmt::Display| LetterError::persistence(destination, e);

        let bytes = pdf::encode(doc, &self.fonts).map_err(|e| fail(&e))?;
        let target_dir = match destination.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&target_dir).map_err(|e| fail(&e))?;

        let staged = stage(&self.staging_dir, &bytes).map_err(|e| fail(&e))?;
        debug!("Staged {} bytes at {}", bytes.len(), staged.path().display());

        if let Err(e) = staged.persist(destination) {
            // Usually a cross-device rename; retry from inside the target dir.
            debug!("Direct move failed ({}); copying into {}", e.error, target_dir.display());
            drop(e.file);
            let local = stage(&target_dir, &bytes).map_err(|e| fail(&e))?;
            local.persist(destination).map_err(|e| fail(&e.error))?;
        }

        info!("Saved {}", destination.display());
        Ok(())
    }
}

/// Writes `bytes` into a fresh temporary file in `dir` and syncs it.
fn stage(dir: &Path, bytes: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = Builder::new()
        .prefix(".cover-letter-")
        .suffix(".pdf.part")
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::letter::LetterLayout;
    use crate::layout::{default_page_config, FontFamily};
    use crate::models::profile::tests::sample_profile;
    use crate::models::request::tests::{john_smith, sample_request};
    use crate::templates::IndustryField;

    fn rendered() -> RenderedDocument {
        let request = sample_request(IndustryField::Dev, Some(john_smith()));
        let template = request.field.template(&request);
        LetterLayout::new(default_page_config(FontFamily::Times))
            .render(template.as_ref(), &request, &sample_profile())
            .unwrap()
    }

    fn entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    // ── file name ───────────────────────────────────────────────────────────

    #[test]
    fn test_file_name_convention() {
        let mut request = sample_request(IndustryField::Data, None);
        request.company = "acme corp".to_string();
        assert_eq!(
            letter_file_name(&sample_profile(), &request),
            "Jane Doe - Cover Letter - Acme Corp.pdf"
        );
    }

    #[test]
    fn test_file_name_strips_path_separators() {
        let mut request = sample_request(IndustryField::Data, None);
        request.company = "Smith/Jones\\Partners".to_string();
        let name = letter_file_name(&sample_profile(), &request);
        assert_eq!(name, "Jane Doe - Cover Letter - Smith-Jones-Partners.pdf");
    }

    // ── persistence ─────────────────────────────────────────────────────────

    #[test]
    fn test_write_then_read_back() {
        let staging = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("CoverLetters").join("letter.pdf");

        let writer = DocumentWriter::new(staging.path(), FontAssets::Builtin);
        writer.write(&rendered(), &destination).unwrap();

        let bytes = fs::read(&destination).unwrap();
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
        assert!(entries(staging.path()).is_empty(), "staging file left behind");

        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("Dear Mr. Smith,"), "extracted: {text:?}");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let staging = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("letter.pdf");
        fs::write(&destination, b"old").unwrap();

        DocumentWriter::new(staging.path(), FontAssets::Builtin)
            .write(&rendered(), &destination)
            .unwrap();
        assert!(fs::read(&destination).unwrap().starts_with(b"%PDF"));
        assert_eq!(entries(out.path()), vec![destination]);
    }

    #[test]
    fn test_unwritable_destination_leaves_no_file() {
        let staging = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let blocker = out.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();
        let destination = blocker.join("letter.pdf");

        let err = DocumentWriter::new(staging.path(), FontAssets::Builtin)
            .write(&rendered(), &destination)
            .unwrap_err();
        assert!(matches!(err, LetterError::Persistence { .. }), "got {err:?}");
        assert!(!destination.exists());
        assert!(entries(staging.path()).is_empty());
    }

    #[test]
    fn test_failed_move_cleans_up_staged_files() {
        let staging = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let destination = out.path().join("letter.pdf");
        fs::create_dir(&destination).unwrap();
        fs::write(destination.join("keep"), b"x").unwrap();

        let err = DocumentWriter::new(staging.path(), FontAssets::Builtin)
            .write(&rendered(), &destination)
            .unwrap_err();
        assert!(matches!(err, LetterError::Persistence { .. }));
        assert!(destination.is_dir());
        assert_eq!(entries(out.path()), vec![destination]);
        assert!(entries(staging.path()).is_empty());
    }

    #[test]
    fn test_missing_staging_dir_is_persistence_error() {
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("letter.pdf");
        let err = DocumentWriter::new(out.path().join("missing"), FontAssets::Builtin)
            .write(&rendered(), &destination)
            .unwrap_err();
        assert!(matches!(err, LetterError::Persistence { .. }));
        assert!(!destination.exists());
    }
}
