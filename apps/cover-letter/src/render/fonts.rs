//! Font assets for the page writer.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::layout::FontFamily;

pub const REGULAR_FONT_FILE: &str = "EBGaramond.ttf";
pub const BOLD_FONT_FILE: &str = "EBGaramond_bold.ttf";

/// Font programs available to the PDF writer.
#[derive(Clone)]
pub enum FontAssets {
    /// TrueType programs embedded into the output.
    Embedded { regular: Vec<u8>, bold: Vec<u8> },
    /// Standard Times faces every PDF viewer ships.
    Builtin,
}

impl std::fmt::Debug for FontAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontAssets::Embedded { regular, bold } => f
                .debug_struct("Embedded")
                .field("regular_bytes", &regular.len())
                .field("bold_bytes", &bold.len())
                .finish(),
            FontAssets::Builtin => f.write_str("Builtin"),
        }
    }
}

impl FontAssets {
    /// Loads both EB Garamond faces from `dir`. Falls back to the built-in
    /// faces, with a warning, if either file is missing or not TrueType.
    pub fn load(dir: &Path) -> Self {
        let regular = read_truetype(&dir.join(REGULAR_FONT_FILE));
        let bold = read_truetype(&dir.join(BOLD_FONT_FILE));
        match (regular, bold) {
            (Ok(regular), Ok(bold)) => {
                info!("Embedding EB Garamond from {}", dir.display());
                FontAssets::Embedded { regular, bold }
            }
            (Err(reason), _) | (_, Err(reason)) => {
                warn!("Font assets unavailable ({reason}); falling back to Times");
                FontAssets::Builtin
            }
        }
    }

    /// The metric family the layout must use with these assets.
    pub fn family(&self) -> FontFamily {
        match self {
            FontAssets::Embedded { .. } => FontFamily::EbGaramond,
            FontAssets::Builtin => FontFamily::Times,
        }
    }
}

fn read_truetype(path: &Path) -> Result<Vec<u8>, String> {
    let bytes = fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
    // 0x00010000 and "true" are TrueType outlines; CFF ("OTTO") cannot go in FontFile2.
    match bytes.get(..4) {
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"true") => Ok(bytes),
        _ => Err(format!("{}: not a TrueType font", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_ttf() -> Vec<u8> {
        let mut bytes = vec![0x00, 0x01, 0x00, 0x00];
        bytes.extend_from_slice(&[0u8; 64]);
        bytes
    }

    #[test]
    fn test_missing_directory_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let assets = FontAssets::load(&dir.path().join("nope"));
        assert!(matches!(assets, FontAssets::Builtin));
        assert_eq!(assets.family(), FontFamily::Times);
    }

    #[test]
    fn test_both_faces_present_are_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(REGULAR_FONT_FILE), fake_ttf()).unwrap();
        fs::write(dir.path().join(BOLD_FONT_FILE), fake_ttf()).unwrap();
        let assets = FontAssets::load(dir.path());
        assert_eq!(assets.family(), FontFamily::EbGaramond);
    }

    #[test]
    fn test_one_face_missing_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(REGULAR_FONT_FILE), fake_ttf()).unwrap();
        assert!(matches!(FontAssets::load(dir.path()), FontAssets::Builtin));
    }

    #[test]
    fn test_cff_font_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(REGULAR_FONT_FILE), b"OTTO....").unwrap();
        fs::write(dir.path().join(BOLD_FONT_FILE), fake_ttf()).unwrap();
        assert!(matches!(FontAssets::load(dir.path()), FontAssets::Builtin));
    }
}
