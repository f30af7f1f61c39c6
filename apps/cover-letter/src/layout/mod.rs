// Letter layout: font metrics, greedy wrapping and the fixed single-page
// letter engine. Produces page-writer-agnostic instructions; no I/O here.

pub mod document;
pub mod font_metrics;
pub mod letter;
pub mod wrap;

use thiserror::Error;

pub use document::{Align, BlockRole, LayoutInstruction, RenderedDocument, TextBlock};
pub use font_metrics::{default_page_config, FontFace, FontFamily, PageConfig};
pub use letter::LetterLayout;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("letter does not fit on one page ({used_mm:.1} mm used, {available_mm:.1} mm available)")]
    PageOverflow { used_mm: f32, available_mm: f32 },
}
