//! Layout instructions, the page-writer-agnostic output of the letter engine.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{FontFace, FontFamily};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Right,
}

/// What part of the letter a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockRole {
    HeaderName,
    HeaderContact,
    Date,
    RecipientLine,
    CompanyName,
    BusinessAddress,
    Subject,
    Salutation,
    /// Body paragraph from template slot `slot` (1-based).
    Body { slot: usize },
    Closing,
    Signature,
}

/// A positioned text cell. `y_mm` is the top of the first row, measured down
/// from the top edge of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub role: BlockRole,
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub row_height_mm: f32,
    pub face: FontFace,
    pub size_pt: f32,
    pub align: Align,
    pub lines: Vec<String>,
}

impl TextBlock {
    pub fn height_mm(&self) -> f32 {
        self.row_height_mm * self.lines.len() as f32
    }

    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutInstruction {
    Text(TextBlock),
    /// Vertical gap with no content.
    Blank { y_mm: f32, height_mm: f32 },
}

/// A finished single-page letter, ready for a page writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub font: FontFamily,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub instructions: Vec<LayoutInstruction>,
}

impl RenderedDocument {
    pub fn text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.instructions.iter().filter_map(|i| match i {
            LayoutInstruction::Text(block) => Some(block),
            LayoutInstruction::Blank { .. } => None,
        })
    }

    /// First block with `role`, if any.
    pub fn block(&self, role: BlockRole) -> Option<&TextBlock> {
        self.text_blocks().find(|b| b.role == role)
    }

    /// Body blocks in page order.
    pub fn body(&self) -> Vec<&TextBlock> {
        self.text_blocks()
            .filter(|b| matches!(b.role, BlockRole::Body { .. }))
            .collect()
    }

    /// Bottom edge of the lowest instruction.
    pub fn content_bottom_mm(&self) -> f32 {
        self.instructions
            .iter()
            .map(|i| match i {
                LayoutInstruction::Text(b) => b.y_mm + b.height_mm(),
                LayoutInstruction::Blank { y_mm, height_mm } => y_mm + height_mm,
            })
            .fold(0.0, f32::max)
    }
}
