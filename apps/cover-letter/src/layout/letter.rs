//! Letter Layout Engine: turns a template, a request and a profile into a
//! fixed single-page sequence of layout instructions.
//!
//! Order: header, date, recipient block, subject, salutation, body, signature.
//! The engine performs no I/O; the only outside input is the date, which
//! `render` reads from the local clock and `render_on` takes explicitly.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::layout::document::{Align, BlockRole, LayoutInstruction, RenderedDocument, TextBlock};
use crate::layout::font_metrics::{get_metrics, mm_to_em, FontFace, PageConfig};
use crate::layout::wrap::wrap_lines;
use crate::layout::LayoutError;
use crate::models::{LetterRequest, UserProfile};
use crate::templates::{CoverLetterTemplate, PARAGRAPH_SLOTS};
use crate::text::{is_blank, title_case};

/// Space above the header name.
const TOP_SPACER_MM: f32 = 20.0;
/// Row height of the header name line.
const NAME_ROW_MM: f32 = 10.0;
const DATE_ROW_MM: f32 = 20.0;
const SUBJECT_ROW_MM: f32 = 25.0;
/// Extra left offset of the date and recipient block.
const INDENT_MM: f32 = 4.0;
/// Trailing decoration on each header contact line.
const CONTACT_SUFFIX: &str = "  |";

pub const HIRING_MANAGER_SALUTATION: &str = "Dear Hiring Manager,";
pub const CLOSING: &str = "Sincerely,";

/// `"05 March, 2024"`
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%d %B, %Y").to_string()
}

pub struct LetterLayout {
    page: PageConfig,
}

impl LetterLayout {
    pub fn new(page: PageConfig) -> Self {
        Self { page }
    }

    /// Lays the letter out dated today.
    pub fn render(
        &self,
        template: &dyn CoverLetterTemplate,
        request: &LetterRequest,
        profile: &UserProfile,
    ) -> Result<RenderedDocument, LayoutError> {
        self.render_on(template, request, profile, Local::now().date_naive())
    }

    /// Lays the letter out dated `date`.
    pub fn render_on(
        &self,
        template: &dyn CoverLetterTemplate,
        request: &LetterRequest,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> Result<RenderedDocument, LayoutError> {
        check_required(request, profile)?;

        let page = &self.page;
        let mut pen = Pen::new(page);
        let text_left = page.text_left_mm();
        let width = page.content_width_mm();
        let row = page.row_height_mm;
        let body_pt = page.body_font_size_pt;

        // Header
        pen.blank(TOP_SPACER_MM);
        pen.text(
            BlockRole::HeaderName,
            Cell::new(text_left, width, NAME_ROW_MM)
                .face(FontFace::Bold, page.name_font_size_pt),
            vec![profile.full_name_upper()],
        );
        let contact_width = page.page_width_mm - 3.0 * page.margin_mm;
        for line in [
            format!(
                "{}, {} {}{CONTACT_SUFFIX}",
                title_case(&profile.address_line_1),
                profile.address_line_2,
                profile.postcode
            ),
            format!("{}{CONTACT_SUFFIX}", profile.mobile),
            format!("{}{CONTACT_SUFFIX}", profile.email),
        ] {
            pen.text(
                BlockRole::HeaderContact,
                Cell::new(page.margin_mm, contact_width, row).align(Align::Right),
                vec![line],
            );
        }

        // Date
        pen.blank(row);
        pen.text(
            BlockRole::Date,
            Cell::new(text_left + INDENT_MM, width - INDENT_MM, DATE_ROW_MM),
            vec![format_letter_date(date)],
        );

        // Recipient block
        let indented = Cell::new(text_left + INDENT_MM, width - INDENT_MM, row);
        if let Some(recipient) = &request.recipient {
            pen.text(BlockRole::RecipientLine, indented, vec![recipient.address_line()]);
        }
        pen.text(BlockRole::CompanyName, indented, vec![request.company.clone()]);
        for line in [
            &request.business_address_line_1,
            &request.business_address_line_2,
        ] {
            pen.text(BlockRole::BusinessAddress, indented, vec![line.clone()]);
        }

        // Subject + salutation
        pen.text(
            BlockRole::Subject,
            Cell::new(text_left, width, SUBJECT_ROW_MM),
            vec![format!(
                "RE: Expression of interest for {} position",
                request.position
            )],
        );
        let salutation = match &request.recipient {
            Some(recipient) => recipient.salutation(),
            None => HIRING_MANAGER_SALUTATION.to_string(),
        };
        pen.text(
            BlockRole::Salutation,
            Cell::new(text_left, width, row),
            vec![salutation],
        );
        pen.blank(row);

        // Body
        let metrics = get_metrics(page.font);
        let wrap_em = mm_to_em(width, body_pt);
        let mut emitted = 0usize;
        for slot in 1..=PARAGRAPH_SLOTS {
            let Some(paragraph) = template.paragraph(slot) else {
                continue;
            };
            let lines = wrap_lines(&paragraph, metrics, wrap_em);
            if lines.is_empty() {
                continue;
            }
            // The blank after the salutation separates the first paragraph.
            if emitted > 0 {
                pen.blank(row);
            }
            pen.text(BlockRole::Body { slot }, Cell::new(text_left, width, row), lines);
            emitted += 1;
        }
        debug!(template = template.name(), paragraphs = emitted, "Laid out letter body");

        // Signature
        pen.blank(row);
        pen.text(
            BlockRole::Closing,
            Cell::new(text_left, width, row),
            vec![CLOSING.to_string()],
        );
        pen.blank(row);
        pen.text(
            BlockRole::Signature,
            Cell::new(text_left, width, row),
            vec![profile.full_name_title()],
        );

        let used = pen.y_mm;
        let available = page.bottom_limit_mm();
        if used > available {
            return Err(LayoutError::PageOverflow {
                used_mm: used,
                available_mm: available,
            });
        }

        Ok(RenderedDocument {
            font: page.font,
            page_width_mm: page.page_width_mm,
            page_height_mm: page.page_height_mm,
            instructions: pen.instructions,
        })
    }
}

/// Fails fast on the fields the layout has no fallback text for.
fn check_required(request: &LetterRequest, profile: &UserProfile) -> Result<(), LayoutError> {
    let required = [
        ("company name", request.company.as_str()),
        ("job position", request.position.as_str()),
        ("business address line 1", request.business_address_line_1.as_str()),
        ("business address line 2", request.business_address_line_2.as_str()),
        ("applicant first name", profile.first_name.as_str()),
        ("applicant last name", profile.last_name.as_str()),
    ];
    match required.into_iter().find(|(_, value)| is_blank(value)) {
        Some((field, _)) => Err(LayoutError::MissingField(field)),
        None => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Horizontal placement and type settings of a block.
#[derive(Clone, Copy)]
struct Cell {
    x_mm: f32,
    width_mm: f32,
    row_height_mm: f32,
    face: FontFace,
    size_pt: Option<f32>,
    align: Align,
}

impl Cell {
    fn new(x_mm: f32, width_mm: f32, row_height_mm: f32) -> Self {
        Self {
            x_mm,
            width_mm,
            row_height_mm,
            face: FontFace::Regular,
            size_pt: None,
            align: Align::Left,
        }
    }

    fn face(mut self, face: FontFace, size_pt: f32) -> Self {
        self.face = face;
        self.size_pt = Some(size_pt);
        self
    }

    fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Vertical cursor that appends instructions top to bottom.
struct Pen {
    y_mm: f32,
    body_size_pt: f32,
    instructions: Vec<LayoutInstruction>,
}

impl Pen {
    fn new(page: &PageConfig) -> Self {
        Self {
            y_mm: page.margin_mm,
            body_size_pt: page.body_font_size_pt,
            instructions: Vec::new(),
        }
    }

    fn blank(&mut self, height_mm: f32) {
        self.instructions.push(LayoutInstruction::Blank {
            y_mm: self.y_mm,
            height_mm,
        });
        self.y_mm += height_mm;
    }

    fn text(&mut self, role: BlockRole, cell: Cell, lines: Vec<String>) {
        let block = TextBlock {
            role,
            x_mm: cell.x_mm,
            y_mm: self.y_mm,
            width_mm: cell.width_mm,
            row_height_mm: cell.row_height_mm,
            face: cell.face,
            size_pt: cell.size_pt.unwrap_or(self.body_size_pt),
            align: cell.align,
            lines,
        };
        self.y_mm += block.height_mm();
        self.instructions.push(LayoutInstruction::Text(block));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
