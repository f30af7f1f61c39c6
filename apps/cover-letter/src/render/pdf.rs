//! PDF page writer: serializes a `RenderedDocument` into a one-page PDF.
//!
//! Text is set with WinAnsi-encoded simple fonts. Layout coordinates are
//! millimetres from the top-left corner; PDF space is points from the
//! bottom-left, so every position is converted here.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use crate::layout::font_metrics::{get_metrics, FontMetricTable, MM_PER_PT};
use crate::layout::{Align, FontFace, LayoutInstruction, RenderedDocument, TextBlock};
use crate::render::fonts::FontAssets;

/// Horizontal padding inside a text cell.
const CELL_PADDING_MM: f32 = 1.0;
const REGULAR_RESOURCE: &str = "F1";
const BOLD_RESOURCE: &str = "F2";

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Encodes `doc` as PDF bytes.
pub fn encode(doc: &RenderedDocument, fonts: &FontAssets) -> Result<Vec<u8>, lopdf::Error> {
    if doc.font != fonts.family() {
        tracing::warn!(
            "layout measured with {:?} but writing with {:?}; alignment may drift",
            doc.font,
            fonts.family()
        );
    }
    let metrics = get_metrics(fonts.family());

    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let (regular_id, bold_id) = add_fonts(&mut pdf, fonts, metrics);
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_RESOURCE => regular_id,
            BOLD_RESOURCE => bold_id,
        },
    });

    let page_height_pt = mm_to_pt(doc.page_height_mm);
    let mut operations = Vec::new();
    for instruction in &doc.instructions {
        if let LayoutInstruction::Text(block) = instruction {
            push_block(&mut operations, block, metrics, page_height_pt);
        }
    }
    let content = Content { operations };
    let content_id = pdf.add_object(Stream::new(Dictionary::new(), content.encode()?));

    let page_id = pdf.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            mm_to_pt(doc.page_width_mm).into(),
            page_height_pt.into(),
        ],
    });
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = pdf.add_object(dictionary! {
        "Title" => Object::string_literal("Cover Letter"),
        "Producer" => Object::string_literal(concat!("cover-letter ", env!("CARGO_PKG_VERSION"))),
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.trailer.set("Info", info_id);

    pdf.compress();
    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Emits one `BT .. ET` text object per line of `block`.
fn push_block(
    operations: &mut Vec<Operation>,
    block: &TextBlock,
    metrics: &FontMetricTable,
    page_height_pt: f32,
) {
    let resource = match block.face {
        FontFace::Regular => REGULAR_RESOURCE,
        FontFace::Bold => BOLD_RESOURCE,
    };
    let size_mm = block.size_pt * MM_PER_PT;

    for (i, line) in block.lines.iter().enumerate() {
        let row_top = block.y_mm + block.row_height_mm * i as f32;
        // Baseline sits 0.3 em below the vertical centre of the row.
        let baseline_mm = row_top + block.row_height_mm / 2.0 + 0.3 * size_mm;
        let x_mm = match block.align {
            Align::Left => block.x_mm + CELL_PADDING_MM,
            Align::Right => {
                block.x_mm + block.width_mm
                    - CELL_PADDING_MM
                    - metrics.width_mm(line, block.size_pt)
            }
        };

        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![resource.into(), block.size_pt.into()],
        ));
        operations.push(Operation::new(
            "Td",
            vec![
                mm_to_pt(x_mm).into(),
                (page_height_pt - mm_to_pt(baseline_mm)).into(),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(line))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
}

/// Adds the regular and bold font dictionaries, returning their ids.
fn add_fonts(
    pdf: &mut Document,
    fonts: &FontAssets,
    metrics: &FontMetricTable,
) -> (ObjectId, ObjectId) {
    match fonts {
        FontAssets::Builtin => {
            let regular = pdf.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "Times-Roman",
                "Encoding" => "WinAnsiEncoding",
            });
            let bold = pdf.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "Times-Bold",
                "Encoding" => "WinAnsiEncoding",
            });
            (regular, bold)
        }
        FontAssets::Embedded { regular, bold } => (
            add_truetype(pdf, "EBGaramond-Regular", regular, metrics, 80),
            add_truetype(pdf, "EBGaramond-Bold", bold, metrics, 120),
        ),
    }
}

fn add_truetype(
    pdf: &mut Document,
    name: &str,
    program: &[u8],
    metrics: &FontMetricTable,
    stem_v: i64,
) -> ObjectId {
    let file_id = pdf.add_object(Stream::new(
        dictionary! { "Length1" => program.len() as i64 },
        program.to_vec(),
    ));
    let descriptor_id = pdf.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => name,
        // Nonsymbolic
        "Flags" => 32_i64,
        "FontBBox" => vec![(-200_i64).into(), (-300_i64).into(), 1200_i64.into(), 1000_i64.into()],
        "ItalicAngle" => 0_i64,
        "Ascent" => 800_i64,
        "Descent" => -250_i64,
        "CapHeight" => 650_i64,
        "StemV" => stem_v,
        "FontFile2" => file_id,
    });
    let widths: Vec<Object> = (32u8..=255)
        .map(|code| Object::Integer((metrics.char_width(char::from(code)) * 1000.0).round() as i64))
        .collect();
    pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "TrueType",
        "BaseFont" => name,
        "FirstChar" => 32_i64,
        "LastChar" => 255_i64,
        "Widths" => widths,
        "Encoding" => "WinAnsiEncoding",
        "FontDescriptor" => descriptor_id,
    })
}

/// Maps text onto WinAnsiEncoding. Unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
