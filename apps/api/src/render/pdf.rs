//! PDF serialization of laid-out pages via `lopdf`.
//!
//! Output is deterministic: no creation date, no document ID, fixed object
//! order. Fonts are the standard Helvetica pair with WinAnsiEncoding, so
//! nothing is embedded. Text operands are written as hex strings, which keeps
//! every byte of model output inside its string token.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::layout::font_metrics::FontFace;
use crate::layout::styles::Color;
use crate::render::flow::{BorderBox, LaidOutPage, PageGeometry, PlacedItem, TextRun};
use crate::render::text::encode_win_ansi;
use crate::render::DocumentBuildError;

const PDF_VERSION: &str = "1.5";
const PRODUCER: &str = "forge-api";

/// Serializes pages into a finalized PDF byte buffer.
pub fn write_pdf(pages: &[LaidOutPage], geometry: &PageGeometry) -> Result<Vec<u8>, DocumentBuildError> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(FontFace::Helvetica));
    let bold_id = doc.add_object(font_dictionary(FontFace::HelveticaBold));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FontFace::Helvetica.resource_name() => regular_id,
            FontFace::HelveticaBold.resource_name() => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page_operations(page),
        };
        let encoded = content
            .encode()
            .map_err(|e| DocumentBuildError::Serialize(format!("content stream: {e}")))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        geometry.width.into(),
        geometry.height.into(),
    ];
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| DocumentBuildError::Serialize(format!("save failed: {e}")))?;
    Ok(buffer)
}

fn font_dictionary(face: FontFace) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => face.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn page_operations(page: &LaidOutPage) -> Vec<Operation> {
    let mut ops = Vec::new();
    for item in &page.items {
        match item {
            PlacedItem::Text(run) => push_text(&mut ops, run),
            PlacedItem::Border(border) => push_border(&mut ops, border),
        }
    }
    ops
}

fn push_text(ops: &mut Vec<Operation>, run: &TextRun) {
    if run.text.is_empty() {
        return;
    }
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![run.font.resource_name().into(), run.size.into()],
    ));
    ops.push(Operation::new("rg", rgb_operands(run.color)));
    ops.push(Operation::new("Tw", vec![run.word_spacing.into()]));
    ops.push(Operation::new("Td", vec![run.x.into(), run.y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(
            encode_win_ansi(&run.text),
            StringFormat::Hexadecimal,
        )],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn push_border(ops: &mut Vec<Operation>, border: &BorderBox) {
    ops.push(Operation::new("q", vec![]));
    ops.push(Operation::new("w", vec![border.line_width.into()]));
    ops.push(Operation::new("RG", rgb_operands(border.color)));
    ops.push(Operation::new(
        "re",
        vec![
            border.x.into(),
            border.y.into(),
            border.width.into(),
            border.height.into(),
        ],
    ));
    ops.push(Operation::new("S", vec![]));
    ops.push(Operation::new("Q", vec![]));
}

fn rgb_operands(color: Color) -> Vec<Object> {
    vec![color.r.into(), color.g.into(), color.b.into()]
}
