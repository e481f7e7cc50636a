//! Shared test utilities: synthetic schedule PDFs built with lopdf.

#![allow(dead_code)]

use std::io::Write;

use lopdf::{Object, Stream, dictionary};

/// MediaBox height of generated pages.
const PAGE_HEIGHT: f64 = 792.0;
/// Left edge of generated tables, in PDF user space.
const TABLE_LEFT: f64 = 90.0;
/// Top edge of generated tables (PDF y grows upward).
const TABLE_TOP: f64 = 700.0;
const COLUMN_WIDTH: f64 = 80.0;
const ROW_HEIGHT: f64 = 20.0;

/// Content stream drawing a ruled table with one text run per non-empty cell.
pub fn table_content(rows: &[&[&str]]) -> String {
    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let right = TABLE_LEFT + columns as f64 * COLUMN_WIDTH;
    let bottom = TABLE_TOP - rows.len() as f64 * ROW_HEIGHT;

    let mut content = String::from("1 w\n");
    for i in 0..=rows.len() {
        let y = TABLE_TOP - i as f64 * ROW_HEIGHT;
        content.push_str(&format!("{TABLE_LEFT} {y} m {right} {y} l S\n"));
    }
    for j in 0..=columns {
        let x = TABLE_LEFT + j as f64 * COLUMN_WIDTH;
        content.push_str(&format!("{x} {TABLE_TOP} m {x} {bottom} l S\n"));
    }
    for (i, row) in rows.iter().enumerate() {
        let y = TABLE_TOP - (i + 1) as f64 * ROW_HEIGHT + 6.0;
        for (j, text) in row.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let x = TABLE_LEFT + j as f64 * COLUMN_WIDTH + 4.0;
            content.push_str(&format!("BT /F1 9 Tf {x} {y} Td ({text}) Tj ET\n"));
        }
    }
    content
}

/// The rules `table_content` draws, in top-left page space, as
/// `(rows, columns)` for an explicit-lines table search.
pub fn table_grid(rows: &[&[&str]]) -> (Vec<f64>, Vec<f64>) {
    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let horizontal = (0..=rows.len())
        .map(|i| PAGE_HEIGHT - TABLE_TOP + i as f64 * ROW_HEIGHT)
        .collect();
    let vertical = (0..=columns)
        .map(|j| TABLE_LEFT + j as f64 * COLUMN_WIDTH)
        .collect();
    (horizontal, vertical)
}

/// Content stream with one line of text per entry, top to bottom.
pub fn text_content(lines: &[&str]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let y = 720.0 - i as f64 * 16.0;
            format!("BT /F1 12 Tf 72 {y} Td ({line}) Tj ET\n")
        })
        .collect()
}

/// Build a PDF with one page per content stream.
pub fn pdf_with_pages(contents: &[String]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in contents {
        let stream = Stream::new(dictionary! {}, content.clone().into_bytes());
        let content_id = doc.add_object(stream);

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(contents.len() as i64),
    });

    for &page_id in &page_ids {
        if let Ok(dict) = doc.get_object_mut(page_id).and_then(Object::as_dict_mut) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// A two-row schedule table under a header row.
pub const SCHEDULE_ROWS: [&[&str]; 3] = [
    &["SL", "Course", "Section", "Date"],
    &["1", "CS101", "A", "20-Mar-25"],
    &["2", "CS102", "B", "21-Mar-25"],
];

/// Write PDF bytes to a temporary file.
pub fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}
