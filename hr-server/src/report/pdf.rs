//! PDF renderer for the contract report
//!
//! A4 纵向，内置 Helvetica 字体，超出一页时自动分页并重绘表头。

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use thiserror::Error;

use super::ReportDocument;

/// PDF rendering errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Font load failed: {0}")]
    Font(String),

    #[error("PDF encode failed: {0}")]
    Encode(String),
}

// A4 portrait layout, all in millimetres
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const ROW_HEIGHT: f32 = 7.0;

/// Left edge of each of the six columns
const COLUMN_X: [f32; 6] = [15.0, 58.0, 84.0, 110.0, 136.0, 174.0];

const TITLE_SIZE: f32 = 16.0;
const HEADER_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 9.0;

/// Render the report to PDF bytes
pub fn render_pdf(report: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        &report.title,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "report",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Font(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT - MARGIN - 5.0;

    // Title block, first page only
    layer.use_text(&report.title, TITLE_SIZE, Mm(MARGIN), Mm(y), &bold);
    y -= 8.0;
    layer.use_text(
        format!("Ngay xuat: {}", report.generated_on),
        HEADER_SIZE,
        Mm(MARGIN),
        Mm(y),
        &font,
    );
    y -= 12.0;

    draw_header_row(&layer, &bold, report, y);
    y -= ROW_HEIGHT;

    for row in &report.rows {
        if y < MARGIN + ROW_HEIGHT {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT - MARGIN - 5.0;

            draw_header_row(&layer, &bold, report, y);
            y -= ROW_HEIGHT;
        }

        for (column, cell) in row.iter().enumerate() {
            layer.use_text(cell, BODY_SIZE, Mm(COLUMN_X[column]), Mm(y), &font);
        }
        y -= ROW_HEIGHT;
    }

    doc.save_to_bytes()
        .map_err(|e| ReportError::Encode(e.to_string()))
}

fn draw_header_row(
    layer: &PdfLayerReference,
    bold: &IndirectFontRef,
    report: &ReportDocument,
    y: f32,
) {
    for (column, header) in report.headers.iter().enumerate() {
        layer.use_text(*header, HEADER_SIZE, Mm(COLUMN_X[column]), Mm(y), bold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::COLUMN_HEADERS;

    fn sample_report(rows: usize) -> ReportDocument {
        ReportDocument {
            title: "BAO CAO DANH SACH HOP DONG NHAN SU".to_string(),
            generated_on: "2024-01-15".to_string(),
            headers: COLUMN_HEADERS,
            rows: (0..rows)
                .map(|i| {
                    [
                        format!("Employee {i}"),
                        "Full-time".to_string(),
                        "2023-01-01".to_string(),
                        "2024-01-01".to_string(),
                        "10,000,000 VND".to_string(),
                        "Active".to_string(),
                    ]
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_pdf(&sample_report(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_report_renders_without_error() {
        // Enough rows to force pagination
        let bytes = render_pdf(&sample_report(120)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }
}
