//! Plain-text extraction from uploaded files.
//!
//! Dispatches on the file extension. Every function here is synchronous and
//! CPU-bound; handlers call `extract_text` inside `tokio::task::spawn_blocking`.

use std::io::{Cursor, Read};

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use image::{ColorType, ImageFormat};
use quick_xml::events::Event;
use serde::Serialize;
use thiserror::Error;

const DOCX_BODY: &str = "word/document.xml";
const SHEET_MAX_ROWS: usize = 100;
const SHEET_MAX_COLS: usize = 20;

pub const EMPTY_PDF: &str = "PDF file contains no extractable text content.";
pub const EMPTY_DOCX: &str = "DOCX file contains no text content.";
pub const EMPTY_SHEET: &str = "Excel file contains no data.";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File name is missing or invalid")]
    MissingFileName,

    #[error("Cannot determine file type. Please ensure the file has a valid extension.")]
    MissingExtension,

    #[error("Unsupported file format: {0}")]
    Unsupported(String),

    #[error("Text file is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Error processing PDF: {0}")]
    Pdf(String),

    #[error("Error processing DOCX: {0}")]
    Docx(String),

    #[error("Error processing Excel: {0}")]
    Spreadsheet(String),

    #[error("Workbook contains no worksheets")]
    EmptyWorkbook,

    #[error("Error processing image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Text,
    Pdf,
    Docx,
    Spreadsheet,
    Image,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(ExtractError::MissingFileName);
        }
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty())
            .ok_or(ExtractError::MissingExtension)?;

        match extension.as_str() {
            "txt" => Ok(DocumentKind::Text),
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "xlsx" | "xls" => Ok(DocumentKind::Spreadsheet),
            "jpg" | "jpeg" | "png" => Ok(DocumentKind::Image),
            _ => Err(ExtractError::Unsupported(extension)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub text: String,
}

pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
    let kind = DocumentKind::from_file_name(file_name)?;
    let text = match kind {
        DocumentKind::Text => String::from_utf8(bytes.to_vec())?,
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::Spreadsheet => extract_spreadsheet(bytes)?,
        DocumentKind::Image => describe_image(bytes)?,
    };

    Ok(ExtractedDocument {
        file_name: file_name.trim().to_string(),
        kind,
        text,
    })
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(EMPTY_PDF.to_string());
    }
    Ok(text)
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| ExtractError::Docx(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs = docx_paragraphs(&xml)?;
    if paragraphs.is_empty() {
        return Ok(EMPTY_DOCX.to_string());
    }
    Ok(paragraphs.iter().map(|p| format!("{p}\n")).collect())
}

/// Text of each non-blank `<w:p>` in a WordprocessingML body.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if !current.trim().is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => current.push_str(&String::from_utf8_lossy(&t)),
            Ok(Event::GeneralRef(r)) if in_text => {
                let name = String::from_utf8_lossy(&r).into_owned();
                if let Some(resolved) = resolve_entity(&name) {
                    current.push_str(&resolved);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::Docx(e.to_string())),
        }
    }

    Ok(paragraphs)
}

fn resolve_entity(name: &str) -> Option<String> {
    if let Some(code) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(code, 16).ok().and_then(char::from_u32).map(String::from);
    }
    if let Some(code) = name.strip_prefix('#') {
        return code.parse::<u32>().ok().and_then(char::from_u32).map(String::from);
    }
    quick_xml::escape::resolve_predefined_entity(name).map(String::from)
}

fn extract_spreadsheet(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ExtractError::EmptyWorkbook)?
        .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().take(SHEET_MAX_COLS).map(cell_text).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    Ok(render_table(&rows, range.width() > SHEET_MAX_COLS))
}

fn cell_text(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}

/// Renders a header row plus up to `SHEET_MAX_ROWS` data rows as aligned text.
fn render_table(rows: &[Vec<String>], truncated_cols: bool) -> String {
    // Header-only sheets carry no data.
    if rows.len() <= 1 {
        return EMPTY_SHEET.to_string();
    }

    let shown = &rows[..rows.len().min(SHEET_MAX_ROWS + 1)];
    let columns = shown.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            shown
                .iter()
                .filter_map(|r| r.get(col))
                .map(|c| c.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::from("Excel File Content:\n");
    for row in shown {
        let line: Vec<String> = (0..columns)
            .map(|col| {
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}", width = widths[col])
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    let hidden_rows = rows.len() - shown.len();
    if hidden_rows > 0 {
        out.push_str(&format!("... {hidden_rows} more rows\n"));
    }
    if truncated_cols {
        out.push_str(&format!("... only the first {SHEET_MAX_COLS} columns are shown\n"));
    }
    out
}

fn describe_image(bytes: &[u8]) -> Result<String, ExtractError> {
    let format = image::guess_format(bytes)?;
    let image = image::load_from_memory_with_format(bytes, format)?;
    Ok(format!(
        "Image file uploaded. Format: {}, Size: {}x{}, Mode: {}.\n\
         Please describe the content of your image for analysis.",
        mime_type(format),
        image.width(),
        image.height(),
        color_mode(image.color())
    ))
}

fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        _ => "application/octet-stream",
    }
}

fn color_mode(color: ColorType) -> String {
    match color {
        ColorType::L8 => "L".to_string(),
        ColorType::La8 => "LA".to_string(),
        ColorType::Rgb8 => "RGB".to_string(),
        ColorType::Rgba8 => "RGBA".to_string(),
        ColorType::L16 => "I;16".to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buf);
            let options = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            zip.start_file(DOCX_BODY, options).unwrap();
            zip.write_all(document_xml.as_bytes()).unwrap();
            zip.finish().unwrap();
        }
        buf.into_inner()
    }

    /// Writes each sheet's rows (`None` leaves the row blank) into an .xlsx buffer.
    fn xlsx_bytes(sheets: &[&[Option<Vec<String>>]]) -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for rows in sheets {
            let sheet = workbook.add_worksheet();
            for (r, row) in rows.iter().enumerate() {
                let Some(values) = row else { continue };
                for (c, cell) in values.iter().enumerate() {
                    sheet.write_string(r as u32, c as u16, cell).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    fn cells(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|v| v.to_string()).collect())
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_file_name("CV.PDF").unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_file_name("a.b.docx").unwrap(), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_file_name("sheet.xls").unwrap(), DocumentKind::Spreadsheet);
        assert_eq!(DocumentKind::from_file_name("photo.jpeg").unwrap(), DocumentKind::Image);
    }

    #[test]
    fn test_kind_errors() {
        assert!(matches!(DocumentKind::from_file_name(""), Err(ExtractError::MissingFileName)));
        assert!(matches!(DocumentKind::from_file_name("README"), Err(ExtractError::MissingExtension)));
        assert!(matches!(DocumentKind::from_file_name("notes."), Err(ExtractError::MissingExtension)));
        assert!(matches!(
            DocumentKind::from_file_name("virus.exe"),
            Err(ExtractError::Unsupported(ext)) if ext == "exe"
        ));
    }

    #[test]
    fn test_plain_text() {
        let doc = extract_text("resume.txt", "Senior Rust engineer".as_bytes()).unwrap();
        assert_eq!(doc.kind, DocumentKind::Text);
        assert_eq!(doc.text, "Senior Rust engineer");
    }

    #[test]
    fn test_plain_text_invalid_utf8() {
        assert!(matches!(
            extract_text("resume.txt", &[0xff, 0xfe, 0x00]),
            Err(ExtractError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_docx_paragraphs() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Rust </w:t></w:r><w:r><w:t>&amp; Go</w:t></w:r></w:p>
    <w:p><w:r><w:t>   </w:t></w:r></w:p>
    <w:p><w:pPr/></w:p>
  </w:body>
</w:document>"#;
        let doc = extract_text("cv.docx", &docx_bytes(xml)).unwrap();
        assert_eq!(doc.text, "Jane Doe\nRust & Go\n");
    }

    #[test]
    fn test_docx_without_text() {
        let xml = r#"<w:document xmlns:w="w"><w:body><w:p/></w:body></w:document>"#;
        let doc = extract_text("blank.docx", &docx_bytes(xml)).unwrap();
        assert_eq!(doc.text, EMPTY_DOCX);
    }

    #[test]
    fn test_docx_not_a_zip() {
        assert!(matches!(
            extract_text("broken.docx", b"not a zip"),
            Err(ExtractError::Docx(_))
        ));
    }

    #[test]
    fn test_image_description() {
        let doc = extract_text("me.png", &png_bytes(4, 3)).unwrap();
        assert_eq!(doc.kind, DocumentKind::Image);
        assert!(doc.text.contains("Format: image/png, Size: 4x3, Mode: RGB."));
        assert!(doc.text.ends_with("Please describe the content of your image for analysis."));
    }

    #[test]
    fn test_image_garbage_fails() {
        assert!(matches!(
            extract_text("me.jpg", b"definitely not an image"),
            Err(ExtractError::Image(_))
        ));
    }

    #[test]
    fn test_render_table_aligns_and_prefixes() {
        let rows = vec![
            vec!["Skill".to_string(), "Years".to_string()],
            vec!["Rust".to_string(), "5".to_string()],
            vec!["TypeScript".to_string(), "3".to_string()],
        ];
        let text = render_table(&rows, false);
        assert_eq!(
            text,
            "Excel File Content:\nSkill       Years\nRust        5\nTypeScript  3\n"
        );
    }

    #[test]
    fn test_render_table_header_only_is_empty() {
        let rows = vec![vec!["Skill".to_string()]];
        assert_eq!(render_table(&rows, false), EMPTY_SHEET);
        assert_eq!(render_table(&[], false), EMPTY_SHEET);
    }

    #[test]
    fn test_render_table_limits_rows() {
        let mut rows = vec![vec!["n".to_string()]];
        rows.extend((0..150).map(|i| vec![i.to_string()]));
        let text = render_table(&rows, true);
        assert!(text.contains("... 50 more rows"));
        assert!(text.contains("first 20 columns"));
        // prefix line + header + 100 rows + 2 notes
        assert_eq!(text.lines().count(), 104);
    }

    #[test]
    fn test_xlsx_first_sheet_without_blank_rows() {
        let skills = [cells(&["Skill", "Level"]), None, cells(&["Rust", "Senior"])];
        let other = [cells(&["Salary"]), cells(&["Confidential"])];
        let bytes = xlsx_bytes(&[&skills, &other]);

        let doc = extract_text("skills.xlsx", &bytes).unwrap();
        assert_eq!(doc.kind, DocumentKind::Spreadsheet);
        assert_eq!(
            doc.text,
            "Excel File Content:\nSkill  Level\nRust   Senior\n"
        );
        assert!(!doc.text.contains("Confidential"));
    }

    #[test]
    fn test_xlsx_keeps_first_twenty_columns() {
        let header: Vec<String> = (0..25).map(|i| format!("h{i}")).collect();
        let values: Vec<String> = (0..25).map(|i| format!("v{i}")).collect();
        let rows = [Some(header), Some(values)];
        let bytes = xlsx_bytes(&[&rows]);

        let text = extract_text("wide.xlsx", &bytes).unwrap().text;
        assert!(text.contains("h19"));
        assert!(text.contains("v19"));
        assert!(!text.contains("h20"));
        assert!(!text.contains("v24"));
        assert!(text.ends_with("... only the first 20 columns are shown\n"));
    }

    #[test]
    fn test_xlsx_empty_sheet() {
        let empty: [Option<Vec<String>>; 0] = [];
        let bytes = xlsx_bytes(&[&empty]);
        assert_eq!(extract_text("empty.xlsx", &bytes).unwrap().text, EMPTY_SHEET);
    }

    #[test]
    fn test_xlsx_corrupt_workbook() {
        let result = extract_text("broken.xlsx", b"definitely not a workbook");
        assert!(matches!(result, Err(ExtractError::Spreadsheet(_))));
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("amp").as_deref(), Some("&"));
        assert_eq!(resolve_entity("#x41").as_deref(), Some("A"));
        assert_eq!(resolve_entity("#66").as_deref(), Some("B"));
        assert_eq!(resolve_entity("bogus"), None);
    }
}
