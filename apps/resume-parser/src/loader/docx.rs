//! DOCX text extraction.
//!
//! A DOCX file is a zip archive of WordprocessingML parts. Text is collected from the
//! header parts, the main document part and the footer parts, in that order.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::ZipArchive;

use super::{DocumentFormat, TextLoader};
use crate::errors::{ParserError, Result};

const DOCUMENT_PART: &str = "word/document.xml";

pub struct DocxLoader;

impl TextLoader for DocxLoader {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    /// Tabs are flattened to single spaces. An empty document yields `None`.
    fn load(&self, path: &Path) -> Result<Option<String>> {
        let file = File::open(path)?;
        let text = extract_docx_text(file)?;
        debug!(path = %path.display(), chars = text.len(), "DOCX text extracted");
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(text.replace('\t', " ")))
    }
}

/// Extracts the raw (tab-preserving, trimmed) text of a DOCX archive.
pub fn extract_docx_text<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = ZipArchive::new(reader)?;
    let names: Vec<String> = archive.file_names().map(String::from).collect();

    if !names.iter().any(|n| n == DOCUMENT_PART) {
        return Err(ParserError::Docx(format!("archive has no {DOCUMENT_PART}")));
    }

    let mut text = String::new();
    for name in names.iter().filter(|n| is_numbered_part(n, "header")) {
        text.push_str(&part_text(&mut archive, name)?);
    }
    text.push_str(&part_text(&mut archive, DOCUMENT_PART)?);
    for name in names.iter().filter(|n| is_numbered_part(n, "footer")) {
        text.push_str(&part_text(&mut archive, name)?);
    }

    Ok(text.trim().to_string())
}

/// Matches `word/header.xml`, `word/header1.xml`, `word/footer12.xml` and so on.
fn is_numbered_part(name: &str, kind: &str) -> bool {
    name.strip_prefix("word/")
        .and_then(|rest| rest.strip_prefix(kind))
        .and_then(|rest| rest.strip_suffix(".xml"))
        .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_digit()))
}

fn part_text<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut part = archive.by_name(name)?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    xml_to_text(&xml)
}

/// Flattens WordprocessingML into text: runs become text, tabs become `\t`,
/// breaks become `\n`, and each paragraph opens with a blank line.
pub fn xml_to_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;
    // Tab-stop definitions (`w:tabs/w:tab`) carry no text.
    let mut tab_stop_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = true,
                b"w:tabs" => tab_stop_depth += 1,
                name if tab_stop_depth == 0 => push_structural(&mut text, name),
                _ => {}
            },
            Event::Empty(e) if tab_stop_depth == 0 => push_structural(&mut text, e.name().as_ref()),
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:tabs" => tab_stop_depth = tab_stop_depth.saturating_sub(1),
                _ => {}
            },
            Event::Text(t) if in_run_text => {
                let run = t
                    .unescape()
                    .map_err(|e| ParserError::Docx(format!("bad text run: {e}")))?;
                text.push_str(&run);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

fn push_structural(text: &mut String, name: &[u8]) {
    match name {
        b"w:p" => text.push_str("\n\n"),
        b"w:tab" => text.push('\t'),
        b"w:br" | b"w:cr" => text.push('\n'),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in parts {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn body(paragraphs: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{paragraphs}</w:body></w:document>"#
        )
    }

    #[test]
    fn test_xml_paragraphs_tabs_and_breaks() {
        let xml = body(
            r#"<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p><w:r><w:t>Phone:</w:t><w:tab/><w:t>555</w:t><w:br/><w:t>next</w:t></w:r></w:p>"#,
        );
        let text = xml_to_text(&xml).unwrap();
        assert_eq!(text, "\n\nJane Doe\n\nPhone:\t555\nnext");
    }

    #[test]
    fn test_xml_unescapes_entities() {
        let xml = body(r#"<w:p><w:r><w:t>R&amp;D &lt;team&gt;</w:t></w:r></w:p>"#);
        assert_eq!(xml_to_text(&xml).unwrap(), "\n\nR&D <team>");
    }

    #[test]
    fn test_xml_ignores_tab_stop_definitions() {
        let xml = body(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Skills</w:t></w:r></w:p>"#,
        );
        assert_eq!(xml_to_text(&xml).unwrap(), "\n\nSkills");
    }

    #[test]
    fn test_xml_ignores_text_outside_runs() {
        let xml = body(r#"<w:p><w:r><w:instrText>PAGE</w:instrText><w:t>kept</w:t></w:r></w:p>"#);
        assert_eq!(xml_to_text(&xml).unwrap(), "\n\nkept");
    }

    #[test]
    fn test_archive_orders_header_document_footer() {
        let header = body(r#"<w:p><w:r><w:t>HEADER</w:t></w:r></w:p>"#);
        let document = body(r#"<w:p><w:r><w:t>BODY</w:t></w:r></w:p>"#);
        let footer = body(r#"<w:p><w:r><w:t>FOOTER</w:t></w:r></w:p>"#);
        let bytes = build_docx(&[
            ("word/footer1.xml", &footer),
            (DOCUMENT_PART, &document),
            ("word/header1.xml", &header),
        ]);

        let text = extract_docx_text(Cursor::new(bytes)).unwrap();
        assert_eq!(text, "HEADER\n\nBODY\n\nFOOTER");
    }

    #[test]
    fn test_archive_without_document_part_fails() {
        let bytes = build_docx(&[("word/styles.xml", "<w:styles/>")]);
        let err = extract_docx_text(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, ParserError::Docx(_)));
    }

    #[test]
    fn test_not_a_zip_fails() {
        let err = extract_docx_text(Cursor::new(b"plain text".to_vec())).unwrap_err();
        assert!(matches!(err, ParserError::Docx(_)));
    }

    #[test]
    fn test_numbered_part_matching() {
        assert!(is_numbered_part("word/header.xml", "header"));
        assert!(is_numbered_part("word/header2.xml", "header"));
        assert!(is_numbered_part("word/footer10.xml", "footer"));
        assert!(!is_numbered_part("word/headerx.xml", "header"));
        assert!(!is_numbered_part("word/_rels/header1.xml.rels", "header"));
        assert!(!is_numbered_part("word/document.xml", "footer"));
    }

    #[test]
    fn test_loader_replaces_tabs_with_spaces() {
        let document = body(
            r#"<w:p><w:r><w:t>Name:</w:t><w:tab/><w:t>Jane</w:t></w:r></w:p>"#,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, build_docx(&[(DOCUMENT_PART, &document)])).unwrap();

        let text = DocxLoader.load(&path).unwrap();
        assert_eq!(text.as_deref(), Some("Name: Jane"));
    }

    #[test]
    fn test_loader_empty_document_is_none() {
        let document = body(r#"<w:p><w:r><w:t>   </w:t></w:r></w:p>"#);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");
        std::fs::write(&path, build_docx(&[(DOCUMENT_PART, &document)])).unwrap();

        assert_eq!(DocxLoader.load(&path).unwrap(), None);
    }
}
