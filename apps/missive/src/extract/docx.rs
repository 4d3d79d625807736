//! DOCX text extraction — opens the ZIP container and walks the main
//! document part, keeping one line per non-empty paragraph.

use std::io::{Cursor, Read};

use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;
use zip::ZipArchive;

/// Extracts paragraph text from a DOCX container. Returns an empty
/// string with a warning if the archive or its main part is unreadable.
pub fn extract_text(bytes: &[u8]) -> String {
    match document_paragraphs(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read DOCX file. The file may be corrupted: {e}");
            String::new()
        }
    }
}

/// A .docx file is a ZIP archive whose body lives in
/// `word/document.xml`; paragraph text is the concatenation of the
/// `w:t` runs inside each `w:p` element.
fn document_paragraphs(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut part = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut out = String::new();
    let mut paragraph = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Event::End(ref e) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => {
                    if !paragraph.trim().is_empty() {
                        out.push_str(&paragraph);
                        out.push('\n');
                    }
                    paragraph.clear();
                }
                _ => {}
            },
            Event::Text(e) if in_text_run => paragraph.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out.trim().to_string())
}
