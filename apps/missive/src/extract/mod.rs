//! Document text extraction — turns a resume container into plain text.
//!
//! Extraction is tolerant by contract: a page or paragraph that yields
//! no text is skipped, and a container that cannot be opened at all
//! produces an empty string plus a logged warning. Callers never see an
//! error from this layer; only reading the file itself can fail.

mod docx;
mod pdf;

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::errors::AppError;

/// Container formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves a format from the file extension, case-insensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Extracts plain text from a document held in memory.
pub fn extract(bytes: &[u8], format: DocumentFormat) -> String {
    match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes),
        DocumentFormat::Docx => docx::extract_text(bytes),
    }
}

/// Reads a document from disk and extracts its text. An unrecognized
/// extension warns and yields empty text without reading the file.
pub fn extract_from_file(path: &Path) -> Result<String, AppError> {
    let Some(format) = DocumentFormat::from_path(path) else {
        warn!(
            "Unsupported file format: {} (expected a .pdf or .docx file)",
            path.display()
        );
        return Ok(String::new());
    };
    let bytes = fs::read(path)?;
    Ok(extract(&bytes, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_resolves_pdf_extension() {
        let path = PathBuf::from("resume.pdf");
        assert_eq!(DocumentFormat::from_path(&path), Some(DocumentFormat::Pdf));
    }

    #[test]
    fn test_format_resolves_docx_extension() {
        let path = PathBuf::from("resume.docx");
        assert_eq!(DocumentFormat::from_path(&path), Some(DocumentFormat::Docx));
    }

    #[test]
    fn test_format_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("RESUME.PDF")),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("Resume.Docx")),
            Some(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("resume.txt")), None);
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("resume")), None);
    }

    #[test]
    fn test_unknown_extension_yields_empty_text_without_reading() {
        // The path does not exist, so succeeding at all proves the
        // format check comes before the read.
        let text = extract_from_file(Path::new("no_such_dir/resume.txt")).unwrap();
        assert_eq!(text, "");
    }
}
