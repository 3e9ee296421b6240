// Candidate documents and text extraction.
//
// Extraction is a collaborator behind a trait: the pipeline only sees a
// Document with raw text, never file formats. The PDF backend concatenates
// per-page text in page order; a page with no extractable text contributes
// nothing, which is how image-only scans end up near-empty and trip the
// readability gate downstream rather than erroring here.

use std::path::Path;

use anyhow::{Context, Result};

/// One input document: the candidate's file name and its raw extracted text.
/// The query (job description) is plain text and carries no id.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub raw_text: String,
}

/// Trait for turning an uploaded file's bytes into raw text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// PDF text extraction. Concatenates whatever text each page yields.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).context("Failed to extract text from PDF")
    }
}

/// Plain-text extraction: lossy UTF-8 decode.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Pick an extractor by file extension. Anything that isn't a PDF is
/// treated as plain text.
pub fn extractor_for(path: &Path) -> Box<dyn TextExtractor> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => Box::new(PdfTextExtractor),
        _ => Box::new(PlainTextExtractor),
    }
}

/// Load one candidate document from disk. The document id is the file name.
pub fn load_document(path: &Path) -> Result<Document> {
    let id = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let raw_text = extractor_for(path)
        .extract(&bytes)
        .with_context(|| format!("Failed to extract text from {}", path.display()))?;

    Ok(Document { id, raw_text })
}
