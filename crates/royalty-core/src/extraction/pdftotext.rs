use crate::error::RoyaltyError;
use crate::extraction::{split_form_feeds, PageContent, PdfExtractor};
use std::io::Write;
use std::process::{Command, Output};

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs pdftotext in its default reading-order mode, which puts each table
/// cell of a statement on its own line. `-layout` would merge columns into
/// a single line and break tokenization.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RoyaltyError> {
        // pdftotext only reads from a path, so stage the bytes in a temp file
        // that is removed when it goes out of scope.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| RoyaltyError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| RoyaltyError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RoyaltyError::PdftotextNotFound
                } else {
                    RoyaltyError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        let text = decode_output(output)?;
        let pages = split_form_feeds(&text);

        log::debug!("pdftotext extracted {} page(s)", pages.len());

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn decode_output(output: Output) -> Result<String, RoyaltyError> {
    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(RoyaltyError::PdftotextFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
