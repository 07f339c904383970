use crate::error::RoyaltyError;
use crate::extraction::{PageContent, PdfExtractor};

/// Pure-Rust PDF extraction backend built on the `pdf-extract` crate.
///
/// Needs no system binaries, but its line breaking differs from poppler's on
/// some statements, so the header size may need recalibrating with
/// `royalty tokens`.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl PdfExtractor for PdfExtractBackend {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RoyaltyError> {
        let texts = ::pdf_extract::extract_text_from_mem_by_pages(pdf_bytes).map_err(|e| {
            RoyaltyError::Extraction(format!("failed to extract text from PDF: {e}"))
        })?;

        log::debug!("pdf-extract extracted {} page(s)", texts.len());

        Ok(texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageContent::new(i + 1, text))
            .collect())
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
