pub mod pdfextract;
pub mod pdftotext;

use crate::error::RoyaltyError;

/// Raw text of a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

impl PageContent {
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        PageContent {
            page_number,
            text: text.into(),
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page
    /// in document order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RoyaltyError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split text on form feeds into numbered pages.
///
/// pdftotext terminates every page with `\x0c`, which leaves an empty chunk
/// after the last page.
pub(crate) fn split_form_feeds(text: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent::new(i + 1, page_text))
        .collect();

    if pages.len() > 1 && pages.last().is_some_and(|p| p.text.trim().is_empty()) {
        pages.pop();
    }

    pages
}
