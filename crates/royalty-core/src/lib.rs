pub mod error;
pub mod export;
pub mod extraction;
pub mod layout;
pub mod model;
pub mod parsing;

use error::RoyaltyError;
use extraction::PdfExtractor;
use layout::schema::StatementLayout;
use model::ParsedStatement;

/// Main API entry point: extract a statement PDF and parse it into records.
///
/// Extraction failures abort before any parsing happens. Records come back in
/// page, block and line order.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    layout: &StatementLayout,
) -> Result<ParsedStatement, RoyaltyError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    log::debug!(
        "{} extracted {} page(s) from {} byte(s)",
        extractor.backend_name(),
        pages.len(),
        pdf_bytes.len()
    );

    parsing::parse_pages(&pages, layout)
}
