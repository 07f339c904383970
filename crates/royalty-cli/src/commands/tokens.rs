use royalty_core::error::RoyaltyError;
use royalty_core::parsing::breakdown_page;
use std::path::PathBuf;

use crate::commands::{extractor, resolve_layout};
use crate::output;
use crate::ExtractionArgs;

pub fn run(
    pdf_file: PathBuf,
    page: Option<usize>,
    args: &ExtractionArgs,
) -> Result<(), RoyaltyError> {
    let layout = resolve_layout(args)?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let pages = extractor(args.backend).extract_pages(&pdf_bytes)?;

    if let Some(n) = page {
        if n == 0 || n > pages.len() {
            return Err(RoyaltyError::Extraction(format!(
                "page {} out of range (document has {} page(s))",
                n,
                pages.len()
            )));
        }
    }

    for content in pages
        .iter()
        .filter(|p| page.map_or(true, |n| p.page_number == n))
    {
        let breakdown = breakdown_page(content, &layout);
        print!("{}", output::table::format_breakdown(&breakdown));
    }

    Ok(())
}
