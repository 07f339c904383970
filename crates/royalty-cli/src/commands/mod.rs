pub mod layout;
pub mod parse;
pub mod tokens;

use royalty_core::error::RoyaltyError;
use royalty_core::extraction::pdfextract::PdfExtractBackend;
use royalty_core::extraction::pdftotext::PdftotextExtractor;
use royalty_core::extraction::PdfExtractor;
use royalty_core::layout::schema::{ParseMode, StatementLayout};
use royalty_core::layout::{load_layout, validate_layout};

use crate::{Backend, ExtractionArgs};

/// Build the effective layout: the layout file (or defaults), then flags.
fn resolve_layout(args: &ExtractionArgs) -> Result<StatementLayout, RoyaltyError> {
    let mut layout = match &args.layout {
        Some(path) => load_layout(path)?,
        None => StatementLayout::default(),
    };

    if let Some(artist) = &args.artist {
        layout.artist = artist.clone();
    }
    if let Some(header_tokens) = args.header_tokens {
        layout.header_tokens = header_tokens;
    }
    if let Some(sentinel) = &args.sentinel {
        layout.sentinel = sentinel.clone();
    }
    if args.strict {
        layout.mode = ParseMode::Strict;
    }

    validate_layout(&layout)?;
    Ok(layout)
}

fn extractor(backend: Backend) -> Box<dyn PdfExtractor> {
    match backend {
        Backend::Pdftotext => Box::new(PdftotextExtractor::new()),
        Backend::PdfExtract => Box::new(PdfExtractBackend::new()),
    }
}
