pub mod blocks;
pub mod line;
pub mod shape;
pub mod tokenize;

use crate::error::RoyaltyError;
use crate::extraction::PageContent;
use crate::layout::schema::StatementLayout;
use crate::layout::validate_layout;
use crate::model::{ParseState, ParsedStatement, Shape};
use blocks::segment;
use line::{parse_block, BlockContext};
use shape::classify;
use tokenize::tokenize;

/// Parse extracted pages into royalty records.
///
/// Pages are processed in order with a single [`ParseState`], so a title or
/// source introduced on one page applies to lines on the following pages
/// until a new one is detected.
pub fn parse_pages(
    pages: &[PageContent],
    layout: &StatementLayout,
) -> Result<ParsedStatement, RoyaltyError> {
    validate_layout(layout)?;

    let mut state = ParseState::new();
    let mut parsed = ParsedStatement {
        pages: pages.len(),
        ..ParsedStatement::default()
    };

    for page in pages {
        let tokens = tokenize(&page.text);
        let blocks = segment(&tokens, layout);

        log::debug!(
            "page {}: {} token(s), {} block(s)",
            page.page_number,
            tokens.len(),
            blocks.len()
        );

        for (block_index, block) in blocks.into_iter().enumerate() {
            let ctx = BlockContext {
                page_number: page.page_number,
                block_index,
            };
            let outcome = parse_block(block, &mut state, layout, ctx)?;

            parsed.records.extend(outcome.records);
            parsed.skipped.extend(outcome.skipped);
            parsed.warnings.extend(outcome.warnings);
        }
    }

    log::info!(
        "parsed {} record(s) from {} page(s) ({} skipped span(s), {} warning(s))",
        parsed.records.len(),
        parsed.pages,
        parsed.skipped.len(),
        parsed.warnings.len()
    );

    Ok(parsed)
}

/// A page broken down the way the parser sees it, for calibrating layouts.
#[derive(Debug, Clone)]
pub struct PageBreakdown {
    pub page_number: usize,
    pub header: Vec<String>,
    pub blocks: Vec<Vec<(String, Shape)>>,
}

/// Tokenize and segment one page without parsing lines.
pub fn breakdown_page(page: &PageContent, layout: &StatementLayout) -> PageBreakdown {
    let tokens = tokenize(&page.text);
    let header_len = layout.header_tokens.min(tokens.len());

    let blocks: Vec<Vec<(String, Shape)>> = segment(&tokens, layout)
        .into_iter()
        .map(|block| {
            block
                .iter()
                .map(|t| (t.clone(), classify(t)))
                .collect()
        })
        .collect();

    PageBreakdown {
        page_number: page.page_number,
        header: tokens[..header_len].to_vec(),
        blocks,
    }
}
