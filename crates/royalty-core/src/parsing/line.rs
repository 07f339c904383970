use crate::error::RoyaltyError;
use crate::layout::schema::{ParseMode, StatementLayout};
use crate::model::{ParseState, ParseWarning, Record, Shape, SkippedTokens};
use crate::parsing::shape::{classify, shapes};

/// Line carrying a product column.
pub const LINE_WITH_PRODUCT: [Shape; 9] = [
    Shape::Float,
    Shape::Money,
    Shape::Float,
    Shape::Int,
    Shape::Float,
    Shape::Date,
    Shape::Name,
    Shape::Int,
    Shape::Name,
];

/// Line without a product column.
pub const LINE_WITHOUT_PRODUCT: [Shape; 8] = [
    Shape::Float,
    Shape::Money,
    Shape::Float,
    Shape::Int,
    Shape::Float,
    Shape::Date,
    Shape::Int,
    Shape::Name,
];

/// Tokens that must remain in a block before another line is attempted.
pub const MIN_LINE_WINDOW: usize = LINE_WITH_PRODUCT.len();

/// Result of matching the tokens at the cursor against the known line layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    /// The 9-column layout matched exactly.
    Line9(&'a [String]),
    /// The 8-column fallback. `verified` is false when the tokens were taken
    /// without their shapes matching.
    Line8 { tokens: &'a [String], verified: bool },
    /// Fewer than 8 tokens left.
    Short,
}

impl LineMatch<'_> {
    /// Number of tokens the line consumes.
    pub fn len(&self) -> usize {
        match self {
            LineMatch::Line9(tokens) => tokens.len(),
            LineMatch::Line8 { tokens, .. } => tokens.len(),
            LineMatch::Short => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Match the tokens at the start of `rest`, trying the 9-column layout first.
pub fn match_line(rest: &[String]) -> LineMatch<'_> {
    if let Some(window) = rest.get(..LINE_WITH_PRODUCT.len()) {
        if shapes(window) == LINE_WITH_PRODUCT {
            return LineMatch::Line9(window);
        }
    }

    match rest.get(..LINE_WITHOUT_PRODUCT.len()) {
        Some(window) => LineMatch::Line8 {
            tokens: window,
            verified: shapes(window) == LINE_WITHOUT_PRODUCT,
        },
        None => LineMatch::Short,
    }
}

/// Location of a block within the document.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext {
    pub page_number: usize,
    pub block_index: usize,
}

/// Records and diagnostics produced by one block.
#[derive(Debug, Default)]
pub struct BlockOutcome {
    pub records: Vec<Record>,
    pub skipped: Option<SkippedTokens>,
    pub warnings: Vec<ParseWarning>,
}

/// Parse every line of a block, updating the carried title and source.
///
/// A new title is detected when none is known yet or when two NAME tokens
/// sit at the cursor; its value is always the block's first token. A new
/// source is detected when none is known yet or when the token at the cursor
/// is a NAME. Parsing stops once fewer than [`MIN_LINE_WINDOW`] tokens
/// remain and the remainder is reported as skipped.
pub fn parse_block(
    block: &[String],
    state: &mut ParseState,
    layout: &StatementLayout,
    ctx: BlockContext,
) -> Result<BlockOutcome, RoyaltyError> {
    let mut outcome = BlockOutcome::default();
    let mut offset = 0;

    while block.len().saturating_sub(offset) >= MIN_LINE_WINDOW {
        if state.title.is_none() || starts_title(&block[offset..]) {
            state.title = Some(block[0].clone());
            offset += 1;
        }

        if state.source.is_none() || classify(&block[offset]) == Shape::Name {
            state.source = Some(block[offset].clone());
            offset += 1;
        }

        let (Some(title), Some(source)) = (state.title.as_deref(), state.source.as_deref()) else {
            break;
        };

        let line = match_line(&block[offset..]);
        match line {
            LineMatch::Line9(tokens) => {
                outcome
                    .records
                    .push(line_with_product(tokens, title, source, &layout.artist));
            }
            LineMatch::Line8 { tokens, verified } => {
                if !verified {
                    let found = describe_shapes(tokens);
                    if layout.mode == ParseMode::Strict {
                        return Err(RoyaltyError::LayoutMismatch {
                            page: ctx.page_number,
                            block: ctx.block_index,
                            offset,
                            found,
                        });
                    }
                    log::warn!(
                        "page {} block {}: line at token {} assumed 8-column layout but found {}",
                        ctx.page_number,
                        ctx.block_index,
                        offset,
                        found
                    );
                    outcome.warnings.push(ParseWarning {
                        page_number: ctx.page_number,
                        block_index: ctx.block_index,
                        offset,
                        reason: format!("unverified 8-column line, found {found}"),
                    });
                }
                outcome
                    .records
                    .push(line_without_product(tokens, title, source, &layout.artist));
            }
            LineMatch::Short => {
                if layout.mode == ParseMode::Strict {
                    return Err(RoyaltyError::LayoutMismatch {
                        page: ctx.page_number,
                        block: ctx.block_index,
                        offset,
                        found: describe_shapes(&block[offset..]),
                    });
                }
                break;
            }
        }
        offset += line.len();
    }

    if offset < block.len() {
        let tokens = block[offset..].to_vec();
        log::debug!(
            "page {} block {}: dropping {} trailing token(s)",
            ctx.page_number,
            ctx.block_index,
            tokens.len()
        );
        outcome.skipped = Some(SkippedTokens {
            page_number: ctx.page_number,
            block_index: ctx.block_index,
            tokens,
        });
    }

    Ok(outcome)
}

fn starts_title(rest: &[String]) -> bool {
    match rest {
        [first, second, ..] => classify(first) == Shape::Name && classify(second) == Shape::Name,
        _ => false,
    }
}

fn describe_shapes(tokens: &[String]) -> String {
    let names: Vec<String> = shapes(tokens).iter().map(|s| s.to_string()).collect();
    format!("[{}]", names.join(", "))
}

fn line_with_product(tokens: &[String], title: &str, source: &str, artist: &str) -> Record {
    Record {
        title: title.to_string(),
        artist: artist.to_string(),
        source: source.to_string(),
        reference: tokens[7].clone(),
        product: Some(tokens[6].clone()),
        income_type: tokens[8].clone(),
        income_period: tokens[5].clone(),
        rate: tokens[4].clone(),
        quantity: tokens[3].clone(),
        amount_received: tokens[2].clone(),
        percent_payable: tokens[0].clone(),
        amount_payable: tokens[1].clone(),
    }
}

fn line_without_product(tokens: &[String], title: &str, source: &str, artist: &str) -> Record {
    Record {
        title: title.to_string(),
        artist: artist.to_string(),
        source: source.to_string(),
        reference: tokens[6].clone(),
        product: None,
        income_type: tokens[7].clone(),
        income_period: tokens[5].clone(),
        rate: tokens[4].clone(),
        quantity: tokens[3].clone(),
        amount_received: tokens[2].clone(),
        percent_payable: tokens[0].clone(),
        amount_payable: tokens[1].clone(),
    }
}
