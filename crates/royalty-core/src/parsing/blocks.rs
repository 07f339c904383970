use crate::layout::schema::StatementLayout;

/// Split a page's tokens into blocks.
///
/// The first `header_tokens` tokens are dropped, then the rest is split on
/// tokens equal to the sentinel. Sentinels are discarded and never produce
/// empty blocks.
pub fn segment<'a>(tokens: &'a [String], layout: &StatementLayout) -> Vec<&'a [String]> {
    let body = tokens.get(layout.header_tokens..).unwrap_or(&[]);

    body.split(|t| *t == layout.sentinel)
        .filter(|block| !block.is_empty())
        .collect()
}
