use royalty_core::error::RoyaltyError;
use royalty_core::layout::schema::StatementLayout;
use royalty_core::parsing::line::{LINE_WITHOUT_PRODUCT, LINE_WITH_PRODUCT};
use std::path::Path;

pub fn show() -> Result<(), RoyaltyError> {
    let json = serde_json::to_string_pretty(&StatementLayout::default())?;
    println!("{json}");
    Ok(())
}

pub fn schema() -> Result<(), RoyaltyError> {
    let defaults = StatementLayout::default();
    print!(
        r#"JSON Layout Schema
==================

A layout file describes the parts of a statement format that cannot be
detected from the text. Every field is optional and falls back to the
default shown.

  artist         (string)  Artist name written on every record.
                           Default: "{artist}"
  header_tokens  (integer) Number of non-blank lines dropped from the top
                           of every page before blocks are looked for.
                           Default: {header_tokens}
                           Use `royalty tokens <PDF>` to count them.
  sentinel       (string)  Exact line that closes a composition block.
                           Default: "{sentinel}"
  mode           (string)  "lenient" or "strict". Lenient assumes the
                           8-column layout whenever the 9-column one does
                           not match; strict fails the run instead.
                           Default: "{mode}"

Line layouts (fixed):
  with product     {with_product}
  without product  {without_product}

Example:
{{
  "artist": "{artist}",
  "header_tokens": {header_tokens},
  "sentinel": "{sentinel}",
  "mode": "strict"
}}
"#,
        artist = defaults.artist,
        header_tokens = defaults.header_tokens,
        sentinel = defaults.sentinel,
        mode = defaults.mode,
        with_product = join_shapes(&LINE_WITH_PRODUCT),
        without_product = join_shapes(&LINE_WITHOUT_PRODUCT),
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), RoyaltyError> {
    let layout = royalty_core::layout::load_layout(file)?;

    println!("Layout '{}' is valid.", file.display());
    println!("  Artist: {}", layout.artist);
    println!("  Header tokens: {}", layout.header_tokens);
    println!("  Sentinel: {:?}", layout.sentinel);
    println!("  Mode: {}", layout.mode);

    if layout.header_tokens == 0 {
        println!("\nWarnings:");
        println!("  - header_tokens is 0, page headers will be parsed as lines");
    }

    Ok(())
}

fn join_shapes<T: ToString>(shapes: &[T]) -> String {
    shapes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
