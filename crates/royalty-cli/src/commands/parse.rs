use royalty_core::error::RoyaltyError;
use royalty_core::export::{write_csv, write_csv_file};
use std::path::PathBuf;

use crate::commands::{extractor, resolve_layout};
use crate::output;
use crate::{ExtractionArgs, OutputFormat};

pub fn run(
    pdf_file: PathBuf,
    output_format: OutputFormat,
    output_file: Option<PathBuf>,
    args: &ExtractionArgs,
) -> Result<(), RoyaltyError> {
    let layout = resolve_layout(args)?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = extractor(args.backend);
    let parsed = royalty_core::parse_pdf(&pdf_bytes, extractor.as_ref(), &layout)?;

    match output_file {
        Some(path) => {
            // Always write CSV when saving to file
            write_csv_file(&parsed.records, &path)?;
            eprintln!(
                "Parsed {} record(s) from {} page(s), written to {}",
                parsed.records.len(),
                parsed.pages,
                path.display()
            );
            if !parsed.warnings.is_empty() {
                for w in &parsed.warnings {
                    eprintln!(
                        "  warning: page {} block {}: {}",
                        w.page_number, w.block_index, w.reason
                    );
                }
            }
            if !parsed.skipped.is_empty() {
                let tokens: usize = parsed.skipped.iter().map(|s| s.tokens.len()).sum();
                eprintln!(
                    "  {} token(s) in {} span(s) skipped during parsing",
                    tokens,
                    parsed.skipped.len()
                );
            }
        }
        None => match output_format {
            OutputFormat::Csv => write_csv(&parsed.records, std::io::stdout().lock())?,
            OutputFormat::Json => output::json::print(&parsed)?,
            OutputFormat::Table => println!("{}", output::table::format_records(&parsed)),
        },
    }

    Ok(())
}
