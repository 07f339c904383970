use royalty_core::model::{ParsedStatement, Record};
use royalty_core::parsing::PageBreakdown;
use std::fmt::Write;

const HEADERS: [&str; 11] = [
    "Title",
    "Source",
    "Reference",
    "Product",
    "Income type",
    "Period",
    "Rate",
    "Qty",
    "Received",
    "% Payable",
    "Payable",
];

fn cells(r: &Record) -> [&str; 11] {
    [
        &r.title,
        &r.source,
        &r.reference,
        r.product.as_deref().unwrap_or("-"),
        &r.income_type,
        &r.income_period,
        &r.rate,
        &r.quantity,
        &r.amount_received,
        &r.percent_payable,
        &r.amount_payable,
    ]
}

/// Format parsed records as an aligned text table with a summary footer.
pub fn format_records(parsed: &ParsedStatement) -> String {
    let mut out = String::new();

    if parsed.records.is_empty() {
        out.push_str("No records found.\n");
    } else {
        let rows: Vec<[&str; 11]> = parsed.records.iter().map(cells).collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.chars().count());
            }
        }

        push_row(&mut out, &HEADERS, &widths);
        let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        let _ = writeln!(out, "{}", "-".repeat(total));
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
    }

    let artist = parsed
        .records
        .first()
        .map(|r| r.artist.as_str())
        .unwrap_or("-");
    let _ = writeln!(
        out,
        "\n{} record(s) for {} from {} page(s)",
        parsed.records.len(),
        artist,
        parsed.pages
    );
    if !parsed.skipped.is_empty() {
        let _ = writeln!(out, "{} span(s) of leftover tokens skipped", parsed.skipped.len());
    }
    for w in &parsed.warnings {
        let _ = writeln!(
            out,
            "warning: page {} block {} token {}: {}",
            w.page_number, w.block_index, w.offset, w.reason
        );
    }

    out
}

fn push_row(out: &mut String, row: &[&str], widths: &[usize]) {
    let line = row
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Format one page's header and blocks with each token's shape.
pub fn format_breakdown(page: &PageBreakdown) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Page {} ===\n", page.page_number);
    let _ = writeln!(out, "  Header ({} token(s)):", page.header.len());
    for (i, token) in page.header.iter().enumerate() {
        let _ = writeln!(out, "    {:>3}  {}", i, token);
    }

    if page.blocks.is_empty() {
        let _ = writeln!(out, "\n  No blocks.");
    }

    for (i, block) in page.blocks.iter().enumerate() {
        let _ = writeln!(out, "\n  Block {} ({} token(s)):", i, block.len());
        for (j, (token, shape)) in block.iter().enumerate() {
            let _ = writeln!(out, "    {:>3}  {:<6} {}", j, shape.to_string(), token);
        }
    }
    out.push('\n');

    out
}
