//! Integration tests for the parse_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use royalty_core::error::RoyaltyError;
use royalty_core::export::write_csv;
use royalty_core::extraction::{PageContent, PdfExtractor};
use royalty_core::layout::schema::{ParseMode, StatementLayout};
use royalty_core::parse_pdf;

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RoyaltyError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RoyaltyError> {
        Err(RoyaltyError::Extraction("corrupt document".into()))
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent::new(number, lines.join("\n"))
}

/// Page text with the writer statement's 29-line header in front.
fn statement_page(number: usize, body: &[&str]) -> PageContent {
    let mut lines: Vec<String> = (1..=29).map(|i| format!("  Header line {i}")).collect();
    lines.extend(body.iter().map(|s| format!("   {s}")));
    PageContent::new(number, lines.join("\n"))
}

fn no_header() -> StatementLayout {
    StatementLayout {
        header_tokens: 0,
        ..StatementLayout::default()
    }
}

const LINE8: [&str; 8] = [
    "0.50",
    "$100.00",
    "50.00",
    "3",
    "10.0",
    "01/15/2020",
    "200",
    "Mechanical",
];

const LINE9: [&str; 9] = [
    "0.75",
    "$7.50",
    "10.00",
    "12",
    "0.091",
    "02/01/2020",
    "Digital Album",
    "4411",
    "Performance",
];

// ---------------------------------------------------------------------------
// Test 1: Title and source carried from page 1 to an 8-column line on page 2
// ---------------------------------------------------------------------------
#[test]
fn two_pages_share_title_and_source() {
    let mut first = vec!["Sad Song", "SoundExchange"];
    first.extend(LINE9);
    first.push("Composition Total:");
    let mut second: Vec<&str> = LINE8.to_vec();
    second.push("Page 2 of 2");

    let extractor = MockExtractor {
        pages: vec![page(1, &first), page(2, &second)],
    };

    let parsed = parse_pdf(&[], &extractor, &no_header()).unwrap();

    assert_eq!(parsed.records.len(), 2);
    let (a, b) = (&parsed.records[0], &parsed.records[1]);
    assert_eq!(a.title, "Sad Song");
    assert_eq!(a.source, "SoundExchange");
    assert_eq!((a.title.as_str(), a.source.as_str()), (b.title.as_str(), b.source.as_str()));
    assert_eq!(a.product.as_deref(), Some("Digital Album"));
    assert_eq!(b.product, None);
    assert_eq!(b.income_type, "Mechanical");
}

// ---------------------------------------------------------------------------
// Test 2: Realistic pages with a 29-line header and several blocks
// ---------------------------------------------------------------------------
#[test]
fn header_is_skipped_on_every_page() {
    let mut body1 = vec!["Sad Song", "BMI"];
    body1.extend(LINE8);
    body1.extend(LINE8);
    body1.extend(["$200.00", "Composition Total:"]);
    body1.extend(["Happy Song", "ASCAP"]);
    body1.extend(LINE9);
    body1.extend(["$7.50", "Composition Total:"]);

    let mut body2 = vec!["Third Song", "HFA"];
    body2.extend(LINE8);
    body2.extend(["$100.00", "Composition Total:"]);

    let extractor = MockExtractor {
        pages: vec![statement_page(1, &body1), statement_page(2, &body2)],
    };

    let parsed = parse_pdf(&[], &extractor, &StatementLayout::default()).unwrap();

    let titles: Vec<&str> = parsed.records.iter().map(|r| r.title.as_str()).collect();
    let sources: Vec<&str> = parsed.records.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(titles, vec!["Sad Song", "Sad Song", "Happy Song", "Third Song"]);
    assert_eq!(sources, vec!["BMI", "BMI", "ASCAP", "HFA"]);
    assert!(parsed.records.iter().all(|r| r.artist == "Amy Rigby"));
    assert!(parsed.warnings.is_empty());
    // Each block ends with its total amount, too short to be a line.
    assert_eq!(parsed.skipped.len(), 3);
    assert!(parsed.skipped.iter().all(|s| s.tokens.len() == 1));
}

// ---------------------------------------------------------------------------
// Test 3: Running twice on the same document gives identical CSV
// ---------------------------------------------------------------------------
#[test]
fn repeated_runs_are_byte_identical() {
    let mut body = vec!["Sad Song", "BMI"];
    body.extend(LINE8);
    body.extend(LINE9);
    let extractor = MockExtractor {
        pages: vec![page(1, &body)],
    };

    let render = || {
        let parsed = parse_pdf(&[], &extractor, &no_header()).unwrap();
        let mut out = Vec::new();
        write_csv(&parsed.records, &mut out).unwrap();
        out
    };

    let first = render();
    assert_eq!(first, render());
    assert_eq!(String::from_utf8(first).unwrap().lines().count(), 3);
}

// ---------------------------------------------------------------------------
// Test 4: Extraction failure aborts the run
// ---------------------------------------------------------------------------
#[test]
fn extraction_failure_is_fatal() {
    let result = parse_pdf(b"%PDF-", &FailingExtractor, &StatementLayout::default());
    assert!(matches!(result, Err(RoyaltyError::Extraction(_))));
}

// ---------------------------------------------------------------------------
// Test 5: Lenient vs strict handling of a line matching neither layout
// ---------------------------------------------------------------------------
#[test]
fn malformed_line_lenient_and_strict() {
    let body = [
        "Sad Song", "BMI", "0.50", "$1.00", "2.00", "1", "2.0", "03/01/2020", "Stream", "Digital",
    ];
    let extractor = MockExtractor {
        pages: vec![page(1, &body)],
    };

    let lenient = parse_pdf(&[], &extractor, &no_header()).unwrap();
    assert_eq!(lenient.records.len(), 1);
    assert_eq!(lenient.records[0].reference, "Stream");
    assert_eq!(lenient.warnings.len(), 1);

    let strict = StatementLayout {
        mode: ParseMode::Strict,
        ..no_header()
    };
    let result = parse_pdf(&[], &extractor, &strict);
    assert!(matches!(result, Err(RoyaltyError::LayoutMismatch { .. })));
}

// ---------------------------------------------------------------------------
// Test 6: Pages that are only header produce nothing
// ---------------------------------------------------------------------------
#[test]
fn header_only_pages_produce_no_records() {
    let extractor = MockExtractor {
        pages: vec![statement_page(1, &[]), page(2, &["", "   "])],
    };

    let parsed = parse_pdf(&[], &extractor, &StatementLayout::default()).unwrap();

    assert_eq!(parsed.pages, 2);
    assert!(parsed.records.is_empty());
    assert!(parsed.skipped.is_empty());
}
