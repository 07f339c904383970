/// Split one page of extracted text into tokens, one per non-blank line,
/// with leading whitespace removed.
pub fn tokenize(page_text: &str) -> Vec<String> {
    page_text
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
