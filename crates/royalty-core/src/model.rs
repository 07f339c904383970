use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface shape of a token, derived from its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shape {
    Name,
    Date,
    Money,
    Float,
    Int,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Name => write!(f, "NAME"),
            Shape::Date => write!(f, "DATE"),
            Shape::Money => write!(f, "MONEY"),
            Shape::Float => write!(f, "FLOAT"),
            Shape::Int => write!(f, "INT"),
        }
    }
}

/// One royalty line item.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub artist: String,
    pub source: String,
    pub reference: String,
    /// Only present on lines that carry a product column.
    pub product: Option<String>,
    pub income_type: String,
    pub income_period: String,
    pub rate: String,
    pub quantity: String,
    pub amount_received: String,
    pub percent_payable: String,
    pub amount_payable: String,
}

/// Title and source carried across blocks and pages of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    pub title: Option<String>,
    pub source: Option<String>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tokens left over at the end of a block that were too few to form a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedTokens {
    pub page_number: usize,
    pub block_index: usize,
    pub tokens: Vec<String>,
}

/// A line that fell back to the 8-column layout without actually matching it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseWarning {
    pub page_number: usize,
    pub block_index: usize,
    pub offset: usize,
    pub reason: String,
}

/// Everything produced by one run over a statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedStatement {
    pub pages: usize,
    pub records: Vec<Record>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedTokens>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
}
