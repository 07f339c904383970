use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tokens in the page header of the writer statement layout.
pub const DEFAULT_HEADER_TOKENS: usize = 29;

/// Token that closes every composition block.
pub const DEFAULT_SENTINEL: &str = "Composition Total:";

pub const DEFAULT_ARTIST: &str = "Amy Rigby";

/// How the line parser treats a line that does not match the 9-column layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Assume the 8-column layout without checking it.
    #[default]
    Lenient,
    /// Require the 8-column layout to match, otherwise fail the run.
    Strict,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Lenient => write!(f, "lenient"),
            ParseMode::Strict => write!(f, "strict"),
        }
    }
}

/// Properties of one statement format that the parser cannot discover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLayout {
    /// Artist name attached to every record.
    #[serde(default = "default_artist")]
    pub artist: String,
    /// Tokens dropped from the top of every page.
    #[serde(default = "default_header_tokens")]
    pub header_tokens: usize,
    /// Literal token separating blocks.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    #[serde(default)]
    pub mode: ParseMode,
}

impl Default for StatementLayout {
    fn default() -> Self {
        StatementLayout {
            artist: default_artist(),
            header_tokens: default_header_tokens(),
            sentinel: default_sentinel(),
            mode: ParseMode::default(),
        }
    }
}

fn default_artist() -> String {
    DEFAULT_ARTIST.to_string()
}

fn default_header_tokens() -> usize {
    DEFAULT_HEADER_TOKENS
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}
