pub mod schema;

use crate::error::RoyaltyError;
use schema::StatementLayout;
use std::path::Path;

/// Load a statement layout from a JSON file.
pub fn load_layout(path: &Path) -> Result<StatementLayout, RoyaltyError> {
    let content = std::fs::read_to_string(path).map_err(|e| RoyaltyError::LayoutLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_layout(&content, path)
}

/// Parse a statement layout from a JSON string.
pub fn parse_layout(json: &str, source: &Path) -> Result<StatementLayout, RoyaltyError> {
    let layout: StatementLayout =
        serde_json::from_str(json).map_err(|e| RoyaltyError::LayoutLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Parse a statement layout from a JSON string (no file path context).
pub fn parse_layout_str(json: &str) -> Result<StatementLayout, RoyaltyError> {
    let layout: StatementLayout = serde_json::from_str(json).map_err(RoyaltyError::Json)?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Validate that a layout is usable.
pub fn validate_layout(layout: &StatementLayout) -> Result<(), RoyaltyError> {
    if layout.sentinel.is_empty() {
        return Err(RoyaltyError::LayoutInvalid(
            "sentinel must not be empty".into(),
        ));
    }

    // Tokens never contain line breaks or leading whitespace, so such a
    // sentinel could never match.
    if layout.sentinel.contains(['\n', '\r']) {
        return Err(RoyaltyError::LayoutInvalid(
            "sentinel must be a single line".into(),
        ));
    }
    if layout.sentinel.starts_with(char::is_whitespace) {
        return Err(RoyaltyError::LayoutInvalid(format!(
            "sentinel '{}' must not start with whitespace",
            layout.sentinel
        )));
    }

    if layout.artist.trim().is_empty() {
        return Err(RoyaltyError::LayoutInvalid(
            "artist must not be empty".into(),
        ));
    }

    Ok(())
}
