//! Error types for building and serializing slide decks.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or serializing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A table was requested with no rows or no columns.
    #[error("Table{} has no rows or no columns", on_slide(.slide))]
    EmptyTable { slide: Option<String> },

    /// A table row does not have as many cells as the header row.
    #[error("Table row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Deck content could not be loaded or encoded.
    #[error("Deck content error: {0}")]
    ContentError(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML writing or parsing error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid or corrupted package.
    #[error("Invalid or corrupted file: {0}")]
    CorruptedFile(String),
}

fn on_slide(slide: &Option<String>) -> String {
    slide
        .as_deref()
        .map(|title| format!(" on slide '{}'", title))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_message() {
        let bare = Error::EmptyTable { slide: None };
        assert_eq!(bare.to_string(), "Table has no rows or no columns");

        let named = Error::EmptyTable {
            slide: Some("Budget".to_string()),
        };
        assert_eq!(
            named.to_string(),
            "Table on slide 'Budget' has no rows or no columns"
        );
    }
}
