//! Error types for puzzle generation with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E005) for documentation lookup:
//!
//! - E001: `EmptyWordList` (No words to place)
//! - E002: `NoDirectionsEnabled` (Every direction is disabled)
//! - E003: `InvalidGridSize` (Grid size below 1)
//! - E004: `UnknownDirection` (Direction id not in the catalog)
//! - E005: `WordListRead` (Word-list file could not be read)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::WordSearchError;
//! use wordsearch::direction::EnabledDirections;
//! use wordsearch::placement::generate_with_seed;
//!
//! let words: Vec<String> = vec![];
//! match generate_with_seed(&words, 10, &EnabledDirections::all(), 42) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

/// Unified error type for the engine.
///
/// Most failures in this crate are deliberately silent (duplicate words, dropped words,
/// crooked gestures). What remains here are precondition violations that a caller must
/// not be allowed to paper over, plus the I/O surface of the native word-list loader.
#[derive(Debug, thiserror::Error)]
pub enum WordSearchError {
    #[error("cannot generate a puzzle from an empty word list")]
    EmptyWordList,

    #[error("cannot generate a puzzle with every direction disabled")]
    NoDirectionsEnabled,

    #[error("invalid grid size: {size}")]
    InvalidGridSize { size: usize },

    #[error("unknown direction: \"{id}\"")]
    UnknownDirection { id: String },

    #[error("failed to read word list from '{path}': {source}")]
    WordListRead {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl WordSearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordSearchError::EmptyWordList => "E001",
            WordSearchError::NoDirectionsEnabled => "E002",
            WordSearchError::InvalidGridSize { .. } => "E003",
            WordSearchError::UnknownDirection { .. } => "E004",
            WordSearchError::WordListRead { .. } => "E005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            WordSearchError::EmptyWordList => "No words to place",
            WordSearchError::NoDirectionsEnabled => "Every direction is disabled",
            WordSearchError::InvalidGridSize { .. } => "Grid size below 1",
            WordSearchError::UnknownDirection { .. } => "Direction id not in the catalog",
            WordSearchError::WordListRead { .. } => "Word-list file could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            WordSearchError::EmptyWordList => {
                "Generation was requested with no words. The caller is expected to block generation until at least one word has been added."
            }
            WordSearchError::NoDirectionsEnabled => {
                "Generation was requested while every placement direction was switched off, so no word could ever be placed. The caller is expected to block generation until at least one direction is enabled."
            }
            WordSearchError::InvalidGridSize { .. } => {
                "The grid must be at least 1x1. Interactive sessions clamp the size to 10-20, but the engine accepts any positive size."
            }
            WordSearchError::UnknownDirection { .. } => {
                "A direction was named that is not one of the eight catalog ids (horizontal, vertical, diagonalDownRight, diagonalUpRight, horizontalReverse, verticalReverse, diagonalUpLeft, diagonalDownLeft)."
            }
            WordSearchError::WordListRead { .. } => {
                "The word-list file could not be opened or was not valid UTF-8."
            }
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordSearchError::EmptyWordList => {
                Some("Add at least one word, e.g. 'wordsearch CAT DOG BIRD'")
            }
            WordSearchError::NoDirectionsEnabled => {
                Some("Enable at least one direction, e.g. '-d horizontal'")
            }
            WordSearchError::InvalidGridSize { .. } => {
                Some("Use a grid size of 1 or more (10-20 is typical)")
            }
            WordSearchError::UnknownDirection { .. } => {
                Some("Direction ids are camelCase, e.g. 'diagonalDownRight'")
            }
            WordSearchError::WordListRead { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<WordSearchError> for io::Error {
    fn from(e: WordSearchError) -> Self {
        match e {
            WordSearchError::WordListRead { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
