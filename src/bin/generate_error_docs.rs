//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `WordSearchError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;

use wordsearch::errors::WordSearchError;

/// One of each `WordSearchError` variant, with representative payloads.
fn all_error_variants() -> Vec<WordSearchError> {
    vec![
        WordSearchError::EmptyWordList,
        WordSearchError::NoDirectionsEnabled,
        WordSearchError::InvalidGridSize { size: 0 },
        WordSearchError::UnknownDirection { id: "sideways".to_string() },
        WordSearchError::WordListRead {
            path: "words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
    ]
}

/// Render one variant as a Markdown section.
fn render_error(error: &WordSearchError) -> String {
    let mut out = format!("### {}: {}\n\n", error.code(), error.description());
    out.push_str(&format!("**Details:** {}\n\n", error.details()));

    if let Some(help_text) = error.help() {
        out.push_str(&format!("**How to fix:**\n```\n{help_text}\n```\n\n"));
    }

    out.push_str(&format!("**Example error message:**\n```\n{error}\n```\n\n"));
    out.push_str(&format!("**Detailed format:**\n```\n{}\n```\n\n", error.display_detailed()));
    out.push_str("---\n");
    out
}

fn render_docs() -> String {
    let mut doc = String::from("# Error Code Reference\n\n");
    doc.push_str("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n\n");
    doc.push_str("## Generation Errors\n\n");
    doc.push_str("Returned when a puzzle is requested without its preconditions, or when a word list cannot be loaded. Duplicate words, dropped words and crooked drags are never errors.\n\n");

    for error in all_error_variants() {
        doc.push_str(&render_error(&error));
        doc.push('\n');
    }

    doc.push_str("## Error Display Formats\n\n");
    doc.push_str("### Simple Format\n```\nError: <message>\n```\n\n");
    doc.push_str("### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```\n");
    doc
}

fn main() {
    print!("{}", render_docs());
}
