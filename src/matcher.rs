//! Checking a finished selection against the hidden words.

use std::collections::HashSet;

use log::debug;

use crate::grid::{Cell, Grid};
use crate::placement::PlacedWord;

/// Mark every not-yet-found placed word that reads as the selection, forwards or backwards.
///
/// Matching words get `found = true` and are added to `found_words`. Nothing is ever un-marked.
/// Returns the words newly found by this selection.
///
/// Callers skip single-cell selections; this function does not. A selection reaching off the
/// grid matches nothing.
pub fn check_selection(
    grid: &Grid,
    selection: &[Cell],
    placed_words: &mut [PlacedWord],
    found_words: &mut HashSet<String>,
) -> Vec<String> {
    if !selection.iter().all(|&cell| grid.contains(cell)) {
        debug!("selection leaves the grid, nothing to check");
        return Vec::new();
    }
    let candidate = grid.letters_at(selection);
    let reversed: String = candidate.chars().rev().collect();

    let mut newly_found = Vec::new();
    for placed in placed_words.iter_mut() {
        if found_words.contains(&placed.word) {
            continue;
        }
        if placed.word == candidate || placed.word == reversed {
            debug!("found {}", placed.word);
            placed.found = true;
            found_words.insert(placed.word.clone());
            newly_found.push(placed.word.clone());
        }
    }
    newly_found
}
