//! The placement engine: hides a word list in a fresh grid.
//!
//! Placement is best-effort. Words are tried in a random order; each word gets up to
//! [`MAX_PLACEMENT_ATTEMPTS`] independent trials, where a trial picks an enabled direction and an
//! origin cell uniformly at random and checks whether the word fits there. A word fits if every
//! target cell is inside the grid and is either empty or already holds the same letter, so words
//! may cross on shared letters. A word that exhausts its trials is dropped. Once every word has
//! been tried, the leftover empty cells are filled with uniformly random letters.
//!
//! # Examples
//!
//! ```
//! use wordsearch::direction::EnabledDirections;
//! use wordsearch::placement::generate_with_seed;
//!
//! let words = vec!["CAT".to_string(), "DOG".to_string()];
//! let puzzle = generate_with_seed(&words, 10, &EnabledDirections::all(), 7)?;
//!
//! assert!(puzzle.grid.is_filled());
//! for placed in &puzzle.placed_words {
//!     assert_eq!(puzzle.grid.letters_at(&placed.positions), placed.word);
//! }
//! # Ok::<(), wordsearch::errors::WordSearchError>(())
//! ```

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::alphabet::random_letter;
use crate::direction::{Direction, EnabledDirections};
use crate::errors::WordSearchError;
use crate::grid::{Cell, Grid, EMPTY_CELL};
use crate::word_list::WordList;

/// Trials each word gets before it is dropped.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
pub const DEFAULT_GRID_SIZE: usize = 15;
pub const MIN_GRID_SIZE: usize = 10;
pub const MAX_GRID_SIZE: usize = 20;

/// A word that made it into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    /// One cell per letter, in reading order.
    pub positions: Vec<Cell>,
    pub direction: &'static Direction,
    pub found: bool,
}

impl PlacedWord {
    #[must_use]
    pub fn covers(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }
}

/// The outcome of one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub grid: Grid,
    /// In placement order.
    pub placed_words: Vec<PlacedWord>,
    /// Words dropped after exhausting their trials, in the order they were attempted.
    pub unplaced_words: Vec<String>,
}

/// Knobs for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub grid_size: usize,
    pub directions: EnabledDirections,
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            directions: EnabledDirections::all(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Generate a puzzle with the default trial budget.
///
/// # Errors
///
/// Fails loudly on violated preconditions instead of returning an empty puzzle:
/// - [`WordSearchError::EmptyWordList`] if `words` has no non-blank word;
/// - [`WordSearchError::NoDirectionsEnabled`] if `directions` is all off;
/// - [`WordSearchError::InvalidGridSize`] if `grid_size` is zero.
pub fn generate<S, R>(
    words: &[S],
    grid_size: usize,
    directions: &EnabledDirections,
    rng: &mut R,
) -> Result<Puzzle, WordSearchError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let config = GeneratorConfig {
        grid_size,
        directions: *directions,
        max_attempts: MAX_PLACEMENT_ATTEMPTS,
    };
    generate_with_config(words, &config, rng)
}

/// [`generate`] with a `StdRng` seeded from `seed`, so the same inputs always give the same puzzle.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with_seed<S: AsRef<str>>(
    words: &[S],
    grid_size: usize,
    directions: &EnabledDirections,
    seed: u64,
) -> Result<Puzzle, WordSearchError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(words, grid_size, directions, &mut rng)
}

/// Generate a puzzle under an explicit [`GeneratorConfig`].
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with_config<S, R>(
    words: &[S],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Puzzle, WordSearchError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    // same normalization and dedup as interactive entry
    let mut order = words.iter().collect::<WordList>().words().to_vec();
    if order.is_empty() {
        return Err(WordSearchError::EmptyWordList);
    }
    let enabled = config.directions.enabled();
    if enabled.is_empty() {
        return Err(WordSearchError::NoDirectionsEnabled);
    }
    let mut grid = Grid::new(config.grid_size)?;
    let size = config.grid_size;

    // placement order decides who wins contested cells
    order.shuffle(rng);

    let mut placed_words = Vec::with_capacity(order.len());
    let mut unplaced_words = Vec::new();

    for word in order {
        let letters: Vec<char> = word.chars().collect();
        let mut placement = None;

        for attempt in 0..config.max_attempts {
            let direction = enabled[rng.random_range(0..enabled.len())];
            let origin = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
            if can_place(&grid, &letters, origin, direction) {
                debug!("placed {word} at {origin} going {direction} (trial {})", attempt + 1);
                placement = Some((place_word(&mut grid, &letters, origin, direction), direction));
                break;
            }
        }

        match placement {
            Some((positions, direction)) => placed_words.push(PlacedWord {
                word,
                positions,
                direction,
                found: false,
            }),
            None => {
                debug!("dropping {word}: no fit after {} trials", config.max_attempts);
                unplaced_words.push(word);
            }
        }
    }

    fill_empty_cells(&mut grid, rng);

    info!(
        "generated {size}x{size} grid: {} placed, {} dropped",
        placed_words.len(),
        unplaced_words.len()
    );

    Ok(Puzzle { grid, placed_words, unplaced_words })
}

/// Does `letters` fit at `origin` going `direction`? Stops at the first bad cell.
#[must_use]
pub fn can_place(grid: &Grid, letters: &[char], origin: Cell, direction: &Direction) -> bool {
    letters.iter().enumerate().all(|(i, &letter)| {
        origin
            .offset(direction.d_row, direction.d_col, i)
            .and_then(|cell| grid.get(cell))
            .is_some_and(|existing| existing == EMPTY_CELL || existing == letter)
    })
}

/// Write `letters` starting at `origin`, returning the cells used. Callers check [`can_place`]
/// first.
fn place_word(grid: &mut Grid, letters: &[char], origin: Cell, direction: &Direction) -> Vec<Cell> {
    letters
        .iter()
        .enumerate()
        .filter_map(|(i, &letter)| {
            let cell = origin.offset(direction.d_row, direction.d_col, i)?;
            grid.set(cell, letter);
            Some(cell)
        })
        .collect()
}

fn fill_empty_cells<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let empties: Vec<Cell> = grid.cells().filter(|&c| grid.is_empty_cell(c)).collect();
    for cell in empties {
        grid.set(cell, random_letter(rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::PuzzleChar;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    fn horizontal() -> &'static Direction {
        Direction::from_id("horizontal").unwrap()
    }

    #[test]
    fn test_can_place_in_empty_grid() {
        let grid = Grid::new(5).unwrap();
        let cat: Vec<char> = "CAT".chars().collect();
        assert!(can_place(&grid, &cat, Cell::new(0, 0), horizontal()));
        assert!(can_place(&grid, &cat, Cell::new(0, 2), horizontal()));
        assert!(!can_place(&grid, &cat, Cell::new(0, 3), horizontal()));
    }

    #[test]
    fn test_can_place_rejects_negative_overflow() {
        let grid = Grid::new(5).unwrap();
        let cat: Vec<char> = "CAT".chars().collect();
        let up_left = Direction::from_id("diagonalUpLeft").unwrap();
        assert!(!can_place(&grid, &cat, Cell::new(1, 4), up_left));
        assert!(can_place(&grid, &cat, Cell::new(2, 2), up_left));
    }

    #[test]
    fn test_can_place_allows_matching_overlap() {
        let grid = Grid::from_rows(&["..T", "...", "..."]).unwrap();
        let cat: Vec<char> = "CAT".chars().collect();
        let dog: Vec<char> = "DOG".chars().collect();
        assert!(can_place(&grid, &cat, Cell::new(0, 0), horizontal()));
        assert!(!can_place(&grid, &dog, Cell::new(0, 0), horizontal()));
    }

    #[test]
    fn test_place_word_writes_letters() {
        let mut grid = Grid::new(4).unwrap();
        let dog: Vec<char> = "DOG".chars().collect();
        let vertical_up = Direction::from_id("verticalReverse").unwrap();
        let cells = place_word(&mut grid, &dog, Cell::new(3, 1), vertical_up);
        assert_eq!(cells, vec![Cell::new(3, 1), Cell::new(2, 1), Cell::new(1, 1)]);
        assert_eq!(grid.letters_at(&cells), "DOG");
    }

    #[test]
    fn test_preconditions_fail_loudly() {
        let all = EnabledDirections::all();
        let empty: Vec<String> = vec![];
        assert!(matches!(
            generate_with_seed(&empty, 10, &all, 1),
            Err(WordSearchError::EmptyWordList)
        ));
        assert!(matches!(
            generate_with_seed(&words(&["  "]), 10, &all, 1),
            Err(WordSearchError::EmptyWordList)
        ));
        assert!(matches!(
            generate_with_seed(&words(&["42", "é"]), 10, &all, 1),
            Err(WordSearchError::EmptyWordList)
        ));
        assert!(matches!(
            generate_with_seed(&words(&["CAT"]), 10, &EnabledDirections::none(), 1),
            Err(WordSearchError::NoDirectionsEnabled)
        ));
        assert!(matches!(
            generate_with_seed(&words(&["CAT"]), 0, &all, 1),
            Err(WordSearchError::InvalidGridSize { size: 0 })
        ));
    }

    #[test]
    fn test_placed_words_match_grid() {
        let ws = words(&["CAT", "DOG", "BIRD", "HORSE", "MOUSE", "RABBIT"]);
        for seed in 0..50 {
            let puzzle = generate_with_seed(&ws, 10, &EnabledDirections::all(), seed).unwrap();
            for placed in &puzzle.placed_words {
                assert_eq!(placed.positions.len(), placed.word.len());
                assert_eq!(puzzle.grid.letters_at(&placed.positions), placed.word);
                for pair in placed.positions.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    assert_eq!(
                        (b.row as isize - a.row as isize, b.col as isize - a.col as isize),
                        (placed.direction.d_row, placed.direction.d_col)
                    );
                }
                assert!(!placed.found);
            }
            assert_eq!(
                puzzle.placed_words.len() + puzzle.unplaced_words.len(),
                ws.len()
            );
        }
    }

    #[test]
    fn test_grid_is_filled_with_uppercase() {
        let puzzle =
            generate_with_seed(&words(&["CAT"]), 12, &EnabledDirections::all(), 3).unwrap();
        assert!(puzzle.grid.is_filled());
        assert!(puzzle
            .grid
            .cells()
            .all(|c| puzzle.grid.get(c).is_some_and(|ch| ch.is_grid_letter())));
    }

    #[test]
    fn test_words_are_uppercased() {
        let puzzle =
            generate_with_seed(&words(&["cat"]), 10, &EnabledDirections::all(), 5).unwrap();
        assert_eq!(puzzle.placed_words[0].word, "CAT");
    }

    #[test]
    fn test_duplicate_words_are_placed_once() {
        let all = EnabledDirections::all();
        let puzzle = generate_with_seed(&words(&["cat", "CAT", " Cat "]), 10, &all, 4).unwrap();
        assert_eq!(puzzle.placed_words.len() + puzzle.unplaced_words.len(), 1);
    }

    #[test]
    fn test_separators_never_reach_the_grid() {
        let all = EnabledDirections::all();
        let ws = words(&["ice cream", "t-rex", "café"]);
        let puzzle = generate_with_seed(&ws, 10, &all, 3).unwrap();
        let mut hidden: Vec<&str> = puzzle.placed_words.iter().map(|p| p.word.as_str()).collect();
        hidden.extend(puzzle.unplaced_words.iter().map(String::as_str));
        hidden.sort_unstable();
        assert_eq!(hidden, ["ICECREAM", "TREX"]);
        assert!(puzzle
            .grid
            .cells()
            .all(|c| puzzle.grid.get(c).is_some_and(|ch| ch.is_grid_letter())));
    }

    #[test]
    fn test_too_long_word_is_dropped() {
        for seed in 0..20 {
            let all = EnabledDirections::all();
            let puzzle = generate_with_seed(&words(&["ABCDEFGHIJK"]), 10, &all, seed).unwrap();
            assert!(puzzle.placed_words.is_empty());
            assert_eq!(puzzle.unplaced_words, vec!["ABCDEFGHIJK"]);
            assert!(puzzle.grid.is_filled());
        }
    }

    #[test]
    fn test_only_enabled_directions_are_used() {
        let dirs = EnabledDirections::from_ids(["diagonalDownLeft"]).unwrap();
        let ws = words(&["CAT", "DOG", "EMU"]);
        for seed in 0..20 {
            let puzzle = generate_with_seed(&ws, 10, &dirs, seed).unwrap();
            for placed in &puzzle.placed_words {
                assert_eq!(placed.direction.id, "diagonalDownLeft");
            }
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let ws = words(&["APPLE", "BANANA", "CHERRY", "DATE"]);
        let a = generate_with_seed(&ws, 15, &EnabledDirections::all(), 99).unwrap();
        let b = generate_with_seed(&ws, 15, &EnabledDirections::all(), 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_by_one_grid() {
        let puzzle =
            generate_with_seed(&words(&["Q", "ZZ"]), 1, &EnabledDirections::all(), 0).unwrap();
        assert_eq!(puzzle.placed_words.len(), 1);
        assert_eq!(puzzle.placed_words[0].word, "Q");
        assert_eq!(puzzle.unplaced_words, vec!["ZZ"]);
        assert_eq!(puzzle.grid.to_string(), "Q");
    }

    #[test]
    fn test_zero_attempts_places_nothing() {
        let config = GeneratorConfig { max_attempts: 0, ..GeneratorConfig::default() };
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = generate_with_config(&words(&["CAT"]), &config, &mut rng).unwrap();
        assert!(puzzle.placed_words.is_empty());
        assert!(puzzle.grid.is_filled());
    }

    #[test]
    fn test_covers() {
        let puzzle =
            generate_with_seed(&words(&["CAT"]), 10, &EnabledDirections::all(), 8).unwrap();
        let placed = &puzzle.placed_words[0];
        assert!(placed.covers(placed.positions[1]));
    }
}
