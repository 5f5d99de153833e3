//! `session`: everything one player's puzzle session holds, in a single owned record.
//!
//! A presentation layer keeps one [`Session`], forwards user events to it, and re-renders from
//! its queries. Nothing here is global and nothing runs in the background: each call does its
//! work synchronously and returns.
//!
//! The session moves between two phases. In [`Phase::WordEntry`] the player edits the word list,
//! grid size and directions. [`Session::generate`] moves to [`Phase::Playing`], where drag
//! gestures are checked against the hidden words. [`Session::reset_session`] goes back to word
//! entry, keeping the word list and settings.
//!
//! # Reveal hints
//!
//! [`Session::reveal_word`] highlights an unfound word for [`REVEAL_DURATION`]. The clear is a
//! scheduled task identified by a [`RevealTicket`]; a newer reveal replaces (and so cancels) the
//! older task. Hosts either poll with [`Session::poll_reveal`] or hand the ticket back from a timer
//! callback via [`Session::expire_reveal`], which ignores stale tickets.
//!
//! ```
//! use wordsearch::grid::Cell;
//! use wordsearch::session::Session;
//!
//! let mut session = Session::new();
//! session.add_word("cat");
//! session.add_word("CAT"); // duplicate, ignored
//! assert_eq!(session.words().len(), 1);
//!
//! let puzzle = session.generate_with_seed(7)?;
//! let positions = puzzle.placed_words[0].positions.clone();
//!
//! session.begin_selection(positions[0]);
//! session.update_selection(*positions.last().unwrap());
//! assert_eq!(session.end_selection(), vec!["CAT".to_string()]);
//! assert!(session.progress().is_complete());
//! # Ok::<(), wordsearch::errors::WordSearchError>(())
//! ```

use std::collections::HashSet;
use std::time::Duration;

use instant::Instant;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::direction::EnabledDirections;
use crate::errors::WordSearchError;
use crate::grid::{Cell, Grid};
use crate::matcher::check_selection;
use crate::placement::{self, PlacedWord, Puzzle, DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::selection::Gesture;
use crate::word_list::{normalize, WordList};

/// How long a revealed word stays highlighted.
pub const REVEAL_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    WordEntry,
    Playing,
}

/// Found / total counts for the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub found: usize,
    pub total: usize,
}

impl Progress {
    /// Every placed word found (and there was at least one).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.found == self.total
    }
}

/// How a cell should be highlighted. When several apply, the first listed here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellState {
    Selected,
    Revealed,
    Found,
    Plain,
}

/// Handle for a scheduled reveal clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTicket {
    pub word: String,
    pub generation: u64,
    pub deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Session {
    words: WordList,
    grid_size: usize,
    directions: EnabledDirections,
    puzzle: Option<Puzzle>,
    found_words: HashSet<String>,
    gesture: Gesture,
    reveal: Option<RevealTicket>,
    reveal_generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            words: WordList::new(),
            grid_size: DEFAULT_GRID_SIZE,
            directions: EnabledDirections::all(),
            puzzle: None,
            found_words: HashSet::new(),
            gesture: Gesture::new(),
            reveal: None,
            reveal_generation: 0,
        }
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---- word entry ----

    /// Normalize and append; `false` for blank input, a non-letter word or a duplicate.
    pub fn add_word(&mut self, word: &str) -> bool {
        self.words.add_word(word)
    }

    pub fn remove_word(&mut self, word: &str) -> bool {
        self.words.remove_word(word)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        self.words.words()
    }

    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Set the grid size for the next generation, clamped to the slider range. Returns the size
    /// actually applied.
    pub fn set_grid_size(&mut self, size: usize) -> usize {
        self.grid_size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.grid_size
    }

    #[must_use]
    pub fn directions(&self) -> &EnabledDirections {
        &self.directions
    }

    pub fn set_directions(&mut self, directions: EnabledDirections) {
        self.directions = directions;
    }

    /// # Errors
    ///
    /// Returns [`WordSearchError::UnknownDirection`] if `id` is not a catalog id.
    pub fn toggle_direction(&mut self, id: &str) -> Result<bool, WordSearchError> {
        self.directions.toggle(id)
    }

    pub fn toggle_all_directions(&mut self) {
        self.directions.toggle_all();
    }

    /// The gate a UI uses to enable its Generate button.
    ///
    /// # Errors
    ///
    /// [`WordSearchError::EmptyWordList`] or [`WordSearchError::NoDirectionsEnabled`].
    pub fn can_generate(&self) -> Result<(), WordSearchError> {
        if self.words.is_empty() {
            return Err(WordSearchError::EmptyWordList);
        }
        if !self.directions.any_enabled() {
            return Err(WordSearchError::NoDirectionsEnabled);
        }
        Ok(())
    }

    // ---- generation ----

    /// Build a new puzzle from the current words and settings and start playing it.
    ///
    /// Found words, the selection and any reveal are cleared.
    ///
    /// # Errors
    ///
    /// Same as [`can_generate`](Session::can_generate); the session is left unchanged.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Puzzle, WordSearchError> {
        self.can_generate()?;
        let puzzle =
            placement::generate(self.words.words(), self.grid_size, &self.directions, rng)?;
        if !puzzle.unplaced_words.is_empty() {
            info!("{} word(s) could not be placed", puzzle.unplaced_words.len());
        }
        self.found_words.clear();
        self.gesture.leave();
        self.reveal = None;
        Ok(&*self.puzzle.insert(puzzle))
    }

    /// [`generate`](Session::generate) with a seeded RNG.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Session::generate).
    pub fn generate_with_seed(&mut self, seed: u64) -> Result<&Puzzle, WordSearchError> {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.puzzle.is_some() {
            Phase::Playing
        } else {
            Phase::WordEntry
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.puzzle.as_ref().map(|p| &p.grid)
    }

    #[must_use]
    pub fn placed_words(&self) -> &[PlacedWord] {
        self.puzzle.as_ref().map_or(&[][..], |p| p.placed_words.as_slice())
    }

    #[must_use]
    pub fn found_words(&self) -> &HashSet<String> {
        &self.found_words
    }

    // ---- gestures ----

    /// Press on `cell`. Ignored outside a puzzle or off the grid.
    pub fn begin_selection(&mut self, cell: Cell) {
        if self.grid().is_some_and(|g| g.contains(cell)) {
            self.gesture.begin(cell);
        }
    }

    /// Drag over `cell`. Ignored unless a gesture is in progress.
    pub fn update_selection(&mut self, cell: Cell) {
        if self.grid().is_some_and(|g| g.contains(cell)) {
            self.gesture.update(cell);
        }
    }

    /// Release. Multi-cell selections are checked; returns the words newly found.
    pub fn end_selection(&mut self) -> Vec<String> {
        let Some(cells) = self.gesture.end() else {
            return Vec::new();
        };
        if cells.len() < 2 {
            return Vec::new();
        }
        let Some(puzzle) = self.puzzle.as_mut() else {
            return Vec::new();
        };
        let newly_found = check_selection(
            &puzzle.grid,
            &cells,
            &mut puzzle.placed_words,
            &mut self.found_words,
        );
        if !newly_found.is_empty() {
            debug!("{}/{} words found", self.found_words.len(), puzzle.placed_words.len());
        }
        newly_found
    }

    /// The pointer left the grid mid-drag: drop the selection without checking it.
    pub fn leave_grid(&mut self) {
        self.gesture.leave();
    }

    #[must_use]
    pub fn selection(&self) -> &[Cell] {
        self.gesture.cells()
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.gesture.is_selecting()
    }

    // ---- reveal ----

    /// Highlight an unfound placed word until `now + REVEAL_DURATION`, replacing any earlier
    /// reveal and its pending clear.
    ///
    /// Returns `None` (and changes nothing) for words that are not placed or already found.
    pub fn reveal_word(&mut self, word: &str, now: Instant) -> Option<RevealTicket> {
        let word = normalize(word)?;
        if self.found_words.contains(&word) || !self.placed_words().iter().any(|p| p.word == word) {
            return None;
        }
        self.reveal_generation += 1;
        let ticket = RevealTicket {
            word,
            generation: self.reveal_generation,
            deadline: now + REVEAL_DURATION,
        };
        debug!("revealing {} (ticket {})", ticket.word, ticket.generation);
        self.reveal = Some(ticket.clone());
        Some(ticket)
    }

    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        self.reveal.as_ref().map(|t| t.word.as_str())
    }

    /// Clear the reveal if its deadline has passed. Returns `true` if it cleared.
    pub fn poll_reveal(&mut self, now: Instant) -> bool {
        if self.reveal.as_ref().is_some_and(|t| now >= t.deadline) {
            self.reveal = None;
            return true;
        }
        false
    }

    /// Timer callback: clear the reveal only if `ticket` is still the live one.
    pub fn expire_reveal(&mut self, ticket: &RevealTicket) -> bool {
        if self.reveal.as_ref().is_some_and(|t| t.generation == ticket.generation) {
            self.reveal = None;
            return true;
        }
        false
    }

    /// Same as [`expire_reveal`](Session::expire_reveal), by generation number only.
    pub fn expire_reveal_generation(&mut self, generation: u64) -> bool {
        if self.reveal.as_ref().is_some_and(|t| t.generation == generation) {
            self.reveal = None;
            return true;
        }
        false
    }

    // ---- queries ----

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress { found: self.found_words.len(), total: self.placed_words().len() }
    }

    #[must_use]
    pub fn cell_state(&self, cell: Cell) -> CellState {
        if self.gesture.cells().contains(&cell) {
            return CellState::Selected;
        }
        let placed = self.placed_words();
        if let Some(revealed) = self.revealed_word() {
            if placed.iter().any(|p| p.word == revealed && p.covers(cell)) {
                return CellState::Revealed;
            }
        }
        if placed.iter().any(|p| p.found && p.covers(cell)) {
            return CellState::Found;
        }
        CellState::Plain
    }

    /// Back to word entry. The word list, grid size and directions are kept.
    pub fn reset_session(&mut self) {
        self.puzzle = None;
        self.found_words.clear();
        self.gesture.leave();
        self.reveal = None;
    }
}
