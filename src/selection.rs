//! Selection geometry: turning a drag from one cell to another into a straight run of cells.
//!
//! Only horizontal, vertical and true 45° diagonal drags produce a line. Anything else collapses
//! to the start cell alone, so a crooked drag simply highlights where it began.

use log::trace;

use crate::direction::Direction;
use crate::grid::Cell;

/// The cells from `start` to `end` inclusive, if they lie on one straight line.
///
/// Returns `[start]` when the drag is not horizontal, vertical or a 45° diagonal.
///
/// ```
/// use wordsearch::grid::Cell;
/// use wordsearch::selection::line_cells;
///
/// let line = line_cells(Cell::new(0, 0), Cell::new(2, 2));
/// assert_eq!(line, vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]);
///
/// assert_eq!(line_cells(Cell::new(0, 0), Cell::new(2, 5)), vec![Cell::new(0, 0)]);
/// ```
#[must_use]
pub fn line_cells(start: Cell, end: Cell) -> Vec<Cell> {
    let row_span = end.row.abs_diff(start.row);
    let col_span = end.col.abs_diff(start.col);
    if row_span != 0 && col_span != 0 && row_span != col_span {
        return vec![start];
    }

    // (0, 0) when start == end
    let Some(direction) = Direction::from_delta(step(start.row, end.row), step(start.col, end.col))
    else {
        return vec![start];
    };

    let len = row_span.max(col_span) + 1;
    (0..len)
        .filter_map(|i| start.offset(direction.d_row, direction.d_col, i))
        .collect()
}

fn step(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Where a drag gesture currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// A button/finger is down; `anchor` is where it went down.
    Selecting { anchor: Cell, cells: Vec<Cell> },
}

/// The press → drag → release state machine shared by mouse and touch input.
///
/// Device adapters translate their raw events into [`begin`](Gesture::begin),
/// [`update`](Gesture::update), [`end`](Gesture::end) and [`leave`](Gesture::leave).
#[derive(Debug, Clone, Default)]
pub struct Gesture {
    state: GestureState,
}

impl Gesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Press: start selecting at `cell`, dropping any gesture already in flight.
    pub fn begin(&mut self, cell: Cell) {
        self.state = GestureState::Selecting { anchor: cell, cells: vec![cell] };
    }

    /// Drag over `cell`: recompute the whole line from the anchor. Ignored while idle.
    pub fn update(&mut self, cell: Cell) {
        if let GestureState::Selecting { anchor, cells } = &mut self.state {
            *cells = line_cells(*anchor, cell);
            trace!("selection now {} cell(s) from {anchor}", cells.len());
        }
    }

    /// Release: go idle and hand back the finished selection (`None` if nothing was in flight).
    pub fn end(&mut self) -> Option<Vec<Cell>> {
        match std::mem::take(&mut self.state) {
            GestureState::Selecting { cells, .. } => Some(cells),
            GestureState::Idle => None,
        }
    }

    /// Pointer left the grid mid-drag: go idle and throw the selection away.
    pub fn leave(&mut self) {
        self.state = GestureState::Idle;
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, GestureState::Selecting { .. })
    }

    /// The cells currently highlighted (empty while idle).
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        match &self.state {
            GestureState::Selecting { cells, .. } => cells,
            GestureState::Idle => &[],
        }
    }

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }
}
