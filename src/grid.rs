//! `grid`: the N×N letter matrix a puzzle is played on.
//!
//! A grid is created empty (every cell holds [`EMPTY_CELL`]), written to by the placement engine,
//! topped up with filler letters, and then only ever read.

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::WordSearchError;

/// Marks a cell that no word or filler letter has claimed yet.
pub const EMPTY_CELL: char = '.';

/// A `(row, col)` coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `i` times along `(d_row, d_col)`; `None` if that would go below zero.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, i: usize) -> Option<Cell> {
        let i = isize::try_from(i).ok()?;
        let row = isize::try_from(self.row).ok()?.checked_add(d_row.checked_mul(i)?)?;
        let col = isize::try_from(self.col).ok()?.checked_add(d_col.checked_mul(i)?)?;
        Some(Cell { row: usize::try_from(row).ok()?, col: usize::try_from(col).ok()? })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell { row, col }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// A `size`×`size` grid with every cell empty.
    ///
    /// # Errors
    ///
    /// Returns [`WordSearchError::InvalidGridSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, WordSearchError> {
        if size == 0 {
            return Err(WordSearchError::InvalidGridSize { size });
        }
        Ok(Self { size, cells: vec![EMPTY_CELL; size * size] })
    }

    /// Build a grid from row strings, one char per cell.
    ///
    /// # Errors
    ///
    /// Returns [`WordSearchError::InvalidGridSize`] if there are no rows or the rows do not form
    /// a square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, WordSearchError> {
        let size = rows.len();
        let mut grid = Self::new(size)?;
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.as_ref().chars().collect();
            if chars.len() != size {
                return Err(WordSearchError::InvalidGridSize { size });
            }
            grid.cells[r * size..(r + 1) * size].copy_from_slice(&chars);
        }
        Ok(grid)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// The char at `cell`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.contains(cell).then(|| self.cells[cell.row * self.size + cell.col])
    }

    /// Write `ch` at `cell`. Out-of-bounds writes are ignored.
    pub(crate) fn set(&mut self, cell: Cell, ch: char) {
        if self.contains(cell) {
            self.cells[cell.row * self.size + cell.col] = ch;
        }
    }

    #[must_use]
    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.get(cell) == Some(EMPTY_CELL)
    }

    /// True once no cell holds [`EMPTY_CELL`].
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.cells.contains(&EMPTY_CELL)
    }

    /// Every coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell { row, col }))
    }

    /// Rows as char slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }

    /// Concatenate the letters under `cells`, in order. Out-of-bounds cells contribute nothing.
    #[must_use]
    pub fn letters_at(&self, cells: &[Cell]) -> String {
        cells.iter().filter_map(|&c| self.get(c)).collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Serialized as an array of row strings, e.g. `["CATBD", ...]`.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            seq.serialize_element(&row.iter().collect::<String>())?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.size(), 3);
        assert!(grid.cells().all(|c| grid.is_empty_cell(c)));
        assert!(!grid.is_filled());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = Grid::new(0).unwrap_err();
        assert!(matches!(err, WordSearchError::InvalidGridSize { size: 0 }));
    }

    #[test]
    fn test_one_by_one() {
        let mut grid = Grid::new(1).unwrap();
        grid.set(Cell::new(0, 0), 'Q');
        assert!(grid.is_filled());
        assert_eq!(grid.to_string(), "Q");
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(2).unwrap();
        assert_eq!(grid.get(Cell::new(2, 0)), None);
        assert_eq!(grid.get(Cell::new(0, 2)), None);
        assert_eq!(grid.get(Cell::new(1, 1)), Some(EMPTY_CELL));
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(2).unwrap();
        grid.set(Cell::new(5, 5), 'X');
        assert!(grid.cells().all(|c| grid.is_empty_cell(c)));
    }

    #[test]
    fn test_from_rows_and_display() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.get(Cell::new(1, 0)), Some('C'));
        assert_eq!(grid.to_string(), "A B\nC D");
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Grid::from_rows(&["ABC", "DE", "FGH"]).is_err());
        assert!(Grid::from_rows::<&str>(&[]).is_err());
    }

    #[test]
    fn test_letters_at() {
        let grid = Grid::from_rows(&["CAT", "XYZ", "QRS"]).unwrap();
        let cells = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)];
        assert_eq!(grid.letters_at(&cells), "CYS");
        assert_eq!(grid.letters_at(&[Cell::new(0, 2), Cell::new(9, 9)]), "T");
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = Grid::new(2).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }

    #[test]
    fn test_cell_offset() {
        let c = Cell::new(2, 2);
        assert_eq!(c.offset(-1, 1, 2), Some(Cell::new(0, 4)));
        assert_eq!(c.offset(-1, 0, 3), None);
        assert_eq!(c.offset(1, -1, 0), Some(c));
    }

    #[test]
    fn test_serialize_as_row_strings() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"["AB","CD"]"#);
    }
}
