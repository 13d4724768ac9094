//! Board module - manages the game grid
//!
//! The board is a square grid where each cell is empty or holds one ball.
//! Uses flat row-major storage (`row * size + col`).
//! Coordinates: `Pos { row, col }`, row 0 at the top, col 0 on the left.

use arrayvec::ArrayVec;

use crate::error::{LinesError, Result};
use crate::types::{Ball, Cell, Direction, Pos};

/// The game board - `size x size` cells in flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: u8) -> Self {
        let len = size as usize * size as usize;
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Build a board from rows of color indices (`None` = empty).
    ///
    /// Every row must have as many entries as there are rows.
    pub fn from_rows(rows: &[Vec<Option<u8>>]) -> Result<Self> {
        let size = u8::try_from(rows.len())
            .map_err(|_| LinesError::InvalidConfig(format!("{} rows is too many", rows.len())))?;
        let mut board = Board::new(size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != rows.len() {
                return Err(LinesError::InvalidConfig(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    rows.len()
                )));
            }
            for (c, color) in row.iter().enumerate() {
                if let Some(color) = color {
                    board.place(Pos::new(r as u8, c as u8), Ball::new(*color))?;
                }
            }
        }
        Ok(board)
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(pos.row as usize * self.size as usize + pos.col as usize)
    }

    fn checked_index(&self, pos: Pos) -> Result<usize> {
        self.index(pos).ok_or(LinesError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            size: self.size,
        })
    }

    fn pos_at(&self, idx: usize) -> Pos {
        let size = self.size as usize;
        Pos::new((idx / size) as u8, (idx % size) as u8)
    }

    /// Check that a position lies on the board
    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Fail with `OutOfBounds` unless `pos` lies on the board
    pub fn check_bounds(&self, pos: Pos) -> Result<()> {
        self.checked_index(pos).map(|_| ())
    }

    /// Get the occupant at `pos`
    pub fn get(&self, pos: Pos) -> Result<Cell> {
        let idx = self.checked_index(pos)?;
        Ok(self.cells[idx])
    }

    /// Put a ball on an empty cell
    pub fn place(&mut self, pos: Pos, ball: Ball) -> Result<()> {
        let idx = self.checked_index(pos)?;
        if self.cells[idx].is_some() {
            return Err(LinesError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[idx] = Some(ball);
        Ok(())
    }

    /// Empty a cell, returning what was there
    pub fn clear(&mut self, pos: Pos) -> Result<Cell> {
        let idx = self.checked_index(pos)?;
        Ok(self.cells[idx].take())
    }

    /// Empty every listed cell; returns how many balls were removed.
    /// Positions off the board are skipped.
    pub fn clear_cells(&mut self, positions: &[Pos]) -> usize {
        let mut removed = 0;
        for &pos in positions {
            if let Some(idx) = self.index(pos) {
                if self.cells[idx].take().is_some() {
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Move the ball at `from` onto the empty cell `to`
    pub fn move_ball(&mut self, from: Pos, to: Pos) -> Result<Ball> {
        let src = self.checked_index(from)?;
        let dst = self.checked_index(to)?;
        if self.cells[dst].is_some() {
            return Err(LinesError::CellOccupied {
                row: to.row,
                col: to.col,
            });
        }
        let ball = self.cells[src].take().ok_or(LinesError::CellEmpty {
            row: from.row,
            col: from.col,
        })?;
        self.cells[dst] = Some(ball);
        Ok(ball)
    }

    /// Check if position is empty (within bounds and free)
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        matches!(self.index(pos).map(|i| self.cells[i]), Some(None))
    }

    /// Check if position is occupied (within bounds and holding a ball)
    pub fn is_occupied(&self, pos: Pos) -> bool {
        matches!(self.index(pos).map(|i| self.cells[i]), Some(Some(_)))
    }

    /// In-bounds orthogonal neighbors in the order up, right, down, left
    pub fn neighbors4(&self, pos: Pos) -> ArrayVec<Pos, 4> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| pos.step(dir, self.size))
            .collect()
    }

    /// All positions in row-major order.
    ///
    /// The iterator is lazy and cheap to clone; call again to restart.
    pub fn positions(&self) -> Positions {
        Positions {
            size: self.size,
            next: 0,
            end: self.cells.len(),
        }
    }

    /// Positions of all empty cells in row-major order
    pub fn empty_positions(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| self.pos_at(idx))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn ball_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    /// Rows of color indices, the inverse of [`Board::from_rows`]
    pub fn to_rows(&self) -> Vec<Vec<Option<u8>>> {
        self.cells
            .chunks(self.size.max(1) as usize)
            .map(|row| row.iter().map(|cell| cell.map(Ball::color)).collect())
            .collect()
    }
}

/// Row-major iterator over the positions of a board
#[derive(Debug, Clone)]
pub struct Positions {
    size: u8,
    next: usize,
    end: usize,
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.end {
            return None;
        }
        let size = self.size as usize;
        let pos = Pos::new((self.next / size) as u8, (self.next % size) as u8);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Positions {}
