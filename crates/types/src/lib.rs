//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the rules engine, the terminal
//! front end and tests alike.
//!
//! # Board
//!
//! The board is square. Positions are `(row, col)` with row 0 at the top and
//! column 0 on the left:
//!
//! - **Default size**: 9x9
//! - **Default colors**: 7
//! - **Collapse threshold**: 5 balls in a straight line
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval of the front end loop |
//! | `DEFAULT_ANIMATION_STEP_MS` | 40 | Delay between two steps of a ball move |
//!
//! # Examples
//!
//! ```
//! use lines_types::{Ball, Direction, Pos};
//!
//! let ball = Ball::new(3);
//! assert_eq!(ball.color(), 3);
//!
//! let pos = Pos::new(4, 2);
//! assert_eq!(pos.step(Direction::Up, 9), Some(Pos::new(3, 2)));
//! assert_eq!(Pos::new(0, 0).step(Direction::Left, 9), None);
//! ```

use serde::{Deserialize, Serialize};

/// Default board side length (9 cells)
pub const DEFAULT_BOARD_SIZE: u8 = 9;

/// Default number of ball colors
pub const DEFAULT_COLORS_NUMBER: u8 = 7;

/// Balls placed when a game starts
pub const DEFAULT_STARTING_BALLS: usize = 5;

/// Balls dropped at the end of every turn without a collapse
pub const DEFAULT_NEW_DROP_BALLS: usize = 3;

/// Minimum run length that collapses
pub const DEFAULT_MIN_COLLAPSING_LINE: usize = 5;

/// Delay between two animation steps of a moving ball
pub const DEFAULT_ANIMATION_STEP_MS: u32 = 40;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: u8 = 64;

/// Largest supported number of colors
pub const MAX_COLORS: u8 = 32;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// A colored ball. The color is an index in `[0, colors_number)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ball(u8);

impl Ball {
    pub const fn new(color: u8) -> Self {
        Self(color)
    }

    pub const fn color(self) -> u8 {
        self.0
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Ball)`: Cell holding a ball
pub type Cell = Option<Ball>;

/// Board coordinate. Two positions name the same cell iff they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The adjacent position in `dir`, or `None` if it falls off a board of
    /// side `size`.
    pub fn step(self, dir: Direction, size: u8) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 || row >= size as i16 || col >= size as i16 {
            return None;
        }
        Some(Pos::new(row as u8, col as u8))
    }

    /// Manhattan distance between two positions.
    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) as usize + self.col.abs_diff(other.col) as usize
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal directions.
///
/// [`Direction::ALL`] lists them in the order used for path expansion and
/// neighbor queries: up, right, down, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(d_row, d_col)` offset of one step in this direction.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// ```
    /// use lines_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Front end actions produced by input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the board cursor one cell
    Cursor(Direction),
    /// Click the cell under the cursor
    Select,
    /// Start a new game
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_match_classic_lines() {
        assert_eq!(DEFAULT_BOARD_SIZE, 9);
        assert_eq!(DEFAULT_COLORS_NUMBER, 7);
        assert_eq!(DEFAULT_NEW_DROP_BALLS, 3);
        assert_eq!(DEFAULT_MIN_COLLAPSING_LINE, 5);
    }

    #[test]
    fn step_stays_in_bounds() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3), None);
        assert_eq!(corner.step(Direction::Left, 3), None);
        assert_eq!(corner.step(Direction::Right, 3), Some(Pos::new(0, 1)));
        assert_eq!(corner.step(Direction::Down, 3), Some(Pos::new(1, 0)));

        let far = Pos::new(2, 2);
        assert_eq!(far.step(Direction::Down, 3), None);
        assert_eq!(far.step(Direction::Right, 3), None);
    }

    #[test]
    fn direction_order_is_up_right_down_left() {
        assert_eq!(
            Direction::ALL,
            [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Pos::new(1, 1).manhattan(Pos::new(3, 0)), 3);
        assert_eq!(Pos::new(2, 2).manhattan(Pos::new(2, 2)), 0);
    }
}
