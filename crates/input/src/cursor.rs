//! Board cursor for keyboard play.

use crate::types::{Direction, Pos};

/// A cell highlight that never leaves the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    size: u8,
}

impl Cursor {
    /// Cursor centered on a board of side `size`
    pub fn new(size: u8) -> Self {
        let mid = size / 2;
        Self {
            pos: Pos::new(mid, mid),
            size,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Move one cell; stays put at the edge. Returns whether it moved.
    pub fn step(&mut self, dir: Direction) -> bool {
        match self.pos.step(dir, self.size) {
            Some(next) => {
                self.pos = next;
                true
            }
            None => false,
        }
    }

    /// Jump to `pos`, clamped onto the board
    pub fn set(&mut self, pos: Pos) {
        let last = self.size.saturating_sub(1);
        self.pos = Pos::new(pos.row.min(last), pos.col.min(last));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_the_middle() {
        assert_eq!(Cursor::new(9).pos(), Pos::new(4, 4));
        assert_eq!(Cursor::new(1).pos(), Pos::new(0, 0));
    }

    #[test]
    fn stops_at_edges() {
        let mut cursor = Cursor::new(3);
        assert!(cursor.step(Direction::Up));
        assert!(!cursor.step(Direction::Up));
        assert!(cursor.step(Direction::Left));
        assert!(!cursor.step(Direction::Left));
        assert_eq!(cursor.pos(), Pos::new(0, 0));
    }

    #[test]
    fn set_clamps() {
        let mut cursor = Cursor::new(5);
        cursor.set(Pos::new(9, 2));
        assert_eq!(cursor.pos(), Pos::new(4, 2));
    }
}
