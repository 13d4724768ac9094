use serde::Serialize;

use crate::types::{Ball, Pos};

/// What an observer sees in one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapshotCell {
    Empty,
    Ball { color: u8 },
    /// Empty cell where a ball of `color` is announced to drop
    Preview { color: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub size: u8,
    /// Row-major, `size * size` entries
    pub cells: Vec<SnapshotCell>,
    pub selected: Option<Pos>,
    pub animating: bool,
    pub score: u32,
    pub game_over: bool,
    pub final_score: Option<u32>,
    pub turn: u32,
    pub episode_id: u32,
    /// Colors of the upcoming drops, in preview order
    pub next: Vec<Ball>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.cells.clear();
        self.selected = None;
        self.animating = false;
        self.score = 0;
        self.game_over = false;
        self.final_score = None;
        self.turn = 0;
        self.episode_id = 0;
        self.next.clear();
    }

    pub fn cell(&self, pos: Pos) -> Option<SnapshotCell> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells
            .get(pos.row as usize * self.size as usize + pos.col as usize)
            .copied()
    }

    /// Input is only accepted while the game runs and no ball is moving.
    pub fn playable(&self) -> bool {
        !self.game_over && !self.animating
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
            selected: None,
            animating: false,
            score: 0,
            game_over: false,
            final_score: None,
            turn: 0,
            episode_id: 0,
            next: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let snap = GameSnapshot {
            size: 2,
            cells: vec![
                SnapshotCell::Ball { color: 1 },
                SnapshotCell::Empty,
                SnapshotCell::Preview { color: 3 },
                SnapshotCell::Empty,
            ],
            ..GameSnapshot::default()
        };
        assert_eq!(snap.cell(Pos::new(0, 0)), Some(SnapshotCell::Ball { color: 1 }));
        assert_eq!(snap.cell(Pos::new(1, 0)), Some(SnapshotCell::Preview { color: 3 }));
        assert_eq!(snap.cell(Pos::new(2, 0)), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut snap = GameSnapshot {
            size: 1,
            cells: vec![SnapshotCell::Empty],
            score: 42,
            game_over: true,
            final_score: Some(42),
            ..GameSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
