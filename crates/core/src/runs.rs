//! Run matching - finds same-colored straight runs that collapse
//!
//! Lines are enumerated per axis family in a fixed order:
//!
//! 1. **Horizontal**: each row, left to right
//! 2. **Vertical**: each column, top to bottom
//! 3. **Diagonal** (row grows with column): anchored on the top edge, then on
//!    the left edge below the main diagonal
//! 4. **Anti-diagonal** (row shrinks as column grows): anchored on the bottom
//!    edge, then on the left edge above it
//!
//! Lines shorter than the threshold are never produced. Within a line the
//! scan emits every maximal same-color run that reaches the threshold.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{Ball, Pos};

/// Axis family a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];
}

/// A full straight line of board positions in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub axis: Axis,
    pub cells: Vec<Pos>,
}

/// A maximal same-color run along one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub axis: Axis,
    pub color: Ball,
    pub cells: Vec<Pos>,
}

impl Run {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// All lines of a `size x size` board with at least `min_len` cells.
///
/// Lazy; clone the iterator or call again to restart.
pub fn lines(size: u8, min_len: usize) -> impl Iterator<Item = Line> + Clone {
    let n = size as usize;
    let last = n.saturating_sub(1);

    let rows = (0..n).map(move |r| Line {
        axis: Axis::Horizontal,
        cells: (0..n).map(|c| at(r, c)).collect(),
    });

    let cols = (0..n).map(move |c| Line {
        axis: Axis::Vertical,
        cells: (0..n).map(|r| at(r, c)).collect(),
    });

    let diag_top = (0..n).map(move |c| Line {
        axis: Axis::Diagonal,
        cells: (0..n - c).map(|i| at(i, c + i)).collect(),
    });
    let diag_left = (1..n).map(move |r| Line {
        axis: Axis::Diagonal,
        cells: (0..n - r).map(|i| at(r + i, i)).collect(),
    });

    let anti_bottom = (0..n).map(move |c| Line {
        axis: Axis::AntiDiagonal,
        cells: (0..n - c).map(|i| at(last - i, c + i)).collect(),
    });
    let anti_left = (0..last).rev().map(move |r| Line {
        axis: Axis::AntiDiagonal,
        cells: (0..=r).map(|i| at(r - i, i)).collect(),
    });

    rows.chain(cols)
        .chain(diag_top)
        .chain(diag_left)
        .chain(anti_bottom)
        .chain(anti_left)
        .filter(move |line| line.cells.len() >= min_len.max(1))
}

#[inline(always)]
fn at(row: usize, col: usize) -> Pos {
    Pos::new(row as u8, col as u8)
}

/// Runs of at least `min_len` same-colored balls along `line`.
pub fn runs_in_line(board: &Board, line: &Line, min_len: usize) -> Vec<Run> {
    let min_len = min_len.max(1);
    let cells = &line.cells;
    let color_at = |i: usize| board.get(cells[i]).ok().flatten();

    let mut runs = Vec::new();
    let mut i = 0;
    while i < cells.len() {
        let Some(color) = color_at(i) else {
            i += 1;
            continue;
        };

        let mut end = i + 1;
        while end < cells.len() && color_at(end) == Some(color) {
            end += 1;
        }

        if end - i >= min_len {
            runs.push(Run {
                axis: line.axis,
                color,
                cells: cells[i..end].to_vec(),
            });
        }
        i = end;
    }
    runs
}

/// Every collapsing run on the board, in line enumeration order.
///
/// A ball may appear in several runs (one per axis); see
/// [`collapse_positions`] for the deduplicated set to clear.
pub fn find_runs(board: &Board, min_len: usize) -> Vec<Run> {
    lines(board.size(), min_len)
        .flat_map(|line| runs_in_line(board, &line, min_len))
        .collect()
}

/// Union of the cells of `runs`, deduplicated, in row-major order.
pub fn collapse_positions(runs: &[Run]) -> Vec<Pos> {
    runs.iter()
        .flat_map(|run| run.cells.iter().copied())
        .collect::<BTreeSet<Pos>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], color: u8) {
        for &(r, c) in cells {
            board.place(Pos::new(r, c), Ball::new(color)).unwrap();
        }
    }

    #[test]
    fn line_counts_per_axis() {
        // 9x9, min 5: 9 rows, 9 cols, 5 + 4 diagonals, 5 + 4 anti-diagonals.
        let all: Vec<Line> = lines(9, 5).collect();
        let count = |axis| all.iter().filter(|l| l.axis == axis).count();
        assert_eq!(count(Axis::Horizontal), 9);
        assert_eq!(count(Axis::Vertical), 9);
        assert_eq!(count(Axis::Diagonal), 9);
        assert_eq!(count(Axis::AntiDiagonal), 9);
        assert!(all.iter().all(|l| l.cells.len() >= 5));
    }

    #[test]
    fn lines_are_restartable() {
        let iter = lines(5, 3);
        let a: Vec<Line> = iter.clone().collect();
        let b: Vec<Line> = iter.collect();
        assert_eq!(a, b);
    }

    #[test]
    fn diagonal_traversal_order() {
        let all: Vec<Line> = lines(3, 3).collect();
        let diag = all.iter().find(|l| l.axis == Axis::Diagonal).unwrap();
        assert_eq!(diag.cells, vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]);

        let anti = all.iter().find(|l| l.axis == Axis::AntiDiagonal).unwrap();
        assert_eq!(anti.cells, vec![Pos::new(2, 0), Pos::new(1, 1), Pos::new(0, 2)]);
    }

    #[test]
    fn every_cell_is_covered_by_each_axis_when_threshold_is_one() {
        let all: Vec<Line> = lines(4, 1).collect();
        for axis in Axis::ALL {
            let covered: BTreeSet<Pos> = all
                .iter()
                .filter(|l| l.axis == axis)
                .flat_map(|l| l.cells.iter().copied())
                .collect();
            assert_eq!(covered.len(), 16, "{:?} misses cells", axis);
        }
    }

    #[test]
    fn row_run_threshold() {
        let mut board = Board::new(9);
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], 1);
        place_all(&mut board, &[(0, 5), (0, 6), (0, 7), (0, 8)], 0);

        let runs = find_runs(&board, 5);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].axis, Axis::Horizontal);
        assert_eq!(runs[0].color, Ball::new(1));
        assert_eq!(runs[0].len(), 5);
    }

    #[test]
    fn run_broken_by_gap_does_not_count() {
        let mut board = Board::new(9);
        place_all(&mut board, &[(4, 0), (4, 1), (4, 2), (4, 4), (4, 5)], 2);
        assert!(find_runs(&board, 5).is_empty());
    }

    #[test]
    fn anti_diagonal_run() {
        let mut board = Board::new(5);
        place_all(&mut board, &[(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)], 3);
        let runs = find_runs(&board, 5);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].axis, Axis::AntiDiagonal);
    }

    #[test]
    fn crossing_runs_share_a_cell() {
        let mut board = Board::new(5);
        place_all(&mut board, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)], 1);
        place_all(&mut board, &[(0, 2), (1, 2), (3, 2), (4, 2)], 1);

        let runs = find_runs(&board, 5);
        assert_eq!(runs.len(), 2);
        let cells = collapse_positions(&runs);
        assert_eq!(cells.len(), 9);
    }
}
