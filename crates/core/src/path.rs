//! Path module - shortest ball route through empty cells
//!
//! Breadth-first search from the source ball. Neighbors are expanded in the
//! fixed order up, right, down, left and a cell is marked visited when it is
//! enqueued, so among equally short routes the first one discovered wins.

use std::collections::VecDeque;

use crate::board::Board;
use crate::error::Result;
use crate::types::Pos;

/// Find the shortest route for the ball at `source` to the empty cell
/// `destination`.
///
/// Returns `Ok(None)` when there is no legal move: the destination cannot be
/// reached through empty cells, `source` is empty, `destination` is occupied,
/// or both are the same cell. Out-of-bounds positions are errors.
///
/// The returned path starts with `source`, ends with `destination`, and every
/// two consecutive cells are orthogonally adjacent.
pub fn find_path(board: &Board, source: Pos, destination: Pos) -> Result<Option<Vec<Pos>>> {
    board.check_bounds(source)?;
    board.check_bounds(destination)?;

    if source == destination || !board.is_occupied(source) || !board.is_empty_at(destination) {
        return Ok(None);
    }

    let size = board.size() as usize;
    let idx = |p: Pos| p.row as usize * size + p.col as usize;

    let mut parent: Vec<Option<Pos>> = vec![None; board.cell_count()];
    let mut visited = vec![false; board.cell_count()];
    let mut queue = VecDeque::new();

    visited[idx(source)] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for next in board.neighbors4(current) {
            let i = idx(next);
            if visited[i] || !board.is_empty_at(next) {
                continue;
            }
            visited[i] = true;
            parent[i] = Some(current);

            if next == destination {
                return Ok(Some(walk_back(&parent, destination, idx)));
            }
            queue.push_back(next);
        }
    }

    Ok(None)
}

/// Check whether any empty cell is reachable from `source`.
pub fn has_any_move(board: &Board, source: Pos) -> bool {
    board.is_occupied(source)
        && board
            .neighbors4(source)
            .iter()
            .any(|&next| board.is_empty_at(next))
}

fn walk_back(parent: &[Option<Pos>], destination: Pos, idx: impl Fn(Pos) -> usize) -> Vec<Pos> {
    let mut path = vec![destination];
    let mut cursor = destination;
    while let Some(prev) = parent[idx(cursor)] {
        path.push(prev);
        cursor = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ball;

    fn board_with(size: u8, balls: &[(u8, u8)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c) in balls {
            board.place(Pos::new(r, c), Ball::new(0)).unwrap();
        }
        board
    }

    #[test]
    fn straight_line_path() {
        let board = board_with(5, &[(2, 0)]);
        let path = find_path(&board, Pos::new(2, 0), Pos::new(2, 3))
            .unwrap()
            .unwrap();
        assert_eq!(
            path,
            vec![Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2), Pos::new(2, 3)]
        );
    }

    #[test]
    fn tie_break_prefers_right_before_down() {
        let board = board_with(3, &[(0, 0)]);
        let path = find_path(&board, Pos::new(0, 0), Pos::new(1, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)]);
    }

    #[test]
    fn tie_break_prefers_up_before_left() {
        let board = board_with(3, &[(2, 2)]);
        let path = find_path(&board, Pos::new(2, 2), Pos::new(1, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![Pos::new(2, 2), Pos::new(1, 2), Pos::new(1, 1)]);
    }

    #[test]
    fn detours_around_walls() {
        // Wall in column 1 except at the bottom row.
        let board = board_with(3, &[(0, 0), (0, 1), (1, 1)]);
        let path = find_path(&board, Pos::new(0, 0), Pos::new(0, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Pos::new(0, 0)));
        assert_eq!(path.last(), Some(&Pos::new(0, 2)));
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }

    #[test]
    fn enclosed_destination_is_unreachable() {
        let board = board_with(3, &[(0, 0), (0, 2), (1, 1), (2, 2)]);
        // (0, 1) is boxed in by (0, 0), (1, 1) and (0, 2).
        assert_eq!(find_path(&board, Pos::new(2, 2), Pos::new(0, 1)).unwrap(), None);
    }

    #[test]
    fn precondition_violations_yield_none() {
        let board = board_with(3, &[(0, 0), (1, 1)]);
        // Empty source.
        assert_eq!(find_path(&board, Pos::new(2, 2), Pos::new(2, 1)).unwrap(), None);
        // Occupied destination.
        assert_eq!(find_path(&board, Pos::new(0, 0), Pos::new(1, 1)).unwrap(), None);
        // Same cell.
        assert_eq!(find_path(&board, Pos::new(0, 0), Pos::new(0, 0)).unwrap(), None);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let board = board_with(3, &[(0, 0)]);
        assert!(find_path(&board, Pos::new(0, 0), Pos::new(3, 0)).is_err());
    }

    #[test]
    fn has_any_move_checks_adjacent_space() {
        let board = board_with(2, &[(0, 0), (0, 1), (1, 0)]);
        assert!(has_any_move(&board, Pos::new(0, 1)));
        assert!(!has_any_move(&board, Pos::new(0, 0)));
    }
}
