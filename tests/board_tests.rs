//! Board tests

use lines::core::{Board, LinesError};
use lines::types::{Ball, Pos};

#[test]
fn test_board_new_empty() {
    let board = Board::new(9);
    assert_eq!(board.size(), 9);
    assert_eq!(board.cell_count(), 81);
    assert_eq!(board.empty_count(), 81);

    for pos in board.positions() {
        assert_eq!(board.get(pos).unwrap(), None, "cell {} should be empty", pos);
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(9);

    assert!(matches!(
        board.get(Pos::new(9, 0)),
        Err(LinesError::OutOfBounds { row: 9, col: 0, size: 9 })
    ));
    assert!(board.get(Pos::new(0, 9)).is_err());
    assert!(!board.contains(Pos::new(200, 200)));
    assert!(!board.is_empty_at(Pos::new(9, 9)));
    assert!(!board.is_occupied(Pos::new(9, 9)));
}

#[test]
fn test_board_place_and_clear() {
    let mut board = Board::new(5);

    board.place(Pos::new(2, 3), Ball::new(4)).unwrap();
    assert_eq!(board.get(Pos::new(2, 3)).unwrap(), Some(Ball::new(4)));
    assert!(board.is_occupied(Pos::new(2, 3)));

    // Placing onto an occupied cell leaves it untouched.
    assert!(matches!(
        board.place(Pos::new(2, 3), Ball::new(1)),
        Err(LinesError::CellOccupied { row: 2, col: 3 })
    ));
    assert_eq!(board.get(Pos::new(2, 3)).unwrap(), Some(Ball::new(4)));

    assert_eq!(board.clear(Pos::new(2, 3)).unwrap(), Some(Ball::new(4)));
    assert_eq!(board.clear(Pos::new(2, 3)).unwrap(), None);
    assert!(board.is_empty_at(Pos::new(2, 3)));
}

#[test]
fn test_board_move_onto_occupied_fails() {
    let mut board = Board::new(3);
    board.place(Pos::new(0, 0), Ball::new(0)).unwrap();
    board.place(Pos::new(0, 1), Ball::new(1)).unwrap();

    assert!(matches!(
        board.move_ball(Pos::new(0, 0), Pos::new(0, 1)),
        Err(LinesError::CellOccupied { .. })
    ));
    assert_eq!(board.get(Pos::new(0, 0)).unwrap(), Some(Ball::new(0)));
    assert_eq!(board.get(Pos::new(0, 1)).unwrap(), Some(Ball::new(1)));
}

#[test]
fn test_board_counts_and_full() {
    let mut board = Board::new(2);
    assert!(board.has_empty_cell());
    assert!(!board.is_full());

    for (i, pos) in board.positions().enumerate() {
        assert_eq!(board.empty_count(), 4 - i);
        board.place(pos, Ball::new(0)).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.ball_count(), 4);
    assert!(board.empty_positions().is_empty());

    board.clear_all();
    assert_eq!(board.empty_count(), 4);
}

#[test]
fn test_board_empty_positions_row_major() {
    let rows = vec![
        vec![Some(0), None, Some(1)],
        vec![None, Some(2), None],
        vec![Some(3), Some(3), Some(3)],
    ];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(
        board.empty_positions(),
        vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 2)]
    );
}

#[test]
fn test_board_clear_cells_counts_balls() {
    let mut board = Board::new(3);
    board.place(Pos::new(0, 0), Ball::new(0)).unwrap();
    board.place(Pos::new(1, 1), Ball::new(0)).unwrap();

    let removed = board.clear_cells(&[Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1), Pos::new(7, 7)]);
    assert_eq!(removed, 2);
    assert_eq!(board.ball_count(), 0);
}

#[test]
fn test_board_neighbors_at_edges() {
    let board = Board::new(4);
    assert_eq!(board.neighbors4(Pos::new(0, 0)).len(), 2);
    assert_eq!(board.neighbors4(Pos::new(0, 2)).len(), 3);
    assert_eq!(board.neighbors4(Pos::new(2, 2)).len(), 4);
    assert_eq!(
        board.neighbors4(Pos::new(3, 3)).as_slice(),
        &[Pos::new(2, 3), Pos::new(3, 2)]
    );

    let single = Board::new(1);
    assert!(single.neighbors4(Pos::new(0, 0)).is_empty());
}
