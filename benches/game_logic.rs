use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lines::core::rng::seeded;
use lines::core::{find_path, find_runs, Board, GameConfig, GameState};
use lines::types::Pos;

/// 9x9 board with a checkerboard-ish wall pattern that forces long detours.
fn maze_board() -> Board {
    let mut rows = vec![vec![None; 9]; 9];
    for r in (1..9).step_by(2) {
        for c in 0..9 {
            // Leave a gap at alternating ends of each wall row.
            let gap = if (r / 2) % 2 == 0 { 8 } else { 0 };
            if c != gap {
                rows[r][c] = Some((c % 3) as u8);
            }
        }
    }
    Board::from_rows(&rows).unwrap()
}

fn dense_board() -> Board {
    let rows: Vec<Vec<Option<u8>>> = (0..9)
        .map(|r| (0..9).map(|c| Some(((r + 2 * c) % 4) as u8)).collect())
        .collect();
    Board::from_rows(&rows).unwrap()
}

fn bench_find_path(c: &mut Criterion) {
    let board = maze_board();
    let mut from_board = board.clone();
    from_board.place(Pos::new(0, 0), lines::types::Ball::new(0)).unwrap();

    c.bench_function("find_path_maze", |b| {
        b.iter(|| find_path(black_box(&from_board), Pos::new(0, 0), Pos::new(8, 8)).unwrap())
    });
}

fn bench_find_runs(c: &mut Criterion) {
    let board = dense_board();
    c.bench_function("find_runs_full_board", |b| {
        b.iter(|| find_runs(black_box(&board), 5))
    });
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("full_turn", |b| {
        b.iter(|| {
            let mut board = Board::new(9);
            board.place(Pos::new(0, 0), lines::types::Ball::new(0)).unwrap();
            let mut game = GameState::from_board(GameConfig::default(), board, seeded(7)).unwrap();
            game.click(Pos::new(0, 0)).unwrap();
            game.click(Pos::new(8, 8)).unwrap();
            game.finish_move()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = GameState::new(GameConfig::default(), 12345).unwrap();
    let mut snap = lines::core::GameSnapshot::default();
    c.bench_function("snapshot_into", |b| {
        b.iter(|| game.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_find_path,
    bench_find_runs,
    bench_full_turn,
    bench_snapshot
);
criterion_main!(benches);
