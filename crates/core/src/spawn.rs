//! Spawn module - previewed ball drops
//!
//! Each turn announces where the next balls will land (the preview). At the
//! end of a turn without a collapse the preview is resolved: entries whose
//! cell is still empty land there, the others are carried over to random free
//! cells, and the total is topped up or truncated to the drop count.

use rand::seq::index;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::board::Board;
use crate::rng::{pick_index, random_ball};
use crate::types::{Ball, Pos};

/// A ball that drops onto `pos` at the end of the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PreviewEntry {
    pub pos: Pos,
    pub ball: Ball,
}

/// Announce up to `count` drops on distinct empty cells.
pub fn build_preview<R: Rng + ?Sized>(
    board: &Board,
    count: usize,
    colors: u8,
    rng: &mut R,
) -> Vec<PreviewEntry> {
    build_preview_excluding(board, count, colors, &[], rng)
}

/// Like [`build_preview`], but never picks a cell listed in `reserved`.
pub fn build_preview_excluding<R: Rng + ?Sized>(
    board: &Board,
    count: usize,
    colors: u8,
    reserved: &[Pos],
    rng: &mut R,
) -> Vec<PreviewEntry> {
    let candidates: Vec<Pos> = board
        .empty_positions()
        .into_iter()
        .filter(|pos| !reserved.contains(pos))
        .collect();

    let amount = count.min(candidates.len());
    index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| PreviewEntry {
            pos: candidates[i],
            ball: random_ball(rng, colors),
        })
        .collect()
}

/// Drop the previewed balls; returns how many were placed.
///
/// Places exactly `min(count, empty cells)` balls.
pub fn resolve_preview<R: Rng + ?Sized>(
    board: &mut Board,
    preview: &[PreviewEntry],
    count: usize,
    colors: u8,
    rng: &mut R,
) -> usize {
    let mut placed = 0;
    let mut carried = Vec::new();

    for entry in preview {
        if placed == count {
            break;
        }
        if board.place(entry.pos, entry.ball).is_ok() {
            placed += 1;
        } else {
            carried.push(entry.ball);
        }
    }

    let remaining = count - placed;
    carried.truncate(remaining);
    while carried.len() < remaining {
        carried.push(random_ball(rng, colors));
    }

    let carried_len = carried.len();
    for ball in carried {
        if !place_on_random_empty(board, ball, rng) {
            break;
        }
        placed += 1;
    }

    debug!(placed, carried = carried_len, "preview resolved");
    placed
}

/// Put `count` fresh random balls on random empty cells; returns how many fit.
pub fn place_random<R: Rng + ?Sized>(
    board: &mut Board,
    count: usize,
    colors: u8,
    rng: &mut R,
) -> usize {
    let mut placed = 0;
    for _ in 0..count {
        let ball = random_ball(rng, colors);
        if !place_on_random_empty(board, ball, rng) {
            break;
        }
        placed += 1;
    }
    placed
}

fn place_on_random_empty<R: Rng + ?Sized>(board: &mut Board, ball: Ball, rng: &mut R) -> bool {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return false;
    }
    let pos = empty[pick_index(rng, empty.len())];
    board.place(pos, ball).is_ok()
}
