//! Scoring module - per-run score strategies
//!
//! Every collapsing run is scored on its own, even when it shares a ball with
//! a run on another axis. The game holds the strategy behind
//! [`ScoreStrategy`] so alternate rules can be swapped in without touching the
//! turn logic.

use std::fmt;

use crate::runs::Run;

/// Computes the points awarded for one collapsing run.
pub trait ScoreStrategy: fmt::Debug + Send + Sync {
    fn score_run(&self, run: &Run) -> u32;
}

/// Classic Lines scoring: `L * (L - (min_line - 1))` for a run of length `L`.
///
/// With `min_line = 5` a run of 5 scores 5, 6 scores 12 and 9 scores 45.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicScoring {
    pub min_line: usize,
}

impl ClassicScoring {
    pub fn new(min_line: usize) -> Self {
        Self { min_line }
    }
}

impl ScoreStrategy for ClassicScoring {
    fn score_run(&self, run: &Run) -> u32 {
        calculate_run_score(run.len(), self.min_line)
    }
}

/// Flat scoring: a fixed number of points per collapsed ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerBallScoring {
    pub points_per_ball: u32,
}

impl ScoreStrategy for PerBallScoring {
    fn score_run(&self, run: &Run) -> u32 {
        (run.len() as u32).saturating_mul(self.points_per_ball)
    }
}

/// Adapts a plain function or closure into a [`ScoreStrategy`].
pub struct FnScoring<F>(pub F);

impl<F> fmt::Debug for FnScoring<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnScoring")
    }
}

impl<F> ScoreStrategy for FnScoring<F>
where
    F: Fn(&Run) -> u32 + Send + Sync,
{
    fn score_run(&self, run: &Run) -> u32 {
        (self.0)(run)
    }
}

/// Classic score for a run of `len` balls with threshold `min_line`.
///
/// Runs below the threshold score 0.
pub fn calculate_run_score(len: usize, min_line: usize) -> u32 {
    if len == 0 || len < min_line {
        return 0;
    }
    let bonus = len + 1 - min_line.max(1);
    u32::try_from(len.saturating_mul(bonus)).unwrap_or(u32::MAX)
}
