//! Game state module - the turn state machine
//!
//! This module ties together all core components: board, path finding, run
//! matching, spawning and scoring.
//!
//! A turn goes: select a ball, click an empty cell it can reach, watch it move
//! one cell per animation step, then
//!
//! 1. collapse any runs the move completed (score, no spawn), or
//! 2. drop the previewed balls, announce the next preview, collapse runs the
//!    drop completed, and end the game if the board is full.
//!
//! The drop also happens when the collapse left the board without balls.
//!
//! Clicks that arrive while a ball is moving are dropped.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, error, info, instrument};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{LinesError, Result};
use crate::path::find_path;
use crate::rng::seeded;
use crate::runs::{collapse_positions, find_runs, Run};
use crate::scoring::{ClassicScoring, ScoreStrategy};
use crate::snapshot::{GameSnapshot, SnapshotCell};
use crate::spawn::{build_preview, place_random, resolve_preview, PreviewEntry};
use crate::types::Pos;

/// A ball travelling along its path, one cell per step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    path: Vec<Pos>,
    cursor: usize,
    /// Time accumulated towards the next step
    timer_ms: u32,
}

impl Animation {
    fn new(path: Vec<Pos>) -> Self {
        Self {
            path,
            cursor: 0,
            timer_ms: 0,
        }
    }

    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Where the moving ball currently is
    pub fn position(&self) -> Pos {
        self.path[self.cursor]
    }

    pub fn remaining_steps(&self) -> usize {
        self.path.len().saturating_sub(self.cursor + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selected(Pos),
    Animating(Animation),
    GameOver { final_score: u32 },
}

/// Result of a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click had no effect
    Ignored,
    Selected(Pos),
    /// The clicked cell cannot be reached; the selection is kept
    NoPath,
    /// The move was scheduled as `steps` animation steps
    MoveStarted { steps: usize },
}

/// Result of one animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Moved { from: Pos, to: Pos },
    /// The ball arrived and the rest of the turn was resolved
    TurnFinished,
    /// The board refused the move; the remaining path was dropped
    Abandoned,
}

/// What happened at the end of a turn (consumed by observers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub runs: Vec<Run>,
    pub cleared: usize,
    pub score_gained: u32,
    pub spawned: usize,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    config: GameConfig,
    board: Board,
    phase: Phase,
    preview: Vec<PreviewEntry>,
    rng: R,
    scoring: Arc<dyn ScoreStrategy>,
    score: u32,
    /// Finished turns in the current episode
    turn: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    last_event: Option<TurnReport>,
}

impl GameState<StdRng> {
    /// Create a new game with the given RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game drawing from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let mut game = Self::blank(Board::new(config.board_size), config, rng);
        game.deal();
        info!(
            size = game.config.board_size,
            colors = game.config.colors_number,
            "game started"
        );
        Ok(game)
    }

    /// Start from a prepared board. No starting balls are added; the first
    /// preview is built from the board's empty cells.
    pub fn from_board(config: GameConfig, board: Board, rng: R) -> Result<Self> {
        config.validate()?;
        if board.size() != config.board_size {
            return Err(LinesError::InvalidConfig(format!(
                "board is {}x{}, config expects {}",
                board.size(),
                board.size(),
                config.board_size
            )));
        }
        if let Some(ball) = board
            .cells()
            .iter()
            .flatten()
            .find(|ball| ball.color() >= config.colors_number)
        {
            return Err(LinesError::InvalidConfig(format!(
                "ball color {} is outside 0..{}",
                ball.color(),
                config.colors_number
            )));
        }

        let mut game = Self::blank(board, config, rng);
        game.preview = build_preview(
            &game.board,
            game.config.new_drop_balls,
            game.config.colors_number,
            &mut game.rng,
        );
        game.check_full();
        Ok(game)
    }

    /// Replace the score strategy
    pub fn with_score_strategy(mut self, scoring: Arc<dyn ScoreStrategy>) -> Self {
        self.scoring = scoring;
        self
    }

    fn blank(board: Board, config: GameConfig, rng: R) -> Self {
        let scoring = Arc::new(ClassicScoring::new(config.min_collapsing_line));
        Self {
            config,
            board,
            phase: Phase::Idle,
            preview: Vec::new(),
            rng,
            scoring,
            score: 0,
            turn: 0,
            episode_id: 0,
            last_event: None,
        }
    }

    /// Fresh board with the starting balls and a first preview
    fn deal(&mut self) {
        let colors = self.config.colors_number;
        self.board.clear_all();
        place_random(
            &mut self.board,
            self.config.starting_balls,
            colors,
            &mut self.rng,
        );
        self.preview = build_preview(
            &self.board,
            self.config.new_drop_balls,
            colors,
            &mut self.rng,
        );
        self.phase = Phase::Idle;
        self.score = 0;
        self.turn = 0;
        self.last_event = None;
        self.check_full();
    }

    /// Start over with a new board, continuing the same random stream
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.deal();
        info!(episode = self.episode_id, "game restarted");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn preview(&self) -> &[PreviewEntry] {
        &self.preview
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn selected(&self) -> Option<Pos> {
        match self.phase {
            Phase::Selected(pos) => Some(pos),
            _ => None,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn final_score(&self) -> Option<u32> {
        match self.phase {
            Phase::GameOver { final_score } => Some(final_score),
            _ => None,
        }
    }

    pub fn has_empty_cell(&self) -> bool {
        self.board.has_empty_cell()
    }

    /// Animation steps still scheduled
    pub fn pending_steps(&self) -> usize {
        match &self.phase {
            Phase::Animating(anim) => anim.remaining_steps(),
            _ => 0,
        }
    }

    /// Take and clear the report of the last finished turn.
    pub fn take_last_event(&mut self) -> Option<TurnReport> {
        self.last_event.take()
    }

    /// Handle a click on `pos`.
    ///
    /// Only out-of-bounds positions are errors; every other click yields an
    /// outcome, including the ones that change nothing.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Pos) -> Result<ClickOutcome> {
        self.board.check_bounds(pos)?;

        let outcome = match self.phase {
            Phase::GameOver { .. } | Phase::Animating(_) => ClickOutcome::Ignored,
            _ if self.board.is_occupied(pos) => {
                self.phase = Phase::Selected(pos);
                ClickOutcome::Selected(pos)
            }
            Phase::Idle => ClickOutcome::Ignored,
            Phase::Selected(from) => match find_path(&self.board, from, pos)? {
                None => ClickOutcome::NoPath,
                Some(path) => {
                    let steps = path.len() - 1;
                    self.phase = Phase::Animating(Animation::new(path));
                    ClickOutcome::MoveStarted { steps }
                }
            },
        };

        debug!(?outcome, "click handled");
        Ok(outcome)
    }

    /// Run one animation step. Returns `None` when no ball is moving.
    pub fn step(&mut self) -> Option<StepEvent> {
        let Phase::Animating(anim) = &mut self.phase else {
            return None;
        };
        if anim.cursor + 1 >= anim.path.len() {
            self.phase = Phase::Idle;
            return None;
        }

        let from = anim.path[anim.cursor];
        let to = anim.path[anim.cursor + 1];
        if let Err(err) = self.board.move_ball(from, to) {
            error!(%err, %from, %to, "move step failed, abandoning path");
            self.phase = Phase::Idle;
            return Some(StepEvent::Abandoned);
        }
        anim.cursor += 1;
        let arrived = anim.cursor + 1 == anim.path.len();

        if arrived {
            debug!(%to, "ball arrived");
            self.phase = Phase::Idle;
            self.finish_turn();
            return Some(StepEvent::TurnFinished);
        }
        Some(StepEvent::Moved { from, to })
    }

    /// Advance the animation clock by `elapsed_ms`, running one step per
    /// `animation_step_ms`. Returns true if the board changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let step_ms = self.config.animation_step_ms;
        match &mut self.phase {
            Phase::Animating(anim) => anim.timer_ms = anim.timer_ms.saturating_add(elapsed_ms),
            _ => return false,
        }

        let mut changed = false;
        loop {
            match &mut self.phase {
                Phase::Animating(anim) if anim.timer_ms >= step_ms => {
                    anim.timer_ms -= step_ms;
                }
                _ => break,
            }
            changed |= self.step().is_some();
        }
        changed
    }

    /// Run every remaining animation step now. Returns the number of steps.
    pub fn finish_move(&mut self) -> usize {
        let mut steps = 0;
        while self.step().is_some() {
            steps += 1;
        }
        steps
    }

    fn finish_turn(&mut self) {
        let mut report = TurnReport::default();

        // A board emptied by the collapse has nothing left to move, so it
        // gets the drop as well.
        let collapsed = self.collapse(&mut report) > 0;
        if !collapsed || self.board.ball_count() == 0 {
            let colors = self.config.colors_number;
            let count = self.config.new_drop_balls;
            let preview = std::mem::take(&mut self.preview);
            report.spawned = resolve_preview(&mut self.board, &preview, count, colors, &mut self.rng);
            self.preview = build_preview(&self.board, count, colors, &mut self.rng);

            self.collapse(&mut report);
            report.game_over = self.check_full();
        }

        self.turn = self.turn.wrapping_add(1);
        self.last_event = Some(report);
    }

    /// Clear every collapsing run and score it. Returns the number of runs.
    fn collapse(&mut self, report: &mut TurnReport) -> usize {
        let runs = find_runs(&self.board, self.config.min_collapsing_line);
        if runs.is_empty() {
            return 0;
        }

        let gained = runs
            .iter()
            .map(|run| self.scoring.score_run(run))
            .fold(0u32, u32::saturating_add);
        let cleared = self.board.clear_cells(&collapse_positions(&runs));

        self.score = self.score.saturating_add(gained);
        report.cleared += cleared;
        report.score_gained = report.score_gained.saturating_add(gained);
        debug!(runs = runs.len(), cleared, gained, score = self.score, "runs collapsed");

        let count = runs.len();
        report.runs.extend(runs);
        count
    }

    /// Enter game over when no empty cell is left.
    fn check_full(&mut self) -> bool {
        if self.board.has_empty_cell() {
            return false;
        }
        self.phase = Phase::GameOver {
            final_score: self.score,
        };
        info!(score = self.score, turn = self.turn, "game over");
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let size = self.board.size();
        out.size = size;
        out.cells.clear();
        out.cells.extend(self.board.cells().iter().map(|cell| match cell {
            Some(ball) => SnapshotCell::Ball {
                color: ball.color(),
            },
            None => SnapshotCell::Empty,
        }));
        for entry in &self.preview {
            let idx = entry.pos.row as usize * size as usize + entry.pos.col as usize;
            if let Some(cell) = out.cells.get_mut(idx) {
                if *cell == SnapshotCell::Empty {
                    *cell = SnapshotCell::Preview {
                        color: entry.ball.color(),
                    };
                }
            }
        }

        out.selected = self.selected();
        out.animating = self.is_animating();
        out.score = self.score;
        out.game_over = self.is_game_over();
        out.final_score = self.final_score();
        out.turn = self.turn;
        out.episode_id = self.episode_id;
        out.next.clear();
        out.next.extend(self.preview.iter().map(|entry| entry.ball));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
