//! Core game logic for Lines - pure, deterministic, and testable
//!
//! This crate contains all the game rules and the turn state machine. It has
//! no dependency on terminals or any other front end.
//!
//! - **Deterministic**: the same seed (or the same injected RNG) replays the same game
//! - **Testable**: boards can be built from literal rows and driven click by click
//! - **Portable**: runs headless, in a terminal, or behind any other UI
//!
//! # Module Structure
//!
//! - [`board`]: square grid of cells, each empty or holding one colored ball
//! - [`path`]: shortest orthogonal path between two cells (BFS)
//! - [`runs`]: same-color runs along rows, columns and both diagonals
//! - [`spawn`]: preview of the next drops and their resolution
//! - [`scoring`]: pluggable per-run score strategies
//! - [`game_state`]: the turn state machine tying everything together
//! - [`config`]: validated game settings (JSON file and environment)
//! - [`snapshot`]: read-only view for renderers and observers
//!
//! # Game Rules
//!
//! - A ball moves along a shortest path of empty cells, one cell per animation step
//! - A move that completes runs of at least `min_collapsing_line` balls clears them
//!   and scores; no new balls drop that turn
//! - Otherwise the previewed balls drop, the next preview is announced, and runs
//!   completed by the drop are cleared and scored
//! - The game ends when the board is full
//!
//! # Example
//!
//! ```
//! use lines_core::{ClickOutcome, GameConfig, GameState};
//! use lines_core::types::Pos;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//! assert_eq!(game.board().ball_count(), 5);
//!
//! // Clicking an empty cell with nothing selected does nothing.
//! let empty = game.board().empty_positions()[0];
//! assert_eq!(game.click(empty).unwrap(), ClickOutcome::Ignored);
//! assert!(game.click(Pos::new(9, 0)).is_err());
//! ```
//!
//! # Timing
//!
//! Moves are animated on a fixed timestep: call
//! [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time, or [`GameState::finish_move`](game_state::GameState::finish_move)
//! to skip the animation.

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod path;
pub mod rng;
pub mod runs;
pub mod scoring;
pub mod snapshot;
pub mod spawn;

pub use lines_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::{LinesError, Result};
pub use game_state::{Animation, ClickOutcome, GameState, Phase, StepEvent, TurnReport};
pub use path::{find_path, has_any_move};
pub use runs::{collapse_positions, find_runs, Axis, Run};
pub use scoring::{calculate_run_score, ClassicScoring, FnScoring, PerBallScoring, ScoreStrategy};
pub use snapshot::{GameSnapshot, SnapshotCell};
pub use spawn::{build_preview, resolve_preview, PreviewEntry};
