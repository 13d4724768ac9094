//! Terminal renderer for Lines.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout libraries
//! and instead renders into a framebuffer that is diffed and flushed to the
//! terminal.
//!
//! - [`GameView`] turns a snapshot into glyphs (pure, testable)
//! - [`TerminalRenderer`] owns the terminal and writes changed glyphs

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use lines_core as core;
pub use lines_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
