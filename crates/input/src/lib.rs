//! Terminal input module.
//!
//! Independent of any rendering code. It maps `crossterm` key events into
//! [`crate::types::UiAction`] and tracks the board cursor those actions move.

pub mod cursor;
pub mod map;

pub use lines_types as types;

pub use cursor::Cursor;
pub use map::{map_key, should_quit};
