//! Lines (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share a single import path.

pub use lines_core as core;
pub use lines_input as input;
pub use lines_term as term;
pub use lines_types as types;
