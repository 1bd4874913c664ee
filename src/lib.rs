//! rayterm (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, integration
//! tests and benches can write `rayterm::{core, term, input, types}`.

pub use rayterm_core as core;
pub use rayterm_input as input;
pub use rayterm_term as term;
pub use rayterm_types as types;
