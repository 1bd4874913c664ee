//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::MoveAction`]s. Movement
//! itself belongs to whoever owns the camera; this crate only translates keys.

pub mod map;

pub use rayterm_types as types;

pub use map::{handle_key_event, should_quit};
