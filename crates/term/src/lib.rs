//! Terminal rendering layer.
//!
//! Paints the ray-cast view into a simple character-cell framebuffer that can
//! be flushed to a terminal backend. No widget toolkit, no layout: one cell
//! per ray column and row.
//!
//! - [`fb`]: cells, styles and the [`FrameBuffer`]
//! - [`compositor`]: the [`Screen`] seam and the per-frame [`Compositor`]
//! - [`renderer`]: crossterm output with run-length diffing

pub mod compositor;
pub mod fb;
pub mod renderer;

pub use rayterm_core as core;
pub use rayterm_core::types;

pub use compositor::{Compositor, DrawPrimitive, Paint, Screen};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalScreen};
