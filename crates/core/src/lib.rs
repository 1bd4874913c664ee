//! Ray-casting core - pure, deterministic, and testable
//!
//! This crate holds all the math that turns a grid world and a camera into
//! draw decisions. It has **zero dependencies** on terminals or I/O, so it is:
//!
//! - **Deterministic**: the same snapshot always yields the same output
//! - **Testable**: every stage is a plain function over values
//! - **Allocation-free per frame**: tables are built once, lookups only index
//!
//! # Module Structure
//!
//! - [`grid`]: the [`OccupancyGrid`] seam and a flat [`Grid`] implementation
//! - [`raycast`]: grid DDA ray caster returning the first wall crossing
//! - [`projection`]: column angles, fish-eye correction, corner test, row bands
//! - [`sprite`]: billboard clipping against the FOV with wraparound
//! - [`gradient`]: distance/row shade tables ([`DepthSampler`])
//! - [`config`]: [`RenderConfig`] with environment overrides
//!
//! The half-turn angle algebra lives in [`rayterm_types::angle`] and is
//! re-exported here as [`angle`].
//!
//! # Example
//!
//! ```
//! use rayterm_core::{cast_ray, Grid};
//! use rayterm_core::types::{Angle, Point2D};
//!
//! let grid = Grid::bordered(10, 10);
//! let hit = cast_ray(Point2D::new(5.0, 5.0), &grid, Angle::ZERO, 10.0).unwrap();
//! assert!(hit.approx_eq(Point2D::new(9.0, 5.0)));
//! ```

pub mod config;
pub mod gradient;
pub mod grid;
pub mod projection;
pub mod raycast;
pub mod sprite;

pub use rayterm_types as types;
pub use rayterm_types::angle;

// Re-export commonly used items for convenience
pub use config::RenderConfig;
pub use gradient::{DepthSampler, GradientConfig, GradientError, Shade};
pub use grid::{Grid, OccupancyGrid};
pub use projection::{
    fill_row_range, fish_eye_corrected_distance, is_wall_corner, ray_angle_for_column, RowRange,
};
pub use raycast::cast_ray;
pub use sprite::{project_sprite, SpriteProjection};
