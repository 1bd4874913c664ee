//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental values passed between the ray caster,
//! the projection math and the terminal compositor. All types are plain data
//! with no external dependencies, so they can be used from core logic, the
//! terminal layer and tests alike.
//!
//! # Angle convention
//!
//! Angles are **half-turn fractions** in `[0, 2)`: `1.0` is π radians, `0.5`
//! points along +y (map rows grow downward). The conversion to radians happens
//! in exactly one place, [`Angle::radians`].
//!
//! # Default Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `EPSILON` | 1e-3 | Tolerance for point comparisons at grid boundaries |
//! | `DEFAULT_FOV` | 0.4 | Field of view (72°) |
//! | `DEFAULT_MAX_DISTANCE` | 16.0 | Visibility limit in grid units |
//! | `DEFAULT_WALL_HEIGHT` | 1.0 | Wall slab height used by the row projection |
//! | `MIN_PROJECTION_DISTANCE` | 1.0 | Distances are clamped to this before projecting |
//! | `CORNER_RADIUS` | 0.1 | Max distance to a grid vertex to count as a corner |
//! | `TICK_MS` | 33 | Frame interval of the demo loop (~30 FPS) |
//!
//! # Examples
//!
//! ```
//! use rayterm_types::{Angle, MoveAction, Point2D};
//!
//! let a = Angle::new(2.25);
//! assert!((a.value() - 0.25).abs() < 1e-12);
//!
//! let p = Point2D::new(3.0, 4.0);
//! assert!((p.distance(Point2D::ORIGIN) - 5.0).abs() < 1e-12);
//!
//! assert_eq!(MoveAction::from_str("turnLeft"), Some(MoveAction::TurnLeft));
//! ```

pub mod angle;
pub mod geometry;

pub use angle::{is_between_clockwise, normalize, Angle};
pub use geometry::Point2D;

/// Tolerance used by [`Point2D::approx_eq`].
pub const EPSILON: f64 = 1e-3;

/// Default field of view in half-turns (72°).
pub const DEFAULT_FOV: f64 = 0.4;

/// Default maximum visibility distance in grid units.
pub const DEFAULT_MAX_DISTANCE: f64 = 16.0;

/// Default height of a wall slab, in grid units.
pub const DEFAULT_WALL_HEIGHT: f64 = 1.0;

/// Distances below this are clamped before projecting onto screen rows.
pub const MIN_PROJECTION_DISTANCE: f64 = 1.0;

/// Radius around a grid vertex inside which a wall hit counts as a corner.
pub const CORNER_RADIUS: f64 = 0.1;

/// Demo frame interval in milliseconds.
pub const TICK_MS: u32 = 33;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`.
    ///
    /// Works per channel in both directions, so `start > end` fades downward.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Identity of an actor in the world (the camera owner or any sprite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Per-frame snapshot of the viewpoint.
///
/// The renderer only ever reads a copy of this, taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Identity of the actor the camera is attached to.
    pub id: EntityId,
    pub position: Point2D,
    pub angle: Angle,
    /// Field of view width in half-turns.
    pub fov: f64,
    /// Rays stop after this many grid units.
    pub max_distance: f64,
}

impl CameraState {
    pub fn new(id: EntityId, position: Point2D, angle: Angle) -> Self {
        Self {
            id,
            position,
            angle,
            fov: DEFAULT_FOV,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }
}

/// How a sprite is drawn: one glyph in one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteStyle {
    pub glyph: char,
    pub color: Rgb,
}

impl SpriteStyle {
    pub const fn new(glyph: char, color: Rgb) -> Self {
        Self { glyph, color }
    }
}

/// Per-frame snapshot of an actor or projectile drawn as a billboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteState {
    pub id: EntityId,
    pub position: Point2D,
    /// World-space diameter.
    pub size: f64,
    pub style: SpriteStyle,
}

impl SpriteState {
    pub fn new(id: EntityId, position: Point2D, size: f64, style: SpriteStyle) -> Self {
        Self {
            id,
            position,
            size,
            style,
        }
    }
}

/// Camera movement requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
}

impl MoveAction {
    /// Parse a move action from its camelCase name.
    ///
    /// ```
    /// use rayterm_types::MoveAction;
    ///
    /// assert_eq!(MoveAction::from_str("forward"), Some(MoveAction::Forward));
    /// assert_eq!(MoveAction::from_str("strafeRight"), Some(MoveAction::StrafeRight));
    /// assert_eq!(MoveAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "forward" => Some(MoveAction::Forward),
            "backward" => Some(MoveAction::Backward),
            "strafeLeft" => Some(MoveAction::StrafeLeft),
            "strafeRight" => Some(MoveAction::StrafeRight),
            "turnLeft" => Some(MoveAction::TurnLeft),
            "turnRight" => Some(MoveAction::TurnRight),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveAction::Forward => "forward",
            MoveAction::Backward => "backward",
            MoveAction::StrafeLeft => "strafeLeft",
            MoveAction::StrafeRight => "strafeRight",
            MoveAction::TurnLeft => "turnLeft",
            MoveAction::TurnRight => "turnRight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_action_names_round_trip() {
        for action in [
            MoveAction::Forward,
            MoveAction::Backward,
            MoveAction::StrafeLeft,
            MoveAction::StrafeRight,
            MoveAction::TurnLeft,
            MoveAction::TurnRight,
        ] {
            assert_eq!(MoveAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn rgb_lerp_handles_descending_channels() {
        let a = Rgb::new(200, 0, 100);
        let b = Rgb::new(0, 200, 100);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 100, 100));
    }

    #[test]
    fn camera_defaults() {
        let cam = CameraState::new(EntityId(1), Point2D::new(1.5, 1.5), Angle::ZERO);
        assert_eq!(cam.fov, DEFAULT_FOV);
        assert_eq!(cam.max_distance, DEFAULT_MAX_DISTANCE);
        let cam = cam.with_fov(0.5).with_max_distance(4.0);
        assert_eq!(cam.fov, 0.5);
        assert_eq!(cam.max_distance, 4.0);
    }
}
