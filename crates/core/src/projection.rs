//! Per-column camera math.
//!
//! Turns a screen column into a ray angle, a wall hit into a perspective
//! corrected depth, and a depth into the band of rows the wall slab covers.

use crate::types::{Angle, Point2D, CORNER_RADIUS, MIN_PROJECTION_DISTANCE};

/// Half-open band of screen rows `[start, end)` covered by a slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowRange {
    pub start: u16,
    pub end: u16,
}

impl RowRange {
    #[inline]
    pub fn contains(&self, row: u16) -> bool {
        self.start <= row && row < self.end
    }

    #[inline]
    pub fn len(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Angle of the ray drawn in `column`, sweeping the FOV left to right.
///
/// Column `width / 2` looks straight along `facing`.
pub fn ray_angle_for_column(facing: Angle, column: u16, screen_width: u16, fov: f64) -> Angle {
    if screen_width == 0 {
        return facing;
    }
    let t = column as f64 / screen_width as f64;
    facing.offset(fov * t - fov / 2.0)
}

/// Ray length projected onto the camera's forward axis.
///
/// `delta` is the ray's angular offset from the facing direction, in
/// half-turns. Without this a flat wall bows outward at the screen edges.
pub fn fish_eye_corrected_distance(origin: Point2D, impact: Point2D, delta: f64) -> f64 {
    origin.distance(impact) * Angle::new(delta).radians().cos()
}

/// Whether a wall hit lands within [`CORNER_RADIUS`] of a grid vertex.
pub fn is_wall_corner(point: Point2D) -> bool {
    let dx = point.x - point.x.round();
    let dy = point.y - point.y.round();
    dx.hypot(dy) <= CORNER_RADIUS
}

/// Rows covered by a slab `wall_height` tall seen at `distance`.
///
/// The distance is clamped to `[1, max_visibility]`, so a wall touching the
/// camera fills the whole column and one at the visibility limit is a thin
/// band around the horizon. The band is symmetric: `end = height - start`.
pub fn fill_row_range(
    distance: f64,
    wall_height: f64,
    max_visibility: f64,
    screen_height: u16,
) -> RowRange {
    let h = screen_height as f64;
    let far = max_visibility.max(MIN_PROJECTION_DISTANCE);
    let d = if distance.is_nan() {
        far
    } else {
        distance.clamp(MIN_PROJECTION_DISTANCE, far)
    };
    let start = (h / 2.0 - h * wall_height / (2.0 * d)).round().clamp(0.0, h / 2.0) as u16;
    RowRange {
        start,
        end: screen_height - start,
    }
}
