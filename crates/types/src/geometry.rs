//! World-space points.

use crate::{Angle, EPSILON};

/// A point in world coordinates. One grid cell is one unit wide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Equality within [`EPSILON`] on each axis.
    ///
    /// Absorbs the float error a ray picks up when it lands on a grid line.
    pub fn approx_eq(self, other: Point2D) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }

    /// Bearing from `self` towards `other`.
    pub fn bearing_to(self, other: Point2D) -> Angle {
        Angle::from_radians((other.y - self.y).atan2(other.x - self.x))
    }

    /// The point `distance` units away along `angle`.
    pub fn advance(self, angle: Angle, distance: f64) -> Point2D {
        let (sin, cos) = angle.sin_cos();
        Point2D::new(self.x + cos * distance, self.y + sin * distance)
    }

    /// Integer cell containing this point.
    pub fn cell(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}
