//! Grid DDA ray caster
//!
//! A ray is walked from grid line to grid line. At each step the nearer of
//! the next vertical line (constant x) and the next horizontal line
//! (constant y) is taken, and the cell on the far side of that line is
//! looked up. The first occupied cell ends the walk.
//!
//! Direction signs are read off the angle itself rather than off `sin`/`cos`,
//! so the four axis-aligned angles (0, 0.5, 1, 1.5) never step along the
//! perpendicular axis and never divide by a float that is merely close to 0.

use crate::grid::OccupancyGrid;
use crate::types::{Angle, Point2D};

/// Which way the ray moves along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
    Still,
}

impl Step {
    /// x moves forward in (1.5, 2) and [0, 0.5), backward in (0.5, 1.5).
    fn along_x(angle: f64) -> Self {
        if angle == 0.5 || angle == 1.5 {
            Step::Still
        } else if angle < 0.5 || angle > 1.5 {
            Step::Forward
        } else {
            Step::Backward
        }
    }

    /// y moves forward in (0, 1), backward in (1, 2).
    fn along_y(angle: f64) -> Self {
        if angle == 0.0 || angle == 1.0 {
            Step::Still
        } else if angle < 1.0 {
            Step::Forward
        } else {
            Step::Backward
        }
    }
}

/// Walk state along one axis.
#[derive(Debug, Clone, Copy)]
struct AxisWalk {
    origin: f64,
    dir: f64,
    step: Step,
    /// Next grid line the ray will cross on this axis.
    line: f64,
}

impl AxisWalk {
    fn new(origin: f64, dir: f64, step: Step) -> Self {
        let line = match step {
            Step::Forward => origin.floor() + 1.0,
            // Standing on a line while moving backward crosses it at once.
            Step::Backward => origin.floor(),
            Step::Still => f64::INFINITY,
        };
        Self {
            origin,
            dir,
            step,
            line,
        }
    }

    /// Ray length at which the next line is crossed.
    #[inline]
    fn distance(&self) -> f64 {
        match self.step {
            Step::Still => f64::INFINITY,
            _ => (self.line - self.origin) / self.dir,
        }
    }

    /// Index of the cell entered when crossing the current line.
    #[inline]
    fn leading_cell(&self) -> i32 {
        match self.step {
            Step::Backward => self.line as i32 - 1,
            _ => self.line as i32,
        }
    }

    #[inline]
    fn advance(&mut self) {
        match self.step {
            Step::Forward => self.line += 1.0,
            Step::Backward => self.line -= 1.0,
            Step::Still => {}
        }
    }
}

/// Cast a ray and return the first wall boundary it hits.
///
/// Returns `None` when no wall is crossed within `max_distance`. A missing
/// wall is a normal outcome (open sky), not an error.
///
/// When the next vertical and horizontal crossings are equally far (the ray
/// passes exactly through a grid vertex) the vertical line is tested first.
///
/// `max_distance` bounds the walk and must be finite; a non-finite or
/// negative range casts nothing.
pub fn cast_ray<G: OccupancyGrid + ?Sized>(
    origin: Point2D,
    grid: &G,
    angle: Angle,
    max_distance: f64,
) -> Option<Point2D> {
    if !max_distance.is_finite() || max_distance < 0.0 {
        return None;
    }
    let (sin, cos) = angle.sin_cos();
    let mut xs = AxisWalk::new(origin.x, cos, Step::along_x(angle.value()));
    let mut ys = AxisWalk::new(origin.y, sin, Step::along_y(angle.value()));

    loop {
        let tx = xs.distance();
        let ty = ys.distance();
        let vertical = tx <= ty;
        let t = if vertical { tx } else { ty };
        if !t.is_finite() || t > max_distance {
            return None;
        }

        if vertical {
            let y = origin.y + sin * t;
            if grid.is_occupied(xs.leading_cell(), y.floor() as i32) {
                return Some(Point2D::new(xs.line, y));
            }
            xs.advance();
        } else {
            let x = origin.x + cos * t;
            if grid.is_occupied(x.floor() as i32, ys.leading_cell()) {
                return Some(Point2D::new(x, ys.line));
            }
            ys.advance();
        }
    }
}
