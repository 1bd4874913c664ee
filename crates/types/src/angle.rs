//! Half-turn angle algebra.
//!
//! Every angle in the renderer is a fraction of a half turn kept in `[0, 2)`.
//! [`normalize`] and [`is_between_clockwise`] are the only two primitives the
//! FOV clipping needs; everything else builds on them.

use std::f64::consts::PI;

/// One full turn in half-turn units.
pub const FULL_TURN: f64 = 2.0;

/// Bring any finite angle into `[0, 2)`.
///
/// Idempotent: values already in range come back bit-for-bit unchanged.
pub fn normalize(angle: f64) -> f64 {
    if (0.0..FULL_TURN).contains(&angle) {
        return angle;
    }
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negatives up to exactly 2.0
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Whether `probe` lies on the clockwise arc running from `start` to `end`.
///
/// Both ends are inclusive. When `start > end` the arc wraps past zero.
pub fn is_between_clockwise(start: f64, end: f64, probe: f64) -> bool {
    if start <= end {
        start <= probe && probe <= end
    } else {
        probe >= start || probe <= end
    }
}

/// A normalized half-turn angle.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    /// Facing +y.
    pub const QUARTER: Angle = Angle(0.5);
    pub const HALF: Angle = Angle(1.0);
    /// Facing -y.
    pub const THREE_QUARTERS: Angle = Angle(1.5);

    pub fn new(half_turns: f64) -> Self {
        Angle(normalize(half_turns))
    }

    pub fn from_radians(radians: f64) -> Self {
        Angle::new(radians / PI)
    }

    /// Raw half-turn value in `[0, 2)`.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The single conversion point to radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0 * PI
    }

    /// `(sin, cos)` of this angle.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.radians().sin_cos()
    }

    /// This angle rotated by `delta` half-turns, renormalized.
    #[inline]
    pub fn offset(self, delta: f64) -> Angle {
        Angle::new(self.0 + delta)
    }

    /// Clockwise distance from `self` to `end`, always in `[0, 2)`.
    #[inline]
    pub fn span_to(self, end: Angle) -> f64 {
        normalize(end.0 - self.0)
    }

    /// Signed shortest difference `self - other`, in `[-1, 1)`.
    pub fn delta(self, other: Angle) -> f64 {
        let d = normalize(self.0 - other.0);
        if d >= 1.0 {
            d - FULL_TURN
        } else {
            d
        }
    }

    /// Whether `self` lies on the clockwise arc from `start` to `end`.
    #[inline]
    pub fn is_between_clockwise(self, start: Angle, end: Angle) -> bool {
        is_between_clockwise(start.0, end.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_range() {
        let cases = [
            (0.0, 0.0),
            (1.5, 1.5),
            (2.0, 0.0),
            (2.25, 0.25),
            (-0.5, 1.5),
            (-2.0, 0.0),
            (7.0, 1.0),
            (-7.25, 0.75),
        ];
        for (input, expected) in cases {
            assert!(
                (normalize(input) - expected).abs() < 1e-12,
                "normalize({input}) = {}",
                normalize(input)
            );
        }
    }

    #[test]
    fn normalize_is_idempotent_and_in_range() {
        let mut a = -50.0;
        while a < 50.0 {
            let n = normalize(a);
            assert!((0.0..2.0).contains(&n), "normalize({a}) = {n}");
            assert_eq!(normalize(n), n);
            a += 0.0137;
        }
        let tiny = normalize(-1e-17);
        assert!((0.0..2.0).contains(&tiny));
    }

    #[test]
    fn between_clockwise_plain_arc() {
        assert!(is_between_clockwise(0.2, 0.6, 0.2));
        assert!(is_between_clockwise(0.2, 0.6, 0.4));
        assert!(is_between_clockwise(0.2, 0.6, 0.6));
        assert!(!is_between_clockwise(0.2, 0.6, 0.7));
        assert!(!is_between_clockwise(0.2, 0.6, 1.9));
    }

    #[test]
    fn between_clockwise_wrapping_arc() {
        assert!(is_between_clockwise(1.8, 0.2, 1.9));
        assert!(is_between_clockwise(1.8, 0.2, 0.0));
        assert!(is_between_clockwise(1.8, 0.2, 0.1));
        assert!(!is_between_clockwise(1.8, 0.2, 0.3));
        assert!(!is_between_clockwise(1.8, 0.2, 1.0));
    }

    #[test]
    fn span_and_delta() {
        let a = Angle::new(1.9);
        let b = Angle::new(0.1);
        assert!((a.span_to(b) - 0.2).abs() < 1e-12);
        assert!((b.span_to(a) - 1.8).abs() < 1e-12);
        assert!((b.delta(a) - 0.2).abs() < 1e-12);
        assert!((a.delta(b) + 0.2).abs() < 1e-12);
    }

    #[test]
    fn radians_conversion() {
        assert!((Angle::HALF.radians() - PI).abs() < 1e-12);
        assert!((Angle::from_radians(PI / 2.0).value() - 0.5).abs() < 1e-12);
        assert!((Angle::from_radians(-PI / 2.0).value() - 1.5).abs() < 1e-12);
    }
}
