//! Billboard visibility under FOV clipping.
//!
//! A sprite covers the angular window `[bearing - w, bearing + w]` where
//! `w = atan(size / distance)`. That window is intersected with the camera's
//! `[facing - fov/2, facing + fov/2]` window; both may wrap past zero, so all
//! membership tests go through [`Angle::is_between_clockwise`] and all spans
//! through [`Angle::span_to`].

use crate::types::{Angle, Point2D};

/// Screen placement of a visible sprite.
///
/// Ratios are fractions of the screen width (0 = left edge, 1 = right edge).
/// Offsets are fractions of the sprite's own width showing at those edges,
/// so an unclipped sprite has offsets 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteProjection {
    pub start_ratio: f64,
    pub start_offset: f64,
    pub end_ratio: f64,
    pub end_offset: f64,
}

/// Project a sprite of diameter `sprite_size` at `sprite_pos` into the view.
///
/// Returns `None` when no part of it falls inside the FOV, when the camera
/// stands on the sprite's centre, or when both sprite edges are inside the
/// FOV but the window between them runs the other way round (the sprite wraps
/// the blind spot behind the camera).
pub fn project_sprite(
    camera_pos: Point2D,
    camera_angle: Angle,
    fov: f64,
    sprite_pos: Point2D,
    sprite_size: f64,
) -> Option<SpriteProjection> {
    let distance = camera_pos.distance(sprite_pos);
    if distance <= f64::EPSILON || fov <= 0.0 {
        return None;
    }

    let bearing = camera_pos.bearing_to(sprite_pos);
    let half_width = Angle::from_radians((sprite_size / distance).atan()).value();
    let sprite_start = bearing.offset(-half_width);
    let sprite_end = bearing.offset(half_width);
    let sprite_span = sprite_start.span_to(sprite_end);
    if sprite_span <= 0.0 {
        return None;
    }

    let fov_start = camera_angle.offset(-fov / 2.0);
    let fov_end = camera_angle.offset(fov / 2.0);
    let screen_ratio = |a: Angle| fov_start.span_to(a) / fov;
    let texture_offset = |a: Angle| sprite_start.span_to(a) / sprite_span;

    let start_in = sprite_start.is_between_clockwise(fov_start, fov_end);
    let end_in = sprite_end.is_between_clockwise(fov_start, fov_end);

    match (start_in, end_in) {
        (true, true) => {
            let start_ratio = screen_ratio(sprite_start);
            let end_ratio = screen_ratio(sprite_end);
            if start_ratio > end_ratio {
                return None;
            }
            Some(SpriteProjection {
                start_ratio,
                start_offset: 0.0,
                end_ratio,
                end_offset: 1.0,
            })
        }
        (true, false) => Some(SpriteProjection {
            start_ratio: screen_ratio(sprite_start),
            start_offset: 0.0,
            end_ratio: 1.0,
            end_offset: texture_offset(fov_end),
        }),
        (false, true) => Some(SpriteProjection {
            start_ratio: 0.0,
            start_offset: texture_offset(fov_start),
            end_ratio: screen_ratio(sprite_end),
            end_offset: 1.0,
        }),
        (false, false) => {
            // Wider than the FOV and straddling the view direction: fills it.
            if !camera_angle.is_between_clockwise(sprite_start, sprite_end) {
                return None;
            }
            Some(SpriteProjection {
                start_ratio: 0.0,
                start_offset: texture_offset(fov_start),
                end_ratio: 1.0,
                end_offset: texture_offset(fov_end),
            })
        }
    }
}
