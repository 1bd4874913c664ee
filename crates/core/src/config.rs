//! Renderer configuration.
//!
//! Defaults can be overridden through environment variables:
//!
//! - `RAYTERM_FOV`: field of view in half-turns (default 0.4)
//! - `RAYTERM_MAX_DISTANCE`: visibility limit in grid units (default 16)
//! - `RAYTERM_WALL_HEIGHT`: wall slab height (default 1.0)
//! - `RAYTERM_TICK_MS`: frame interval of the demo loop (default 33)
//! - `RAYTERM_DISABLE_SPRITES`: set to "1" or "true" to skip the sprite pass

use std::str::FromStr;

use log::{info, warn};

use crate::gradient::GradientConfig;
use crate::types::{
    Angle, CameraState, EntityId, Point2D, DEFAULT_FOV, DEFAULT_MAX_DISTANCE, DEFAULT_WALL_HEIGHT,
    TICK_MS,
};

/// Everything the compositor and the demo loop need to know up front.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub fov: f64,
    pub max_distance: f64,
    pub wall_height: f64,
    pub tick_ms: u32,
    pub sprites_enabled: bool,
    pub gradient: GradientConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            max_distance: DEFAULT_MAX_DISTANCE,
            wall_height: DEFAULT_WALL_HEIGHT,
            tick_ms: TICK_MS,
            sprites_enabled: true,
            gradient: GradientConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let fov = parse_or(&lookup, "RAYTERM_FOV", defaults.fov);
        let max_distance = parse_or(&lookup, "RAYTERM_MAX_DISTANCE", defaults.max_distance);
        let wall_height = parse_or(&lookup, "RAYTERM_WALL_HEIGHT", defaults.wall_height);
        let tick_ms = parse_or(&lookup, "RAYTERM_TICK_MS", defaults.tick_ms).max(1);
        let sprites_enabled = !lookup("RAYTERM_DISABLE_SPRITES")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        // Keep the wall gradient spanning the whole visible range.
        let gradient = GradientConfig {
            limit: max_distance,
            ..defaults.gradient
        };

        Self {
            fov,
            max_distance,
            wall_height,
            tick_ms,
            sprites_enabled,
            gradient,
        }
    }

    /// Camera snapshot using this config's FOV and visibility limit.
    pub fn camera(&self, id: EntityId, position: Point2D, angle: Angle) -> CameraState {
        CameraState::new(id, position, angle)
            .with_fov(self.fov)
            .with_max_distance(self.max_distance)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => {
                info!("{key}={value}");
                value
            }
            Err(_) => {
                warn!("ignoring unparsable {key}={raw:?}, using {default}");
                default
            }
        },
    }
}
