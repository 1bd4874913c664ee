//! Depth gradient lookup tables.
//!
//! Built once per screen height from a [`GradientConfig`]:
//!
//! - **Walls**: distance breakpoints `first, first*step, first*step², ...` up
//!   to `limit`. A distance belongs to the first bucket whose breakpoint it is
//!   below; anything past the last breakpoint lands in the trailing bucket.
//!   Bucket colors run linearly from `wall_near` to `wall_far`, and glyphs
//!   walk the shade ramp `█ ▓ ▒ ░`.
//! - **Background**: one precomputed shade per screen row. A row moves into
//!   the next band only when it is strictly greater than `ratio * height`, so
//!   the breakpoint row itself stays in the upper (lower-index) band. Each
//!   band has its own color and glyph, e.g. blank sky over a dotted floor.

use log::debug;
use thiserror::Error;

use crate::types::{Rgb, DEFAULT_MAX_DISTANCE};

/// Wall glyphs from nearest to farthest.
pub const SHADE_RAMP: [char; 4] = ['█', '▓', '▒', '░'];

/// Glyph used for wall hits near a grid vertex.
pub const CORNER_GLYPH: char = '▌';

/// Glyph used for background cells when no per-band glyphs are given.
pub const BACKGROUND_GLYPH: char = ' ';

/// How far a background glyph's color is lifted toward white.
const GLYPH_TINT: f64 = 0.3;

/// Validation failures when building a [`DepthSampler`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("breakpoint step must be greater than 1, got {0}")]
    StepTooSmall(f64),

    #[error("background ratio list is empty")]
    EmptyBackground,

    #[error("background ratios must be non-decreasing (index {index}: {value} < {previous})")]
    UnorderedBackground {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("expected {expected} background colors for {ratios} ratios, got {colors}")]
    ColorCountMismatch {
        ratios: usize,
        colors: usize,
        expected: usize,
    },

    #[error("expected {expected} background glyphs, got {glyphs}")]
    GlyphCountMismatch { glyphs: usize, expected: usize },
}

/// What to draw in one cell: glyph plus colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Shade {
    pub const fn new(glyph: char, fg: Rgb, bg: Rgb) -> Self {
        Self { glyph, fg, bg }
    }

    /// Background cell: `glyph` drawn slightly brighter than its `color`.
    pub fn background(glyph: char, color: Rgb) -> Self {
        Self::new(glyph, color.lerp(Rgb::new(255, 255, 255), GLYPH_TINT), color)
    }
}

/// Parameters of the wall and background gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    /// First wall distance breakpoint.
    pub first_breakpoint: f64,
    /// Multiplier between consecutive breakpoints. Must exceed 1.
    pub step: f64,
    /// Breakpoints stop once they would exceed this distance.
    pub limit: f64,
    pub wall_near: Rgb,
    pub wall_far: Rgb,
    pub wall_bg: Rgb,
    pub corner: Rgb,
    /// Row ratios (0 = top, 1 = bottom) separating background bands.
    pub background_ratios: Vec<f64>,
    /// One color per band, `background_ratios.len() + 1` in total.
    pub background_colors: Vec<Rgb>,
    /// One glyph per band. Empty means [`BACKGROUND_GLYPH`] everywhere.
    pub background_glyphs: Vec<char>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            first_breakpoint: 1.0,
            step: 1.5,
            limit: DEFAULT_MAX_DISTANCE,
            wall_near: Rgb::new(235, 235, 220),
            wall_far: Rgb::new(60, 60, 75),
            wall_bg: Rgb::new(0, 0, 0),
            corner: Rgb::new(120, 90, 60),
            background_ratios: vec![0.25, 0.5, 0.75],
            background_colors: vec![
                Rgb::new(10, 10, 35),
                Rgb::new(25, 25, 60),
                Rgb::new(45, 38, 30),
                Rgb::new(75, 62, 45),
            ],
            background_glyphs: vec![' ', ' ', '-', '.'],
        }
    }
}

impl GradientConfig {
    fn validate(&self, screen_height: u16) -> Result<(), GradientError> {
        for (name, value) in [
            ("first_breakpoint", self.first_breakpoint),
            ("step", self.step),
            ("limit", self.limit),
            ("screen_height", screen_height as f64),
        ] {
            // Written so NaN fails too.
            if !(value > 0.0) {
                return Err(GradientError::NonPositive { name, value });
            }
            if !value.is_finite() {
                return Err(GradientError::NonFinite { name, value });
            }
        }
        if !(self.step > 1.0) {
            return Err(GradientError::StepTooSmall(self.step));
        }

        if self.background_ratios.is_empty() {
            return Err(GradientError::EmptyBackground);
        }
        for (index, pair) in self.background_ratios.windows(2).enumerate() {
            if !(pair[1] >= pair[0]) {
                return Err(GradientError::UnorderedBackground {
                    index: index + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }
        let expected = self.background_ratios.len() + 1;
        if self.background_colors.len() != expected {
            return Err(GradientError::ColorCountMismatch {
                ratios: self.background_ratios.len(),
                colors: self.background_colors.len(),
                expected,
            });
        }
        if !self.background_glyphs.is_empty() && self.background_glyphs.len() != expected {
            return Err(GradientError::GlyphCountMismatch {
                glyphs: self.background_glyphs.len(),
                expected,
            });
        }
        Ok(())
    }

    /// Glyph drawn in background band `band`.
    pub fn background_glyph(&self, band: usize) -> char {
        self.background_glyphs
            .get(band)
            .copied()
            .unwrap_or(BACKGROUND_GLYPH)
    }

    /// Geometric wall breakpoints `first * step^k <= limit`.
    ///
    /// Only terminates for a finite `limit` and `step > 1`, which
    /// [`DepthSampler::new`] checks first.
    pub fn breakpoints(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut b = self.first_breakpoint;
        while b <= self.limit {
            out.push(b);
            b *= self.step;
        }
        out
    }
}

/// Immutable distance → wall shade and row → background shade tables.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthSampler {
    breakpoints: Vec<f64>,
    /// `breakpoints.len() + 1` entries; the last is the "beyond" bucket.
    wall: Vec<Shade>,
    corner: Shade,
    background: Vec<Shade>,
}

impl DepthSampler {
    /// Validate `config` and build tables for a screen `screen_height` rows tall.
    pub fn new(config: &GradientConfig, screen_height: u16) -> Result<Self, GradientError> {
        config.validate(screen_height)?;

        let breakpoints = config.breakpoints();
        let buckets = breakpoints.len() + 1;
        let wall = (0..buckets)
            .map(|i| {
                let t = if buckets > 1 {
                    i as f64 / (buckets - 1) as f64
                } else {
                    0.0
                };
                let glyph = SHADE_RAMP[i * SHADE_RAMP.len() / buckets];
                Shade::new(glyph, config.wall_near.lerp(config.wall_far, t), config.wall_bg)
            })
            .collect();

        let h = screen_height as f64;
        let mut band = 0;
        let background = (0..screen_height)
            .map(|row| {
                while band < config.background_ratios.len()
                    && row as f64 > config.background_ratios[band] * h
                {
                    band += 1;
                }
                Shade::background(
                    config.background_glyph(band),
                    config.background_colors[band],
                )
            })
            .collect();

        debug!(
            "depth sampler: {} wall buckets, {} background bands over {} rows",
            buckets,
            config.background_colors.len(),
            screen_height
        );

        Ok(Self {
            breakpoints,
            wall,
            corner: Shade::new(CORNER_GLYPH, config.corner, config.wall_bg),
            background,
        })
    }

    /// Number of rows the background table was built for.
    pub fn screen_height(&self) -> u16 {
        self.background.len() as u16
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Index of the wall bucket `distance` falls in.
    pub fn bucket_for_distance(&self, distance: f64) -> usize {
        self.breakpoints.partition_point(|&b| b <= distance)
    }

    pub fn style_for_distance(&self, distance: f64) -> Shade {
        self.wall[self.bucket_for_distance(distance)]
    }

    /// Background shade for `row`; rows past the table reuse the last band.
    pub fn style_for_row(&self, row: u16) -> Shade {
        match self.background.get(row as usize) {
            Some(shade) => *shade,
            None => self.background.last().copied().unwrap_or(self.corner),
        }
    }

    pub fn corner_style(&self) -> Shade {
        self.corner
    }
}
