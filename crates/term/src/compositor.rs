//! Compositor: turns one camera/world/sprite snapshot into screen writes.
//!
//! Each frame builds a list of [`DrawPrimitive`]s (one per screen column plus
//! one per visible sprite), sorts them far to near and paints them in that
//! order. Nearer primitives simply overwrite farther ones; there is no depth
//! buffer.
//!
//! The pass is pure apart from the [`Screen`] calls. The primitive list is
//! kept between frames so steady-state rendering does not allocate.

use anyhow::Result;
use log::trace;

use rayterm_core::types::{CameraState, SpriteState, SpriteStyle};
use rayterm_core::{
    cast_ray, fill_row_range, fish_eye_corrected_distance, is_wall_corner, project_sprite,
    ray_angle_for_column, DepthSampler, GradientError, OccupancyGrid, RenderConfig, RowRange,
    Shade,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Cell surface the compositor paints on.
pub trait Screen {
    /// `(width, height)` in cells.
    fn size(&self) -> (u16, u16);

    fn clear(&mut self);

    fn set_cell(&mut self, column: u16, row: u16, glyph: char, style: CellStyle);

    /// Make the painted frame visible.
    fn present(&mut self) -> Result<()>;
}

impl Screen for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width(), self.height())
    }

    fn clear(&mut self) {
        self.fill(Cell::default());
    }

    fn set_cell(&mut self, column: u16, row: u16, glyph: char, style: CellStyle) {
        self.set(column, row, style.into_cell(glyph));
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Background color behind sprite glyphs.
const SPRITE_BG: Rgb = Rgb::new(0, 0, 0);

/// What a primitive paints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// A whole column of background, no wall in range.
    Background { column: u16 },
    /// A whole column: wall shade inside `rows`, background elsewhere.
    Wall {
        column: u16,
        rows: RowRange,
        shade: Shade,
    },
    /// A rectangle `[start_column, end_column) x rows` in one style.
    Sprite {
        start_column: u16,
        end_column: u16,
        rows: RowRange,
        style: SpriteStyle,
    },
}

/// One depth-tagged draw operation, alive for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPrimitive {
    /// Distance from the camera; `f64::INFINITY` for pure background.
    pub depth: f64,
    /// Emission index, breaks depth ties.
    order: u32,
    pub paint: Paint,
}

impl DrawPrimitive {
    pub fn order(&self) -> u32 {
        self.order
    }
}

/// Frame compositor.
pub struct Compositor {
    config: RenderConfig,
    sampler: DepthSampler,
    primitives: Vec<DrawPrimitive>,
}

impl Compositor {
    /// Build the shade tables for a screen `screen_height` rows tall.
    ///
    /// Fails if the gradient in `config` is malformed.
    pub fn new(config: RenderConfig, screen_height: u16) -> Result<Self, GradientError> {
        let sampler = DepthSampler::new(&config.gradient, screen_height)?;
        Ok(Self {
            config,
            sampler,
            primitives: Vec::new(),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn sampler(&self) -> &DepthSampler {
        &self.sampler
    }

    /// Rebuild the background table if the screen height changed.
    pub fn resize(&mut self, screen_height: u16) -> Result<(), GradientError> {
        if screen_height != self.sampler.screen_height() {
            self.sampler = DepthSampler::new(&self.config.gradient, screen_height)?;
        }
        Ok(())
    }

    /// Primitives of the last frame in paint order.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    /// Render one frame.
    ///
    /// `camera` and `sprites` are snapshots: each value is read once and the
    /// whole frame is built from those copies. Sprites sharing the camera's
    /// id are skipped.
    pub fn render_frame<G, S>(
        &mut self,
        camera: &CameraState,
        grid: &G,
        sprites: &[SpriteState],
        screen: &mut S,
    ) -> Result<()>
    where
        G: OccupancyGrid + ?Sized,
        S: Screen + ?Sized,
    {
        let (width, height) = screen.size();
        screen.clear();
        self.primitives.clear();
        if width == 0 || height == 0 {
            return screen.present();
        }
        self.resize(height)?;
        self.primitives.reserve(width as usize + sprites.len());

        let camera = *camera;
        self.push_columns(&camera, grid, width, height);
        if self.config.sprites_enabled {
            self.push_sprites(&camera, sprites, width, height);
        }

        // Farthest first; equal depths keep emission order.
        self.primitives.sort_unstable_by(|a, b| {
            b.depth
                .total_cmp(&a.depth)
                .then_with(|| a.order.cmp(&b.order))
        });
        trace!("frame {}x{}: {} primitives", width, height, self.primitives.len());

        for primitive in &self.primitives {
            paint(&primitive.paint, &self.sampler, height, screen);
        }
        screen.present()
    }

    fn push_columns<G>(&mut self, camera: &CameraState, grid: &G, width: u16, height: u16)
    where
        G: OccupancyGrid + ?Sized,
    {
        for column in 0..width {
            let angle = ray_angle_for_column(camera.angle, column, width, camera.fov);
            let order = self.primitives.len() as u32;
            let primitive = match cast_ray(camera.position, grid, angle, camera.max_distance) {
                Some(impact) => {
                    let depth = fish_eye_corrected_distance(
                        camera.position,
                        impact,
                        angle.delta(camera.angle),
                    );
                    let rows = fill_row_range(
                        depth,
                        self.config.wall_height,
                        camera.max_distance,
                        height,
                    );
                    let shade = if is_wall_corner(impact) {
                        self.sampler.corner_style()
                    } else {
                        self.sampler.style_for_distance(depth)
                    };
                    DrawPrimitive {
                        depth,
                        order,
                        paint: Paint::Wall {
                            column,
                            rows,
                            shade,
                        },
                    }
                }
                None => DrawPrimitive {
                    depth: f64::INFINITY,
                    order,
                    paint: Paint::Background { column },
                },
            };
            self.primitives.push(primitive);
        }
    }

    fn push_sprites(&mut self, camera: &CameraState, sprites: &[SpriteState], width: u16, height: u16) {
        for sprite in sprites.iter().filter(|s| s.id != camera.id) {
            let Some(projection) = project_sprite(
                camera.position,
                camera.angle,
                camera.fov,
                sprite.position,
                sprite.size,
            ) else {
                continue;
            };

            let w = width as f64;
            let start_column = (projection.start_ratio * w).floor().clamp(0.0, w) as u16;
            let mut end_column = (projection.end_ratio * w).ceil().clamp(0.0, w) as u16;
            if end_column <= start_column {
                if start_column >= width {
                    continue;
                }
                end_column = start_column + 1;
            }

            let depth = camera.position.distance(sprite.position);
            // Billboards stand as tall as a wall at the same distance.
            let rows = fill_row_range(depth, self.config.wall_height, camera.max_distance, height);
            let order = self.primitives.len() as u32;
            self.primitives.push(DrawPrimitive {
                depth,
                order,
                paint: Paint::Sprite {
                    start_column,
                    end_column,
                    rows,
                    style: sprite.style,
                },
            });
        }
    }
}

fn paint<S: Screen + ?Sized>(paint: &Paint, sampler: &DepthSampler, height: u16, screen: &mut S) {
    match *paint {
        Paint::Background { column } => {
            for row in 0..height {
                put_shade(screen, column, row, sampler.style_for_row(row));
            }
        }
        Paint::Wall {
            column,
            rows,
            shade,
        } => {
            for row in 0..height {
                let shade = if rows.contains(row) {
                    shade
                } else {
                    sampler.style_for_row(row)
                };
                put_shade(screen, column, row, shade);
            }
        }
        Paint::Sprite {
            start_column,
            end_column,
            rows,
            style,
        } => {
            let cell_style = CellStyle {
                fg: style.color,
                bg: SPRITE_BG,
                bold: true,
            };
            for column in start_column..end_column {
                for row in rows.start..rows.end {
                    screen.set_cell(column, row, style.glyph, cell_style);
                }
            }
        }
    }
}

#[inline]
fn put_shade<S: Screen + ?Sized>(screen: &mut S, column: u16, row: u16, shade: Shade) {
    screen.set_cell(column, row, shade.glyph, CellStyle::new(shade.fg, shade.bg));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayterm_core::types::{Angle, EntityId, Point2D};
    use rayterm_core::Grid;

    fn corridor() -> Grid {
        Grid::parse("##########\n#........#\n##########")
    }

    #[test]
    fn open_world_renders_only_background() {
        let grid = Grid::new(1, 1);
        let camera = CameraState::new(EntityId(0), Point2D::new(50.0, 50.0), Angle::ZERO);
        let mut comp = Compositor::new(RenderConfig::default(), 8).unwrap();
        let mut fb = FrameBuffer::new(6, 8);
        comp.render_frame(&camera, &grid, &[], &mut fb).unwrap();

        assert_eq!(comp.primitives().len(), 6);
        assert!(comp.primitives().iter().all(|p| p.depth.is_infinite()));
        for row in 0..8 {
            let expected = comp.sampler().style_for_row(row);
            assert_eq!(fb.get(3, row).unwrap().style.bg, expected.bg);
        }
    }

    #[test]
    fn own_sprite_is_skipped() {
        let camera = CameraState::new(EntityId(1), Point2D::new(4.0, 1.5), Angle::ZERO);
        let me = SpriteState::new(
            EntityId(1),
            Point2D::new(6.0, 1.5),
            0.5,
            SpriteStyle::new('@', Rgb::new(255, 0, 0)),
        );
        let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
        let mut fb = FrameBuffer::new(20, 10);
        comp.render_frame(&camera, &corridor(), &[me], &mut fb).unwrap();
        assert!(comp
            .primitives()
            .iter()
            .all(|p| !matches!(p.paint, Paint::Sprite { .. })));
    }

    #[test]
    fn sprite_band_matches_wall_band_at_its_depth() {
        let mut grid = Grid::new(30, 3);
        grid.set(29, 1, 1);
        let camera = CameraState::new(EntityId(1), Point2D::new(1.0, 1.5), Angle::ZERO);
        let pebble = SpriteState::new(
            EntityId(2),
            Point2D::new(3.0, 1.5),
            0.25,
            SpriteStyle::new('o', Rgb::new(255, 0, 0)),
        );
        let mut comp = Compositor::new(RenderConfig::default(), 40).unwrap();
        let mut fb = FrameBuffer::new(20, 40);
        comp.render_frame(&camera, &grid, &[pebble], &mut fb).unwrap();

        let rows = comp
            .primitives()
            .iter()
            .find_map(|p| match p.paint {
                Paint::Sprite { rows, .. } => Some(rows),
                _ => None,
            })
            .expect("sprite straight ahead");
        assert_eq!(rows, fill_row_range(2.0, 1.0, 16.0, 40));
        assert_eq!((rows.start, rows.end), (10, 30));
    }

    #[test]
    fn disabled_sprites_are_not_emitted() {
        let camera = CameraState::new(EntityId(1), Point2D::new(4.0, 1.5), Angle::ZERO);
        let other = SpriteState::new(
            EntityId(2),
            Point2D::new(6.0, 1.5),
            0.5,
            SpriteStyle::new('@', Rgb::new(255, 0, 0)),
        );
        let config = RenderConfig {
            sprites_enabled: false,
            ..RenderConfig::default()
        };
        let mut comp = Compositor::new(config, 10).unwrap();
        let mut fb = FrameBuffer::new(20, 10);
        comp.render_frame(&camera, &corridor(), &[other], &mut fb).unwrap();
        assert_eq!(comp.primitives().len(), 20);
    }

    #[test]
    fn resize_rebuilds_background_table() {
        let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
        assert_eq!(comp.sampler().screen_height(), 10);
        comp.resize(24).unwrap();
        assert_eq!(comp.sampler().screen_height(), 24);
        assert!(comp.resize(0).is_err());
    }

    #[test]
    fn empty_screen_is_a_no_op() {
        let grid = corridor();
        let camera = CameraState::new(EntityId(0), Point2D::new(4.0, 1.5), Angle::ZERO);
        let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
        let mut fb = FrameBuffer::new(0, 0);
        comp.render_frame(&camera, &grid, &[], &mut fb).unwrap();
        assert!(comp.primitives().is_empty());
    }
}
