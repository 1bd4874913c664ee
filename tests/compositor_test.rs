mod common;

use common::corridor;
use rayterm::core::{Grid, RenderConfig};
use rayterm::term::{CellStyle, Compositor, FrameBuffer, Paint, Screen};
use rayterm::types::{Angle, CameraState, EntityId, Point2D, Rgb, SpriteState, SpriteStyle};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear,
    Set(u16, u16, char, CellStyle),
    Present,
}

/// Screen that records every call in order.
struct RecordingScreen {
    width: u16,
    height: u16,
    calls: Vec<Call>,
}

impl RecordingScreen {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Indices of every write to `(column, row)`, with the glyph written.
    fn writes_at(&self, column: u16, row: u16) -> Vec<(usize, char)> {
        self.calls
            .iter()
            .enumerate()
            .filter_map(|(i, call)| match call {
                Call::Set(c, r, glyph, _) if *c == column && *r == row => Some((i, *glyph)),
                _ => None,
            })
            .collect()
    }
}

impl Screen for RecordingScreen {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn set_cell(&mut self, column: u16, row: u16, glyph: char, style: CellStyle) {
        self.calls.push(Call::Set(column, row, glyph, style));
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.calls.push(Call::Present);
        Ok(())
    }
}

const ME: EntityId = EntityId(1);

fn camera() -> CameraState {
    // Five cells from the east wall of the corridor, looking at it.
    CameraState::new(ME, Point2D::new(4.0, 1.5), Angle::ZERO)
}

fn guard(id: u32, x: f64) -> SpriteState {
    SpriteState::new(
        EntityId(id),
        Point2D::new(x, 1.5),
        0.5,
        SpriteStyle::new('@', Rgb::new(220, 60, 60)),
    )
}

#[test]
fn nearer_sprite_is_painted_after_the_wall_behind_it() {
    let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
    let mut screen = RecordingScreen::new(20, 10);
    comp.render_frame(&camera(), &corridor(), &[guard(2, 6.0)], &mut screen)
        .unwrap();

    // Centre column looks straight at the wall (depth 5) through the sprite (depth 2).
    let writes = screen.writes_at(10, 5);
    assert_eq!(writes.len(), 2, "{writes:?}");
    let (wall_idx, wall_glyph) = writes[0];
    let (sprite_idx, sprite_glyph) = writes[1];
    assert_ne!(wall_glyph, '@');
    assert_eq!(sprite_glyph, '@');
    assert!(sprite_idx > wall_idx);

    assert_eq!(screen.calls.first(), Some(&Call::Clear));
    assert_eq!(screen.calls.last(), Some(&Call::Present));
}

#[test]
fn primitives_are_sorted_far_to_near() {
    let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
    let mut fb = FrameBuffer::new(20, 10);
    let sprites = [guard(2, 6.0), guard(3, 7.5)];
    comp.render_frame(&camera(), &corridor(), &sprites, &mut fb)
        .unwrap();

    let prims = comp.primitives();
    assert_eq!(prims.len(), 22);
    assert!(prims.windows(2).all(|w| w[0].depth >= w[1].depth));

    let sprite_depths: Vec<f64> = prims
        .iter()
        .filter(|p| matches!(p.paint, Paint::Sprite { .. }))
        .map(|p| p.depth)
        .collect();
    assert_eq!(sprite_depths, vec![3.5, 2.0]);
}

#[test]
fn background_columns_are_painted_first() {
    // A lone pillar in open space: most columns see nothing.
    let mut grid = Grid::new(30, 30);
    grid.set(20, 15, 1);
    let cam = CameraState::new(ME, Point2D::new(15.5, 15.5), Angle::ZERO);

    let mut comp = Compositor::new(RenderConfig::default(), 12).unwrap();
    let mut fb = FrameBuffer::new(40, 12);
    comp.render_frame(&cam, &grid, &[], &mut fb).unwrap();

    let prims = comp.primitives();
    let first_wall = prims
        .iter()
        .position(|p| matches!(p.paint, Paint::Wall { .. }))
        .expect("the pillar is in view");
    assert!(first_wall > 0);
    assert!(prims[..first_wall].iter().all(|p| p.depth.is_infinite()));
    assert!(prims[first_wall..].iter().all(|p| p.depth.is_finite()));
    // Equal depths keep column order.
    assert!(prims[..first_wall]
        .windows(2)
        .all(|w| w[0].order() < w[1].order()));
}

#[test]
fn every_cell_is_written_every_frame() {
    let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
    let mut screen = RecordingScreen::new(20, 10);
    comp.render_frame(&camera(), &corridor(), &[], &mut screen)
        .unwrap();
    for column in 0..20 {
        for row in 0..10 {
            assert_eq!(screen.writes_at(column, row).len(), 1, "({column}, {row})");
        }
    }
}

#[test]
fn framebuffer_shows_sprite_over_wall() {
    let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
    let mut fb = FrameBuffer::new(20, 10);
    comp.render_frame(&camera(), &corridor(), &[guard(2, 6.0)], &mut fb)
        .unwrap();
    // Sprite at depth 2 spans rows 3..7; sky is blank, the floor dashed then dotted.
    assert_eq!(fb.column_text(10), "   @@@@-..");
}

#[test]
fn wall_band_matches_depth() {
    let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
    let mut fb = FrameBuffer::new(20, 10);
    comp.render_frame(&camera(), &corridor(), &[], &mut fb).unwrap();

    let centre = comp
        .primitives()
        .iter()
        .find_map(|p| match p.paint {
            Paint::Wall { column: 10, rows, .. } => Some((p.depth, rows)),
            _ => None,
        })
        .expect("centre column hits the east wall");
    assert!((centre.0 - 5.0).abs() < 1e-9);
    assert_eq!((centre.1.start, centre.1.end), (4, 6));

    let wall = comp.sampler().style_for_distance(5.0);
    assert_eq!(fb.get(10, 4).unwrap().ch, wall.glyph);
    assert_eq!(fb.get(10, 5).unwrap().style.fg, wall.fg);
}

#[test]
fn same_snapshot_renders_identically() {
    let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
    let sprites = [guard(2, 6.0), guard(3, 7.5), guard(ME.0, 5.0)];

    let mut first = RecordingScreen::new(20, 10);
    comp.render_frame(&camera(), &corridor(), &sprites, &mut first)
        .unwrap();
    let mut second = RecordingScreen::new(20, 10);
    comp.render_frame(&camera(), &corridor(), &sprites, &mut second)
        .unwrap();

    assert_eq!(first.calls, second.calls);
}

#[test]
fn screen_height_change_is_followed() {
    let mut comp = Compositor::new(RenderConfig::default(), 10).unwrap();
    let mut fb = FrameBuffer::new(20, 16);
    comp.render_frame(&camera(), &corridor(), &[], &mut fb).unwrap();
    assert_eq!(comp.sampler().screen_height(), 16);
}
