//! Terminal ray-caster demo (default binary).
//!
//! Walks a camera around a built-in map. Uses crossterm for input and the
//! framebuffer compositor for output.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use rayterm::core::{Grid, OccupancyGrid, RenderConfig};
use rayterm::input::{handle_key_event, should_quit};
use rayterm::term::{Compositor, TerminalScreen};
use rayterm::types::{
    Angle, CameraState, EntityId, MoveAction, Point2D, Rgb, SpriteState, SpriteStyle,
};

const MAP: &str = "\
################
#..............#
#..##.....#....#
#..##.....#....#
#.........#....#
#......#####...#
#..............#
#...#......#...#
#...#......#...#
################";

const PLAYER: EntityId = EntityId(0);

/// Grid units per forward/strafe key press.
const MOVE_STEP: f64 = 0.15;
/// Half-turns per turn key press.
const TURN_STEP: f64 = 0.03;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = RenderConfig::from_env();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut screen = TerminalScreen::new(w, h);
    screen.enter()?;

    let result = run(&mut screen, config, h);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen, config: RenderConfig, height: u16) -> Result<()> {
    let grid = Grid::parse(MAP);
    let sprites = demo_sprites();
    let mut camera = config.camera(PLAYER, Point2D::new(2.5, 1.5), Angle::new(0.1));
    let tick = Duration::from_millis(config.tick_ms as u64);
    let mut compositor = Compositor::new(config, height)?;
    info!("map {}x{}, {} sprites", grid.width(), grid.height(), sprites.len());

    let mut last_frame = Instant::now();
    loop {
        compositor.render_frame(&camera, &grid, &sprites, screen)?;

        let timeout = tick
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        camera = apply_move(camera, action, &grid);
                    }
                }
                Event::Resize(w, h) => screen.resize(w, h),
                _ => {}
            }
        }

        if last_frame.elapsed() >= tick {
            last_frame = Instant::now();
        }
    }
}

fn demo_sprites() -> Vec<SpriteState> {
    let guard = SpriteStyle::new('@', Rgb::new(220, 80, 80));
    let barrel = SpriteStyle::new('0', Rgb::new(200, 160, 60));
    let orb = SpriteStyle::new('*', Rgb::new(90, 200, 240));
    vec![
        SpriteState::new(EntityId(1), Point2D::new(7.5, 1.5), 0.6, guard),
        SpriteState::new(EntityId(2), Point2D::new(6.5, 4.5), 0.4, barrel),
        SpriteState::new(EntityId(3), Point2D::new(13.5, 7.5), 0.6, guard),
        SpriteState::new(EntityId(4), Point2D::new(2.5, 7.5), 0.2, orb),
    ]
}

/// Apply one key press to the camera, refusing to step into walls.
fn apply_move<G: OccupancyGrid>(camera: CameraState, action: MoveAction, grid: &G) -> CameraState {
    let (heading, distance) = match action {
        MoveAction::Forward => (camera.angle, MOVE_STEP),
        MoveAction::Backward => (camera.angle, -MOVE_STEP),
        MoveAction::StrafeLeft => (camera.angle.offset(-0.5), MOVE_STEP),
        MoveAction::StrafeRight => (camera.angle.offset(0.5), MOVE_STEP),
        MoveAction::TurnLeft => {
            return CameraState {
                angle: camera.angle.offset(-TURN_STEP),
                ..camera
            }
        }
        MoveAction::TurnRight => {
            return CameraState {
                angle: camera.angle.offset(TURN_STEP),
                ..camera
            }
        }
    };

    let next = camera.position.advance(heading, distance);
    let (x, y) = next.cell();
    if grid.is_occupied(x, y) {
        camera
    } else {
        CameraState {
            position: next,
            ..camera
        }
    }
}
