use std::time::Duration;

use anyhow::{Context, Result};
use mazewalk_maze::{
    CollisionIndex, Geometry, Grid, MazeBuilder, WallGeometry, build_ground, build_pickup_cube,
    build_wall_geometry,
};

use crate::config::WorldConfig;
use crate::control::{Tilt, TiltController};
use crate::input::{InputEvent, InputFrame, InputState};
use crate::pickups::{PickupEvent, PickupSet};
use crate::time::SimClock;
use crate::walker::{StepOutcome, Walker};

/// Summary of a batch of simulation ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub ticks: u32,
    pub moved: u32,
    pub blocked: u32,
    pub events: Vec<PickupEvent>,
}

impl TickReport {
    #[inline]
    pub fn exit_opened(&self) -> bool {
        self.events.contains(&PickupEvent::ExitOpened)
    }

    /// Folds a later report into this one.
    pub fn absorb(&mut self, later: TickReport) {
        self.ticks += later.ticks;
        self.moved += later.moved;
        self.blocked += later.blocked;
        self.events.extend(later.events);
    }
}

/// One walkthrough of one maze.
///
/// Owns the generated grid, its meshes and all simulation state. Feed it
/// input with [`handle_event`](Self::handle_event) and drive it either with
/// explicit tick counts or with frame deltas through the internal clock.
#[derive(Debug)]
pub struct MazeSession {
    config: WorldConfig,
    seed: u64,
    grid: Grid,
    walls: WallGeometry,
    ground: Geometry,
    pickup_mesh: Geometry,

    input: InputState,
    frame: InputFrame,
    tilt: TiltController,
    walker: Walker,
    pickups: PickupSet,
    clock: SimClock,
}

impl MazeSession {
    pub fn new(config: &WorldConfig) -> Result<Self> {
        let seed = match config.maze.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                log::info!("no maze seed configured; using {seed}");
                seed
            }
        };

        let (width, height) = (config.maze.width, config.maze.height);
        let grid = MazeBuilder::new(width, height)
            .seed(seed)
            .build()
            .with_context(|| format!("failed to generate {width}x{height} maze (seed {seed})"))?;

        let cell_size = config.geometry.cell_size;
        let walls = build_wall_geometry(&grid, &config.geometry);
        let ground = build_ground(&grid, cell_size);
        let pickup_mesh = build_pickup_cube(config.pickups.half_extent);

        log::info!(
            "maze {width}x{height} seed {seed}: {} walls, {} triangles",
            grid.wall_count(),
            walls.triangle_count()
        );

        Ok(Self {
            config: config.clone(),
            seed,
            walker: Walker::at_start(cell_size, config.walker),
            pickups: PickupSet::default_for(&grid, config.pickups, cell_size),
            tilt: TiltController::new(config.tilt),
            input: InputState::default(),
            frame: InputFrame::default(),
            clock: SimClock::new(&config.sim),
            grid,
            walls,
            ground,
            pickup_mesh,
        })
    }

    /// Applies one input event to the held-key state and the tilt.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.apply_event(&mut self.frame, event.clone());
        self.tilt.handle_event(&event, &self.input);
    }

    /// Runs `n` fixed ticks and clears the per-frame input record.
    ///
    /// Pickups are checked after every tick, or once at the current position
    /// when `n` is zero, so a walker standing on a key still collects it.
    pub fn run_ticks(&mut self, n: u32) -> TickReport {
        let index = CollisionIndex::new(&self.grid, self.config.geometry.cell_size);
        let tilt = self.tilt.tilt();
        let mut report = TickReport {
            ticks: n,
            ..TickReport::default()
        };

        for _ in 0..n {
            match self.walker.step(tilt, &self.config.tilt, &index) {
                StepOutcome::Moved => report.moved += 1,
                StepOutcome::Blocked => report.blocked += 1,
                StepOutcome::Idle => {}
            }
            report.events.extend(self.pickups.update(self.walker.position()));
        }
        if n == 0 {
            report.events.extend(self.pickups.update(self.walker.position()));
        }

        self.frame.clear();
        report
    }

    /// Advances the clock by a frame delta and runs the resulting ticks.
    pub fn advance(&mut self, dt: Duration) -> TickReport {
        let ticks = self.clock.advance(dt);
        self.run_ticks(ticks)
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn wall_geometry(&self) -> &WallGeometry {
        &self.walls
    }

    #[inline]
    pub fn ground_geometry(&self) -> &Geometry {
        &self.ground
    }

    #[inline]
    pub fn pickup_geometry(&self) -> &Geometry {
        &self.pickup_mesh
    }

    #[inline]
    pub fn walker(&self) -> &Walker {
        &self.walker
    }

    #[inline]
    pub fn pickups(&self) -> &PickupSet {
        &self.pickups
    }

    #[inline]
    pub fn tilt(&self) -> Tilt {
        self.tilt.tilt()
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Input transitions recorded since the last batch of ticks.
    #[inline]
    pub fn input_frame(&self) -> &InputFrame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use mazewalk_maze::{BOX_VERTICES, Vec3};

    fn seeded(seed: u64) -> WorldConfig {
        let mut c = WorldConfig::default();
        c.maze.seed = Some(seed);
        c
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn builds_default_world() {
        let s = MazeSession::new(&seeded(5)).unwrap();
        assert_eq!(s.seed(), 5);
        assert_eq!((s.grid().width(), s.grid().height()), (21, 21));
        assert_eq!(s.wall_geometry().vertex_count(), BOX_VERTICES * s.grid().wall_count());
        assert_eq!(s.ground_geometry().vertex_count(), 4);
        assert_eq!(s.pickup_geometry().vertex_count(), BOX_VERTICES);
        assert_eq!(s.walker().position(), Vec3::new(1.5, 1.0, 1.5));
        assert_eq!(s.pickups().remaining(), 2);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeSession::new(&seeded(9)).unwrap();
        let b = MazeSession::new(&seeded(9)).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn unseeded_session_records_its_seed() {
        let s = MazeSession::new(&WorldConfig::default()).unwrap();
        let again = MazeSession::new(&seeded(s.seed())).unwrap();
        assert_eq!(s.grid(), again.grid());
    }

    #[test]
    fn even_size_is_an_error() {
        let mut c = seeded(1);
        c.maze.width = 20;
        let err = MazeSession::new(&c).unwrap_err();
        assert!(format!("{err:#}").contains("20x21"));
    }

    // ── ticking ───────────────────────────────────────────────────────────

    #[test]
    fn no_input_is_idle() {
        let mut s = MazeSession::new(&seeded(2)).unwrap();
        let r = s.run_ticks(10);
        assert_eq!((r.ticks, r.moved, r.blocked), (10, 0, 0));
        assert!(r.events.is_empty());
    }

    #[test]
    fn held_arrow_moves_or_blocks_every_tick() {
        let mut s = MazeSession::new(&seeded(2)).unwrap();
        s.handle_event(InputEvent::key_pressed(Key::ArrowUp));
        let r = s.run_ticks(30);
        assert_eq!(r.moved + r.blocked, 30);
        // Facing -Z from the start cell the border wall is half a cell away.
        assert!(r.blocked > 0);
        let cs = s.config().geometry.cell_size;
        let index = CollisionIndex::new(s.grid(), cs);
        assert!(!index.collides(s.walker().position().xz(), 0.1));
    }

    #[test]
    fn frame_record_cleared_after_ticks() {
        let mut s = MazeSession::new(&seeded(2)).unwrap();
        s.handle_event(InputEvent::key_pressed(Key::ArrowLeft));
        assert!(s.input_frame().keys_pressed.contains(&Key::ArrowLeft));
        s.run_ticks(1);
        assert!(s.input_frame().keys_pressed.is_empty());
        assert_eq!(s.tilt().side, 5.0);
    }

    #[test]
    fn standing_on_keys_collects_without_moving() {
        let mut c = seeded(4);
        c.maze.width = 3;
        c.maze.height = 3;
        let mut s = MazeSession::new(&c).unwrap();
        assert_eq!(s.pickups().remaining(), 2);

        let r = s.run_ticks(0);
        assert_eq!((r.ticks, r.moved), (0, 0));
        assert_eq!(
            r.events,
            vec![PickupEvent::Collected(0), PickupEvent::Collected(1), PickupEvent::ExitOpened]
        );
        assert!(s.run_ticks(0).events.is_empty());
    }

    #[test]
    fn reports_accumulate() {
        let mut total = TickReport::default();
        total.absorb(TickReport { ticks: 2, moved: 1, blocked: 1, events: vec![PickupEvent::Collected(0)] });
        total.absorb(TickReport { ticks: 3, moved: 3, blocked: 0, events: vec![PickupEvent::ExitOpened] });
        assert_eq!((total.ticks, total.moved, total.blocked), (5, 4, 1));
        assert!(total.exit_opened());
    }

    #[test]
    fn advance_uses_fixed_ticks() {
        let mut s = MazeSession::new(&seeded(2)).unwrap();
        let r = s.advance(Duration::from_millis(50));
        assert_eq!(r.ticks, 3);
    }
}
