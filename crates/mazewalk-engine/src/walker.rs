//! First-person walker moved by tilt, stopped by walls.
//!
//! A step is all-or-nothing. The candidate position is tested against the
//! collision index and discarded when it overlaps a wall, so the walker stops
//! flush against walls rather than sliding along them.

use mazewalk_maze::{CollisionIndex, START_CELL, Vec3, cell_center};

use crate::config::{TiltConfig, WalkerConfig};
use crate::control::{Tilt, forward_speed};

/// Result of one simulation step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StepOutcome {
    /// Tilt inside the deadzone.
    Idle,
    Moved,
    /// The candidate position overlapped a wall and was discarded.
    Blocked,
}

#[derive(Debug, Clone)]
pub struct Walker {
    config: WalkerConfig,
    position: Vec3,
    /// Heading in degrees, as reported by the tilt `side` axis.
    heading: f32,
}

/// Unit ground-plane direction for a heading in degrees.
///
/// Heading 0 faces -Z; positive headings turn towards -X.
pub fn heading_direction(heading: f32) -> Vec3 {
    let theta = (-heading).to_radians();
    Vec3::new(theta.sin(), 0.0, -theta.cos())
}

impl Walker {
    /// Walker at the centre of the start cell, at eye height.
    pub fn at_start(cell_size: f32, config: WalkerConfig) -> Self {
        let c = cell_center(START_CELL.0, START_CELL.1, cell_size);
        Self::new(Vec3::new(c.x, config.eye_height, c.y), config)
    }

    pub fn new(position: Vec3, config: WalkerConfig) -> Self {
        Self {
            config,
            position,
            heading: 0.0,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Camera target offset; equal to the forward vector.
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        heading_direction(self.heading)
    }

    /// Advances one tick under `tilt`.
    pub fn step(&mut self, tilt: Tilt, tilt_cfg: &TiltConfig, index: &CollisionIndex<'_>) -> StepOutcome {
        self.heading = tilt.side;

        let distance = forward_speed(tilt, tilt_cfg) * self.config.max_speed;
        if distance == 0.0 {
            return StepOutcome::Idle;
        }

        let next = self.position + heading_direction(self.heading) * distance;
        if index.collides(next.xz(), self.config.collision_radius) {
            log::trace!("step to {next:?} blocked");
            return StepOutcome::Blocked;
        }

        self.position = next;
        StepOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_maze::{Grid, MazeBuilder};

    const FULL_AHEAD: Tilt = Tilt { front: -45.0, side: 0.0 };

    fn corridor() -> Grid {
        Grid::from_rows(&[
            "#####",
            "#...#",
            "#.#.#",
            "#...#",
            "#####",
        ])
        .unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── heading ───────────────────────────────────────────────────────────

    #[test]
    fn heading_zero_faces_negative_z() {
        let d = heading_direction(0.0);
        assert!(approx(d.x, 0.0) && approx(d.z, -1.0));
    }

    #[test]
    fn positive_heading_turns_left() {
        let d = heading_direction(90.0);
        assert!(approx(d.x, -1.0) && approx(d.z, 0.0));
        let d = heading_direction(180.0);
        assert!(approx(d.x, 0.0) && approx(d.z, 1.0));
    }

    #[test]
    fn look_direction_tracks_last_tilt() {
        let grid = corridor();
        let index = CollisionIndex::new(&grid, 1.0);
        let mut w = Walker::at_start(1.0, WalkerConfig::default());
        w.step(Tilt { front: 0.0, side: -90.0 }, &TiltConfig::default(), &index);
        let d = w.look_direction();
        assert!(approx(d.x, 1.0) && approx(d.y, 0.0));
    }

    // ── stepping ──────────────────────────────────────────────────────────

    #[test]
    fn starts_at_start_cell_centre() {
        let w = Walker::at_start(1.0, WalkerConfig::default());
        assert_eq!(w.position(), Vec3::new(1.5, 1.0, 1.5));
    }

    #[test]
    fn deadzone_is_idle() {
        let grid = corridor();
        let index = CollisionIndex::new(&grid, 1.0);
        let mut w = Walker::at_start(1.0, WalkerConfig::default());
        let out = w.step(Tilt { front: -10.0, side: 0.0 }, &TiltConfig::default(), &index);
        assert_eq!(out, StepOutcome::Idle);
        assert_eq!(w.position(), Vec3::new(1.5, 1.0, 1.5));
    }

    #[test]
    fn full_tilt_moves_max_speed() {
        let grid = corridor();
        let index = CollisionIndex::new(&grid, 1.0);
        let mut w = Walker::at_start(1.0, WalkerConfig::default());
        let south = Tilt { side: 180.0, ..FULL_AHEAD };
        assert_eq!(w.step(south, &TiltConfig::default(), &index), StepOutcome::Moved);
        assert!(approx(w.position().z, 1.55));
        assert!(approx(w.position().x, 1.5));
        assert_eq!(w.position().y, 1.0);
    }

    #[test]
    fn leaning_back_walks_backwards() {
        let grid = corridor();
        let index = CollisionIndex::new(&grid, 1.0);
        let mut w = Walker::at_start(1.0, WalkerConfig::default());
        let back = Tilt { front: 45.0, side: 0.0 };
        assert_eq!(w.step(back, &TiltConfig::default(), &index), StepOutcome::Moved);
        assert!(approx(w.position().z, 1.55));
    }

    #[test]
    fn walking_into_wall_stops_without_overlap() {
        let grid = corridor();
        let index = CollisionIndex::new(&grid, 1.0);
        let cfg = WalkerConfig::default();
        let mut w = Walker::at_start(1.0, cfg);

        let mut blocked = false;
        for _ in 0..40 {
            match w.step(FULL_AHEAD, &TiltConfig::default(), &index) {
                StepOutcome::Blocked => blocked = true,
                StepOutcome::Moved => assert!(!blocked, "moved again after being blocked"),
                StepOutcome::Idle => unreachable!(),
            }
            assert!(!index.collides(w.position().xz(), cfg.collision_radius));
        }
        assert!(blocked);
        assert!(w.position().z > 1.0 + cfg.collision_radius - 1e-4);
        assert!(w.position().z < 1.2);
    }

    #[test]
    fn never_enters_walls_in_generated_maze() {
        let grid = MazeBuilder::new(21, 21).seed(11).build().unwrap();
        let index = CollisionIndex::new(&grid, 1.0);
        let cfg = WalkerConfig::default();
        let mut w = Walker::at_start(1.0, cfg);

        for i in 0..2000 {
            let tilt = Tilt { front: -45.0, side: (i / 50) as f32 * 37.0 };
            w.step(tilt, &TiltConfig::default(), &index);
            assert!(!index.collides(w.position().xz(), cfg.collision_radius));
        }
    }
}
