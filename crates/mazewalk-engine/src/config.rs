//! Walkthrough configuration.
//!
//! Defaults describe a 21x21 maze of unit cells with 8-unit walls, a
//! 0.1-radius walker moving at most 0.05 units per tick, and a 15..45 degree
//! tilt band.

use std::time::Duration;

use anyhow::{Context, Result};
use mazewalk_maze::GeometryParams;

/// Environment variable holding the maze seed (`u64`).
pub const ENV_SEED: &str = "MAZEWALK_SEED";
/// Environment variable holding the side length of a square maze.
pub const ENV_SIZE: &str = "MAZEWALK_SIZE";

/// Maze dimensions and carve seed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeParams {
    pub width: usize,
    pub height: usize,
    /// `None` draws a fresh seed at session start.
    pub seed: Option<u64>,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            seed: None,
        }
    }
}

/// Walker body and speed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WalkerConfig {
    /// Camera height above the ground.
    pub eye_height: f32,
    /// Radius of the collision circle on the ground plane.
    pub collision_radius: f32,
    /// Displacement per tick at full forward speed. Keep well below the cell size.
    pub max_speed: f32,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            eye_height: 1.0,
            collision_radius: 0.1,
            max_speed: 0.05,
        }
    }
}

/// Tilt-to-speed mapping and keyboard emulation, all in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TiltConfig {
    /// Forward tilt below this magnitude does not move the walker.
    pub deadzone: f32,
    /// Forward tilt that maps to full speed.
    pub max_speed_angle: f32,
    /// Tilt reported while an up/down arrow is held.
    pub keyboard_tilt: f32,
    /// Heading change per left/right arrow press.
    pub turn_step: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            deadzone: 15.0,
            max_speed_angle: 45.0,
            keyboard_tilt: 25.0,
            turn_step: 5.0,
        }
    }
}

/// Pickup placement and reach.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickupConfig {
    /// Horizontal distance at which a pickup is collected.
    pub radius: f32,
    /// Height of the pickup centre.
    pub height: f32,
    /// Half the edge length of the pickup cube mesh.
    pub half_extent: f32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            half_extent: 0.3,
        }
    }
}

/// Fixed-step simulation timing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimConfig {
    pub tick: Duration,
    pub max_ticks_per_frame: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_nanos(1_000_000_000 / 60),
            max_ticks_per_frame: 8,
        }
    }
}

/// Everything needed to start a walkthrough session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldConfig {
    pub maze: MazeParams,
    pub geometry: GeometryParams,
    pub walker: WalkerConfig,
    pub tilt: TiltConfig,
    pub pickups: PickupConfig,
    pub sim: SimConfig,
}

impl WorldConfig {
    /// Defaults overridden by `MAZEWALK_SEED` / `MAZEWALK_SIZE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{ENV_SEED}={raw:?} is not an unsigned integer"))?;
            config.maze.seed = Some(seed);
        }

        if let Some(raw) = lookup(ENV_SIZE) {
            let size = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{ENV_SIZE}={raw:?} is not an unsigned integer"))?;
            if size % 2 == 0 {
                log::warn!("{ENV_SIZE}={size} is even; maze generation will reject it");
            }
            config.maze.width = size;
            config.maze.height = size;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn default_world_values() {
        let c = WorldConfig::default();
        assert_eq!((c.maze.width, c.maze.height), (21, 21));
        assert_eq!(c.geometry.cell_size, 1.0);
        assert_eq!(c.geometry.wall_height, 8.0);
        assert_eq!(c.walker.collision_radius, 0.1);
        assert_eq!(c.walker.max_speed, 0.05);
        assert_eq!(c.tilt.deadzone, 15.0);
        assert_eq!(c.pickups.radius, 0.5);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let c = WorldConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(c, WorldConfig::default());
    }

    #[test]
    fn seed_and_size_overrides() {
        let c = WorldConfig::from_lookup(lookup(&[(ENV_SEED, " 42 "), (ENV_SIZE, "31")])).unwrap();
        assert_eq!(c.maze.seed, Some(42));
        assert_eq!((c.maze.width, c.maze.height), (31, 31));
    }

    #[test]
    fn bad_seed_reports_variable() {
        let err = WorldConfig::from_lookup(lookup(&[(ENV_SEED, "abc")])).unwrap_err();
        assert!(err.to_string().contains(ENV_SEED));
    }

    #[test]
    fn even_size_passes_through_for_generation_to_reject() {
        let c = WorldConfig::from_lookup(lookup(&[(ENV_SIZE, "20")])).unwrap();
        assert_eq!(c.maze.width, 20);
    }
}
