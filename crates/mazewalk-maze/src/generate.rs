//! Randomized depth-first maze carving.
//!
//! Carving walks odd-coordinate cells two steps at a time, opening the cell in
//! between. Direction order is shuffled uniformly at every visited cell, and the
//! walk uses an explicit stack so grid size is bounded by memory, not call depth.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Cell, Grid, START_CELL};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    fn offset(self) -> (i64, i64) {
        match self {
            Dir::North => (0, -1),
            Dir::East => (1, 0),
            Dir::South => (0, 1),
            Dir::West => (-1, 0),
        }
    }
}

/// One pending cell on the carving stack with its remaining directions.
struct Frame {
    x: usize,
    y: usize,
    dirs: [Dir; 4],
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(x: usize, y: usize, rng: &mut R) -> Self {
        let mut dirs = Dir::ALL;
        dirs.shuffle(rng);
        Self { x, y, dirs, next: 0 }
    }
}

/// Returns `Ok(())` when both sides are odd and at least 3.
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    let ok = |n: usize| n >= 3 && n % 2 == 1;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimension { width, height })
    }
}

/// Carves a perfect maze using the supplied random source.
///
/// Border cells stay walls, `START_CELL` is a path and every path cell is
/// reachable from it through exactly one route.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    validate_dimensions(width, height)?;

    let mut grid = Grid::filled(width, height, Cell::Wall);
    let (sx, sy) = START_CELL;
    grid.set(sx, sy, Cell::Path);

    let mut stack = Vec::with_capacity((width / 2) * (height / 2));
    stack.push(Frame::enter(sx, sy, rng));

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = frame.dirs.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let (dx, dy) = dir.offset();
        let (x, y) = (frame.x as i64, frame.y as i64);
        let (nx, ny) = (x + dx * 2, y + dy * 2);

        if grid.get_signed(nx, ny) != Some(Cell::Wall) {
            continue;
        }

        grid.set((x + dx) as usize, (y + dy) as usize, Cell::Path);
        grid.set(nx as usize, ny as usize, Cell::Path);
        stack.push(Frame::enter(nx as usize, ny as usize, rng));
    }

    Ok(grid)
}

/// Configures and runs maze generation.
///
/// Without a seed the carve order comes from the thread-local generator and
/// is not reproducible.
#[derive(Debug, Clone)]
pub struct MazeBuilder {
    width: usize,
    height: usize,
    seed: Option<u64>,
}

impl MazeBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, seed: None }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(&self) -> Result<Grid, MazeError> {
        let grid = match self.seed {
            Some(seed) => generate(self.width, self.height, &mut StdRng::seed_from_u64(seed))?,
            None => generate(self.width, self.height, &mut rand::thread_rng())?,
        };

        log::debug!(
            "carved {}x{} maze (seed {:?}): {} walls, {} paths",
            self.width,
            self.height,
            self.seed,
            grid.wall_count(),
            grid.path_count()
        );
        Ok(grid)
    }
}
