//! Circle-vs-wall queries against the maze grid.
//!
//! The query inspects only the 3x3 cells around the position, so it is exact
//! only while per-step displacement stays well below `cell_size`. Cells outside
//! the grid count as free space: a mover that has left the grid never collides.

use crate::coords::Vec2;
use crate::grid::{Cell, Grid, cell_of};

/// A wall cell touched by a query circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact {
    /// Grid coordinates of the wall cell.
    pub cell: (usize, usize),
    /// Closest point on the cell square to the query position.
    pub closest: Vec2,
}

/// Read-only collision view over a grid.
#[derive(Debug, Copy, Clone)]
pub struct CollisionIndex<'g> {
    grid: &'g Grid,
    cell_size: f32,
}

impl<'g> CollisionIndex<'g> {
    pub fn new(grid: &'g Grid, cell_size: f32) -> Self {
        debug_assert!(cell_size > 0.0);
        Self { grid, cell_size }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Whether `position` lies inside the grid footprint.
    pub fn contains(&self, position: Vec2) -> bool {
        if !position.is_finite() {
            return false;
        }
        let (cx, cy) = cell_of(position, self.cell_size);
        self.grid.get_signed(cx, cy).is_some()
    }

    /// True when a circle of `radius` at `position` overlaps any nearby wall cell.
    #[inline]
    pub fn collides(&self, position: Vec2, radius: f32) -> bool {
        self.first_contact(position, radius).is_some()
    }

    /// First overlapping wall cell, scanning the neighbourhood row by row.
    ///
    /// Overlap is strict: a circle that only touches a wall edge is free.
    /// Non-finite positions are never in contact.
    pub fn first_contact(&self, position: Vec2, radius: f32) -> Option<Contact> {
        if !position.is_finite() {
            return None;
        }
        let (gx, gy) = cell_of(position, self.cell_size);
        let radius_sq = radius * radius;

        for dy in -1..=1 {
            for dx in -1..=1 {
                // `cell_of` saturates far coordinates at the i64 bounds.
                let (Some(cx), Some(cy)) = (gx.checked_add(dx), gy.checked_add(dy)) else {
                    continue;
                };
                if self.grid.get_signed(cx, cy) != Some(Cell::Wall) {
                    continue;
                }

                let min = Vec2::new(cx as f32 * self.cell_size, cy as f32 * self.cell_size);
                let closest = Vec2::new(
                    position.x.clamp(min.x, min.x + self.cell_size),
                    position.y.clamp(min.y, min.y + self.cell_size),
                );

                if (position - closest).length_sq() < radius_sq {
                    return Some(Contact {
                        cell: (cx as usize, cy as usize),
                        closest,
                    });
                }
            }
        }
        None
    }
}

/// One-shot form of [`CollisionIndex::collides`].
pub fn collides(grid: &Grid, cell_size: f32, position: Vec2, radius: f32) -> bool {
    CollisionIndex::new(grid, cell_size).collides(position, radius)
}
