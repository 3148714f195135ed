//! Maze generation, wall geometry and grid collision for **mazewalk**.
//!
//! This crate carries no GPU or windowing dependencies so tools and tests can
//! generate and inspect mazes headless.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`grid`] | `Grid`, `Cell`, world/cell mapping |
//! | [`generate`] | `MazeBuilder`, `generate` (randomized depth-first carving) |
//! | [`geometry`] | `Geometry` / `WallGeometry`, ground and pickup meshes |
//! | [`collision`] | `CollisionIndex`, `collides` |
//! | [`coords`] | `Vec2`, `Vec3` |
//! | [`error`] | `MazeError` |
//!
//! # Quick start
//!
//! ```rust
//! use mazewalk_maze::{CollisionIndex, GeometryParams, MazeBuilder, Vec2, build_wall_geometry};
//!
//! let grid = MazeBuilder::new(21, 21).seed(7).build().unwrap();
//! let walls = build_wall_geometry(&grid, &GeometryParams::default());
//! assert_eq!(walls.vertex_count(), 24 * grid.wall_count());
//!
//! let index = CollisionIndex::new(&grid, 1.0);
//! assert!(index.collides(Vec2::new(0.5, 0.5), 0.1));
//! assert!(!index.collides(Vec2::new(1.5, 1.5), 0.1));
//! ```

pub mod collision;
pub mod coords;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod grid;

pub use collision::{CollisionIndex, Contact, collides};
pub use coords::{Vec2, Vec3};
pub use error::MazeError;
pub use generate::{MazeBuilder, generate, validate_dimensions};
pub use geometry::{
    BOX_INDICES, BOX_VERTICES, Geometry, GeometryParams, WallGeometry, build_ground,
    build_pickup_cube, build_wall_geometry,
};
pub use grid::{Cell, Grid, START_CELL, cell_center, cell_of};
