//! Triangle-mesh generation for maze walls, the ground plane and pickups.
//!
//! Every wall cell becomes its own closed box: 6 faces x 4 unshared vertices so
//! each face keeps a flat outward normal. Adjacent boxes are not merged and
//! interior faces are not culled.

use crate::coords::{Vec2, Vec3};
use crate::grid::Grid;

/// Vertices emitted per box.
pub const BOX_VERTICES: usize = 24;
/// Indices emitted per box.
pub const BOX_INDICES: usize = 36;

/// Height of the ground quad, just below the wall bases to avoid z-fighting.
pub const GROUND_Y: f32 = -0.01;

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Indexed triangle list with per-vertex normals and texture coordinates.
///
/// `positions`, `normals` and `texcoords` always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub texcoords: Vec<Vec2>,
    pub indices: Vec<u32>,
}

/// Geometry produced for the wall cells of a grid.
pub type WallGeometry = Geometry;

/// Parameters for wall mesh generation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryParams {
    /// Edge length of one grid cell in world units.
    pub cell_size: f32,
    /// Wall height in world units.
    pub wall_height: f32,
    /// Texture repeats across each face (u along the face width, v along its height).
    pub texture_repeat: Vec2,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            wall_height: 8.0,
            texture_repeat: Vec2::new(2.0, 4.5),
        }
    }
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates room for `boxes` boxes.
    pub fn with_box_capacity(boxes: usize) -> Self {
        Self {
            positions: Vec::with_capacity(boxes * BOX_VERTICES),
            normals: Vec::with_capacity(boxes * BOX_VERTICES),
            texcoords: Vec::with_capacity(boxes * BOX_VERTICES),
            indices: Vec::with_capacity(boxes * BOX_INDICES),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends one quad (two triangles, `0 1 2` and `0 2 3`) with a shared flat normal.
    pub fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, uvs: [Vec2; 4]) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[normal; 4]);
        self.texcoords.extend_from_slice(&uvs);
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }

    /// Appends an axis-aligned box spanning `min .. min + size`.
    ///
    /// Face order: front (-Z), back (+Z), right (+X), left (-X), top (+Y), bottom (-Y).
    pub fn push_box(&mut self, min: Vec3, size: Vec3, texture_repeat: Vec2) {
        let Vec3 { x, y, z } = min;
        let (x1, y1, z1) = (x + size.x, y + size.y, z + size.z);
        let (u, v) = (texture_repeat.x, texture_repeat.y);
        let uvs = [
            Vec2::new(0.0, 0.0),
            Vec2::new(u, 0.0),
            Vec2::new(u, v),
            Vec2::new(0.0, v),
        ];
        let p = Vec3::new;

        self.push_quad(
            [p(x, y, z), p(x1, y, z), p(x1, y1, z), p(x, y1, z)],
            Vec3::new(0.0, 0.0, -1.0),
            uvs,
        );
        self.push_quad(
            [p(x1, y, z1), p(x, y, z1), p(x, y1, z1), p(x1, y1, z1)],
            Vec3::new(0.0, 0.0, 1.0),
            uvs,
        );
        self.push_quad(
            [p(x1, y, z), p(x1, y, z1), p(x1, y1, z1), p(x1, y1, z)],
            Vec3::new(1.0, 0.0, 0.0),
            uvs,
        );
        self.push_quad(
            [p(x, y, z1), p(x, y, z), p(x, y1, z), p(x, y1, z1)],
            Vec3::new(-1.0, 0.0, 0.0),
            uvs,
        );
        self.push_quad(
            [p(x, y1, z), p(x1, y1, z), p(x1, y1, z1), p(x, y1, z1)],
            Vec3::UP,
            uvs,
        );
        self.push_quad(
            [p(x, y, z1), p(x1, y, z1), p(x1, y, z), p(x, y, z)],
            -Vec3::UP,
            uvs,
        );
    }

    /// Appends `other`, rebasing its indices.
    pub fn append(&mut self, other: &Geometry) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.texcoords.extend_from_slice(&other.texcoords);
        self.indices.extend(other.indices.iter().map(|i| base + i));
    }
}

/// Emits one box per wall cell.
///
/// Cell `(x, y)` spans `[x*cs, (x+1)*cs] x [0, wall_height] x [y*cs, (y+1)*cs]`.
pub fn build_wall_geometry(grid: &Grid, params: &GeometryParams) -> WallGeometry {
    let cs = params.cell_size;
    let mut geometry = Geometry::with_box_capacity(grid.wall_count());

    for (x, y) in grid.walls() {
        geometry.push_box(
            Vec3::new(x as f32 * cs, 0.0, y as f32 * cs),
            Vec3::new(cs, params.wall_height, cs),
            params.texture_repeat,
        );
    }

    log::debug!(
        "wall geometry: {} boxes, {} vertices, {} triangles",
        geometry.vertex_count() / BOX_VERTICES,
        geometry.vertex_count(),
        geometry.triangle_count()
    );
    geometry
}

/// Single up-facing quad under the whole grid, tiling the texture once per cell.
pub fn build_ground(grid: &Grid, cell_size: f32) -> Geometry {
    let (cols, rows) = (grid.width() as f32, grid.height() as f32);
    let (w, d) = (cols * cell_size, rows * cell_size);

    let mut geometry = Geometry::new();
    geometry.push_quad(
        [
            Vec3::new(0.0, GROUND_Y, 0.0),
            Vec3::new(w, GROUND_Y, 0.0),
            Vec3::new(w, GROUND_Y, d),
            Vec3::new(0.0, GROUND_Y, d),
        ],
        Vec3::UP,
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(cols, 0.0),
            Vec2::new(cols, rows),
            Vec2::new(0.0, rows),
        ],
    );
    geometry
}

/// Cube centred on the origin, used as the pickup marker mesh.
pub fn build_pickup_cube(half_extent: f32) -> Geometry {
    let mut geometry = Geometry::with_box_capacity(1);
    geometry.push_box(
        Vec3::new(-half_extent, -half_extent, -half_extent),
        Vec3::new(2.0 * half_extent, 2.0 * half_extent, 2.0 * half_extent),
        Vec2::new(1.0, 1.0),
    );
    geometry
}
