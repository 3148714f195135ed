use bytemuck::{Pod, Zeroable};
use mazewalk_maze::Geometry;

/// Interleaved mesh vertex as consumed by the maze shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Interleaves the parallel attribute arrays of `geometry`.
pub fn pack_vertices(geometry: &Geometry) -> Vec<MeshVertex> {
    debug_assert_eq!(geometry.positions.len(), geometry.normals.len());
    debug_assert_eq!(geometry.positions.len(), geometry.texcoords.len());

    geometry
        .positions
        .iter()
        .zip(&geometry.normals)
        .zip(&geometry.texcoords)
        .map(|((p, n), t)| MeshVertex {
            position: p.to_array(),
            normal: n.to_array(),
            uv: t.to_array(),
        })
        .collect()
}
