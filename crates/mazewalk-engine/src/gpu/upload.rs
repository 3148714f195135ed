use mazewalk_maze::Geometry;
use wgpu::util::DeviceExt;

use super::vertex::pack_vertices;

/// Vertex and index buffers for one static mesh.
///
/// Upload once per session, then draw every frame inside the host's pass:
///
/// ```no_run
/// use mazewalk_engine::MazeSession;
/// use mazewalk_engine::gpu::GpuMesh;
///
/// fn upload_world(device: &wgpu::Device, session: &MazeSession) -> [GpuMesh; 2] {
///     [
///         GpuMesh::upload(device, "walls", session.wall_geometry()),
///         GpuMesh::upload(device, "ground", session.ground_geometry()),
///     ]
/// }
///
/// fn draw_world(
///     rpass: &mut wgpu::RenderPass<'_>,
///     pipeline: &wgpu::RenderPipeline,
///     camera: &wgpu::BindGroup,
///     meshes: &[GpuMesh],
/// ) {
///     rpass.set_pipeline(pipeline);
///     rpass.set_bind_group(0, camera, &[]);
///     for mesh in meshes {
///         mesh.draw(rpass);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    /// Uploads `geometry` as interleaved [`MeshVertex`](super::MeshVertex) data and `u32` indices.
    pub fn upload(device: &wgpu::Device, label: &str, geometry: &Geometry) -> Self {
        let vertices = pack_vertices(geometry);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(format!("{label} vbo").as_str()),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(format!("{label} ibo").as_str()),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh {label:?}: {} vertices, {} indices",
            vertices.len(),
            geometry.indices.len()
        );

        Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
        }
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Binds the buffers to slot 0 and issues one indexed draw.
    ///
    /// The caller sets pipeline and bind groups beforehand.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
