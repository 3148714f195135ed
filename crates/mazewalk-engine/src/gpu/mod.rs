//! GPU boundary: vertex format and static mesh buffers.
//!
//! Pipelines, shaders and textures belong to the host renderer.

mod upload;
mod vertex;

pub use upload::GpuMesh;
pub use vertex::{MeshVertex, pack_vertices};
