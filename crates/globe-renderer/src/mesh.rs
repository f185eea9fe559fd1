//! GPU mesh upload

use wgpu::util::DeviceExt;

use globe_core::SphereMesh;

/// GPU-resident sphere mesh
///
/// One buffer per attribute stream plus the index buffer, uploaded once and
/// immutable afterwards. Buffer contents mirror the generated arrays without
/// any repacking.
pub struct GpuMesh {
    /// Position stream buffer
    pub position_buffer: wgpu::Buffer,
    /// Normal stream buffer
    pub normal_buffer: wgpu::Buffer,
    /// Texture coordinate stream buffer
    pub texcoord_buffer: wgpu::Buffer,
    /// Triangle index buffer (u32 indices)
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload a generated mesh into device buffers
    pub fn upload(device: &wgpu::Device, mesh: &SphereMesh) -> Self {
        tracing::debug!(
            "Uploading sphere mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Position Buffer"),
            contents: bytemuck::cast_slice(&mesh.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let normal_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Normal Buffer"),
            contents: bytemuck::cast_slice(&mesh.normals),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let texcoord_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Texcoord Buffer"),
            contents: bytemuck::cast_slice(&mesh.texcoords),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.triangles),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            position_buffer,
            normal_buffer,
            texcoord_buffer,
            index_buffer,
            index_count: mesh.index_count(),
        }
    }
}
