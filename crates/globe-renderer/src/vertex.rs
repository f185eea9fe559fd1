//! Vertex stream descriptions
//!
//! The sphere mesh keeps its attributes in separate buffers (positions,
//! normals, texture coordinates), so each stream carries a single attribute
//! and its own layout.

/// Position stream, shader location 0
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    /// Vertex position in model space
    pub position: [f32; 3],
}

impl PositionVertex {
    /// Vertex attribute descriptors for the shader
    pub const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[wgpu::VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x3,
    }];

    /// Returns the vertex buffer layout for this stream
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Normal stream, shader location 1
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NormalVertex {
    /// Unit vertex normal
    pub normal: [f32; 3],
}

impl NormalVertex {
    /// Vertex attribute descriptors for the shader
    pub const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[wgpu::VertexAttribute {
        offset: 0,
        shader_location: 1,
        format: wgpu::VertexFormat::Float32x3,
    }];

    /// Returns the vertex buffer layout for this stream
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Texture coordinate stream, shader location 2
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexcoordVertex {
    /// Equirectangular texture coordinate
    pub texcoord: [f32; 2],
}

impl TexcoordVertex {
    /// Vertex attribute descriptors for the shader
    pub const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[wgpu::VertexAttribute {
        offset: 0,
        shader_location: 2,
        format: wgpu::VertexFormat::Float32x2,
    }];

    /// Returns the vertex buffer layout for this stream
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}
