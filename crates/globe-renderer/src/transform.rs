//! Per-draw transform uniform

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

/// Matrices consumed by the vertex stage
///
/// `normal` holds the inverse-transpose of the model-view rotation, widened
/// back to 4x4 so the uniform keeps uniform-buffer-friendly columns. It maps
/// normals into view space even under non-uniform model scaling.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Transforms {
    /// Model-view matrix
    pub model_view: [[f32; 4]; 4],
    /// Combined model-view-projection matrix
    pub model_view_proj: [[f32; 4]; 4],
    /// Normal transform matrix
    pub normal: [[f32; 4]; 4],
}

impl Transforms {
    /// Build the uniform from model, view and projection matrices
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        let model_view = view * model;
        let normal = Mat4::from_mat3(Mat3::from_mat4(model_view).inverse().transpose());

        Self {
            model_view: model_view.to_cols_array_2d(),
            model_view_proj: (projection * model_view).to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
        }
    }

    /// Identity transforms, the state before the first frame is computed
    pub fn identity() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY)
    }
}
