//! WGPU rendering for the spinning globe sample
//!
//! Owns the GPU-side mesh buffers, the per-frame transform uniform, the
//! surface texture and the render pipeline. Window and device bring-up live
//! in the application crate; everything here takes `&wgpu::Device` and
//! `&wgpu::Queue` from the caller.

pub mod camera;
pub mod config;
pub mod constants;
pub mod depth;
pub mod mesh;
pub mod sphere_renderer;
pub mod texture;
pub mod transform;
pub mod vertex;

pub use camera::Camera;
pub use config::{
    AnimationSettings, CameraSettings, RenderSettings, SettingsError, ViewportSettings,
};
pub use mesh::GpuMesh;
pub use sphere_renderer::SphereRenderer;
pub use texture::{SphereTexture, TextureError};
pub use transform::Transforms;
