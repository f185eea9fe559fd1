//! Rendering constants
//!
//! Centralizes the fixed values shared between the renderer and the
//! settings defaults.

/// Viewport constants
pub mod viewport {
    /// Depth buffer format
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
    /// Default background clear color (white, RGBA)
    pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Camera default parameters
pub mod camera {
    /// Default eye position on the +z axis
    pub const DEFAULT_EYE: [f32; 3] = [0.0, 0.0, 5.0];
    /// Default vertical field of view in radians
    pub const DEFAULT_FOV: f32 = 0.5;
    /// Default near clipping plane
    pub const DEFAULT_NEAR: f32 = 1.0;
    /// Default far clipping plane
    pub const DEFAULT_FAR: f32 = 15.0;
}

/// Animation default parameters
pub mod animation {
    /// Default seconds per animation cycle
    pub const DEFAULT_CYCLE_SECONDS: f32 = 5.0;
    /// Default full revolutions per cycle
    pub const DEFAULT_TURNS_PER_CYCLE: f32 = 2.0;
}
