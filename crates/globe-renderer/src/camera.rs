//! Fixed viewpoint camera

use glam::{Mat4, Vec3};

use crate::config::CameraSettings;

/// Camera with a fixed eye looking at the origin
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position
    pub eye: Vec3,
    /// Look-at target
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Viewport width / height ratio
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a camera from settings and an initial aspect ratio
    pub fn new(settings: &CameraSettings, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(settings.eye),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: settings.fov,
            aspect,
            near: settings.near,
            far: settings.far,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Get projection matrix (0..1 depth range)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_camera() -> Camera {
        Camera::new(&CameraSettings::default(), 640.0 / 480.0)
    }

    #[test]
    fn test_view_puts_the_eye_at_the_origin() {
        let camera = default_camera();
        let eye_in_view = camera.view_matrix().transform_point3(camera.eye);
        assert!(eye_in_view.length() < 1e-5);
    }

    #[test]
    fn test_view_looks_down_negative_z() {
        let camera = default_camera();
        let target_in_view = camera.view_matrix().transform_point3(camera.target);
        assert!((target_in_view.x).abs() < 1e-5);
        assert!((target_in_view.y).abs() < 1e-5);
        assert!((target_in_view.z + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_projection_depth_range() {
        let camera = default_camera();
        let proj = camera.projection_matrix();

        let near_point = proj * glam::Vec4::new(0.0, 0.0, -camera.near, 1.0);
        assert!((near_point.z / near_point.w).abs() < 1e-5);

        let far_point = proj * glam::Vec4::new(0.0, 0.0, -camera.far, 1.0);
        assert!((far_point.z / far_point.w - 1.0).abs() < 1e-4);
    }
}
