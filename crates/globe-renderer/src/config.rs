//! Render settings
//!
//! Serializable settings for the sample, loadable from a RON file and
//! overridable from the command line by the application.

use serde::{Deserialize, Serialize};

use crate::constants::{animation, camera, viewport};

/// Settings validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Cycle length was zero, negative, or not finite
    #[error("cycle_seconds must be positive and finite, got {0}")]
    InvalidCycle(f32),
    /// Turn count was not finite
    #[error("turns_per_cycle must be finite, got {0}")]
    InvalidTurns(f32),
    /// Field of view was zero, negative, or not finite
    #[error("fov must be positive and finite, got {0}")]
    InvalidFov(f32),
    /// Clip planes out of order or degenerate
    #[error("clip planes must satisfy 0 < near < far, got near {near}, far {far}")]
    InvalidClipPlanes {
        /// Near clipping plane distance
        near: f32,
        /// Far clipping plane distance
        far: f32,
    },
}

/// Viewport settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportSettings {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: viewport::BACKGROUND_COLOR,
        }
    }
}

impl ViewportSettings {
    /// Clear color as a wgpu color
    pub fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.background_color[0] as f64,
            g: self.background_color[1] as f64,
            b: self.background_color[2] as f64,
            a: self.background_color[3] as f64,
        }
    }
}

/// Camera settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraSettings {
    /// Eye position
    pub eye: [f32; 3],
    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: camera::DEFAULT_EYE,
            fov: camera::DEFAULT_FOV,
            near: camera::DEFAULT_NEAR,
            far: camera::DEFAULT_FAR,
        }
    }
}

/// Animation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationSettings {
    /// Seconds per animation cycle
    pub cycle_seconds: f32,
    /// Full revolutions per cycle
    pub turns_per_cycle: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            cycle_seconds: animation::DEFAULT_CYCLE_SECONDS,
            turns_per_cycle: animation::DEFAULT_TURNS_PER_CYCLE,
        }
    }
}

/// Complete render settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RenderSettings {
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraSettings,
    /// Animation settings
    #[serde(default)]
    pub animation: AnimationSettings,
}

impl RenderSettings {
    /// Check that the values can drive the camera and the animation
    ///
    /// Runs once at startup, after file load and command line overrides.
    /// The frame loop assumes these invariants hold.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let animation = &self.animation;
        if !animation.cycle_seconds.is_finite() || animation.cycle_seconds <= 0.0 {
            return Err(SettingsError::InvalidCycle(animation.cycle_seconds));
        }
        if !animation.turns_per_cycle.is_finite() {
            return Err(SettingsError::InvalidTurns(animation.turns_per_cycle));
        }

        let camera = &self.camera;
        if !camera.fov.is_finite() || camera.fov <= 0.0 {
            return Err(SettingsError::InvalidFov(camera.fov));
        }
        if !camera.near.is_finite()
            || !camera.far.is_finite()
            || camera.near <= 0.0
            || camera.far <= camera.near
        {
            return Err(SettingsError::InvalidClipPlanes {
                near: camera.near,
                far: camera.far,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_fixed_scene() {
        let settings = RenderSettings::default();
        assert_eq!(settings.viewport.background_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(settings.camera.eye, [0.0, 0.0, 5.0]);
        assert_eq!(settings.camera.fov, 0.5);
        assert_eq!(settings.camera.near, 1.0);
        assert_eq!(settings.camera.far, 15.0);
        assert_eq!(settings.animation.cycle_seconds, 5.0);
        assert_eq!(settings.animation.turns_per_cycle, 2.0);
    }

    #[test]
    fn test_clear_color_conversion() {
        let viewport = ViewportSettings {
            background_color: [0.25, 0.5, 0.75, 1.0],
        };
        let color = viewport.clear_color();
        assert!((color.r - 0.25).abs() < 1e-6);
        assert!((color.g - 0.5).abs() < 1e-6);
        assert!((color.b - 0.75).abs() < 1e-6);
        assert!((color.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_ron_falls_back_to_defaults() {
        let settings: RenderSettings =
            ron::from_str("(animation: (cycle_seconds: 10.0, turns_per_cycle: 0.5))").unwrap();
        assert_eq!(settings.animation.cycle_seconds, 10.0);
        assert_eq!(settings.animation.turns_per_cycle, 0.5);
        assert_eq!(settings.camera, CameraSettings::default());
        assert_eq!(settings.viewport, ViewportSettings::default());
    }

    #[test]
    fn test_validate_accepts_the_defaults() {
        assert!(RenderSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cycle() {
        let mut settings = RenderSettings::default();
        settings.animation.cycle_seconds = 0.0;
        assert_eq!(settings.validate(), Err(SettingsError::InvalidCycle(0.0)));
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let mut settings = RenderSettings::default();
        settings.animation.cycle_seconds = f32::NAN;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidCycle(_))
        ));

        let mut settings = RenderSettings::default();
        settings.animation.turns_per_cycle = f32::INFINITY;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidTurns(_))
        ));

        let mut settings = RenderSettings::default();
        settings.camera.fov = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidFov(_))
        ));

        let mut settings = RenderSettings::default();
        settings.camera.near = 5.0;
        settings.camera.far = 1.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidClipPlanes { .. })
        ));
    }
}
