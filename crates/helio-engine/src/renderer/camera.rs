use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::core::error::ConfigError;
use crate::input::state::{Control, InputState};

/// Keeps pitch strictly away from the poles to avoid gimbal flip.
pub const PITCH_EPSILON: f32 = 0.05;

/// Rates and limits for the orbit camera. Distance is a conventional
/// non-negative scalar; the sign flip happens only in `view_matrix`.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub default_yaw: f32,
    pub default_pitch: f32,
    pub default_dist: f32,
    /// Radians per second while a pan control is held.
    pub yaw_speed: f32,
    pub pitch_speed: f32,
    /// Distance units per second while a zoom control is held.
    pub zoom_speed: f32,
    pub min_dist: f32,
    pub max_dist: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_yaw: 0.0,
            default_pitch: 0.35,
            default_dist: 280.0,
            yaw_speed: 2.0,
            pitch_speed: 1.5,
            zoom_speed: 80.0,
            min_dist: 50.0,
            max_dist: 800.0,
        }
    }
}

impl CameraConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let check = |value: f32, param: &'static str| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::InvalidCamera { param, value })
            }
        };
        check(self.default_yaw, "default_yaw")?;
        check(self.default_pitch, "default_pitch")?;
        check(self.default_dist, "default_dist")?;
        check(self.yaw_speed, "yaw_speed")?;
        check(self.pitch_speed, "pitch_speed")?;
        check(self.zoom_speed, "zoom_speed")?;
        if !(self.min_dist > 0.0) {
            return Err(ConfigError::InvalidCamera {
                param: "min_dist",
                value: self.min_dist,
            });
        }
        if !(self.max_dist > self.min_dist) {
            return Err(ConfigError::InvalidCamera {
                param: "max_dist",
                value: self.max_dist,
            });
        }
        if self.default_dist < self.min_dist || self.default_dist > self.max_dist {
            return Err(ConfigError::InvalidCamera {
                param: "default_dist",
                value: self.default_dist,
            });
        }
        Ok(())
    }
}

/// Orbit camera rig: yaw, pitch, distance, driven by held controls.
///
/// All transitions are rate-based and frame-rate-independent — driven by
/// the real `dt`, which keeps responding even while the simulation is
/// paused. The only instantaneous transition is `reset`.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub dist: f32,
    config: CameraConfig,
}

impl OrbitCamera {
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            yaw: config.default_yaw,
            pitch: config.default_pitch,
            dist: config.default_dist,
            config,
        })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Apply every held control for `dt` seconds of real time.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        let c = &self.config;
        // Yaw is unbounded; trigonometric periodicity wraps it implicitly.
        if input.is_held(Control::PanLeft) {
            self.yaw -= c.yaw_speed * dt;
        }
        if input.is_held(Control::PanRight) {
            self.yaw += c.yaw_speed * dt;
        }
        if input.is_held(Control::PanUp) {
            self.pitch += c.pitch_speed * dt;
        }
        if input.is_held(Control::PanDown) {
            self.pitch -= c.pitch_speed * dt;
        }
        self.pitch = self
            .pitch
            .clamp(-FRAC_PI_2 + PITCH_EPSILON, FRAC_PI_2 - PITCH_EPSILON);

        if input.is_held(Control::ZoomIn) {
            self.dist -= c.zoom_speed * dt;
        }
        if input.is_held(Control::ZoomOut) {
            self.dist += c.zoom_speed * dt;
        }
        self.dist = self.dist.clamp(c.min_dist, c.max_dist);
    }

    /// Snap back to the configured defaults.
    pub fn reset(&mut self) {
        self.yaw = self.config.default_yaw;
        self.pitch = self.config.default_pitch;
        self.dist = self.config.default_dist;
    }

    /// World-to-view matrix: pull back along -Z, then pitch, then yaw.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.dist))
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_rotation_y(self.yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(CameraConfig::default()).unwrap()
    }

    #[test]
    fn rejects_inverted_distance_range() {
        let config = CameraConfig {
            min_dist: 800.0,
            max_dist: 50.0,
            default_dist: 100.0,
            ..CameraConfig::default()
        };
        assert!(OrbitCamera::new(config).is_err());
    }

    #[test]
    fn zoom_never_escapes_distance_range() {
        let mut cam = camera();
        let mut input = InputState::new();
        input.press(Control::ZoomIn);
        for _ in 0..10_000 {
            cam.update(&input, 0.016);
        }
        assert_eq!(cam.dist, cam.config().min_dist);

        input.release(Control::ZoomIn);
        input.press(Control::ZoomOut);
        for _ in 0..10_000 {
            cam.update(&input, 0.016);
        }
        assert_eq!(cam.dist, cam.config().max_dist);
    }

    #[test]
    fn pitch_never_reaches_poles() {
        let mut cam = camera();
        let mut input = InputState::new();
        input.press(Control::PanUp);
        for _ in 0..10_000 {
            cam.update(&input, 0.016);
        }
        assert!(cam.pitch < FRAC_PI_2 - PITCH_EPSILON + 1e-6);

        input.release(Control::PanUp);
        input.press(Control::PanDown);
        for _ in 0..10_000 {
            cam.update(&input, 0.016);
        }
        assert!(cam.pitch > -FRAC_PI_2 + PITCH_EPSILON - 1e-6);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = camera();
        let mut input = InputState::new();
        input.press(Control::PanRight);
        for _ in 0..1000 {
            cam.update(&input, 0.1);
        }
        assert!(cam.yaw > std::f32::consts::TAU);
    }

    #[test]
    fn update_is_rate_based() {
        // Same held time, different frame counts, same result.
        let mut a = camera();
        let mut b = camera();
        let mut input = InputState::new();
        input.press(Control::PanRight);
        a.update(&input, 1.0);
        for _ in 0..100 {
            b.update(&input, 0.01);
        }
        assert!((a.yaw - b.yaw).abs() < 1e-4);
    }

    #[test]
    fn reset_snaps_to_defaults() {
        let mut cam = camera();
        let mut input = InputState::new();
        input.press(Control::PanRight);
        input.press(Control::ZoomIn);
        cam.update(&input, 2.0);
        cam.reset();
        assert_eq!(cam.yaw, cam.config().default_yaw);
        assert_eq!(cam.pitch, cam.config().default_pitch);
        assert_eq!(cam.dist, cam.config().default_dist);
    }

    #[test]
    fn view_matrix_pulls_back_by_distance() {
        let mut cam = camera();
        cam.yaw = 0.0;
        cam.pitch = 0.0;
        let origin = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!((origin.z - -cam.dist).abs() < 1e-4);
    }
}
