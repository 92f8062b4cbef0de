//! Tunables for the sphere, the camera and the orbit controls.
//!
//! Every struct defaults to the values in `constants.rs`; front-ends may
//! override individual fields and must call `validate()` before use.

use crate::camera::Camera;
use crate::constants::*;
use crate::error::SphereError;
use glam::Vec3;

/// Layout, animation and hover tuning for one photo sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereConfig {
    pub radius: f32,
    pub panel_size: f32,
    pub rotation_per_tick: f32,
    pub pulse_amplitude: f32,
    pub pulse_rate: f64,
    pub hover_scale: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: SPHERE_RADIUS,
            panel_size: PANEL_SIZE,
            rotation_per_tick: IDLE_ROTATION_PER_TICK,
            pulse_amplitude: PULSE_AMPLITUDE,
            pulse_rate: PULSE_RATE,
            hover_scale: HOVER_SCALE,
        }
    }
}

impl SphereConfig {
    pub fn validate(&self) -> Result<(), SphereError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SphereError::InvalidRadius(self.radius));
        }
        if !(self.panel_size.is_finite() && self.panel_size > 0.0) {
            return Err(SphereError::InvalidConfig("panel_size must be positive"));
        }
        if !(self.hover_scale.is_finite() && self.hover_scale > 0.0) {
            return Err(SphereError::InvalidConfig("hover_scale must be positive"));
        }
        if !self.rotation_per_tick.is_finite() {
            return Err(SphereError::InvalidConfig("rotation_per_tick must be finite"));
        }
        // A pulse of 1.0 or more would collapse the group scale to zero.
        if !(0.0..1.0).contains(&self.pulse_amplitude) {
            return Err(SphereError::InvalidConfig("pulse_amplitude must be in [0, 1)"));
        }
        if !self.pulse_rate.is_finite() {
            return Err(SphereError::InvalidConfig("pulse_rate must be finite"));
        }
        Ok(())
    }
}

/// Perspective camera parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub distance: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            distance: CAMERA_DISTANCE,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), SphereError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(SphereError::InvalidConfig("fov_degrees must be in (0, 180)"));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(SphereError::InvalidConfig("clip planes must satisfy 0 < znear < zfar"));
        }
        if !(self.distance > 0.0) {
            return Err(SphereError::InvalidConfig("camera distance must be positive"));
        }
        Ok(())
    }

    /// Camera on +Z looking at the origin.
    pub fn build_camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, self.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fov_degrees.to_radians(),
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}

/// Drag-to-orbit and wheel-to-zoom behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_step: ORBIT_ZOOM_STEP,
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<(), SphereError> {
        if !(self.min_distance > 0.0 && self.min_distance <= self.max_distance) {
            return Err(SphereError::InvalidConfig(
                "orbit distances must satisfy 0 < min_distance <= max_distance",
            ));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(SphereError::InvalidConfig("damping must be in (0, 1]"));
        }
        if !(self.zoom_step > 0.0 && self.zoom_step < 1.0) {
            return Err(SphereError::InvalidConfig("zoom_step must be in (0, 1)"));
        }
        Ok(())
    }
}
