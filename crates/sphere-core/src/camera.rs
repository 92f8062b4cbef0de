//! Camera description and orbit controls.
//!
//! These types avoid any platform API so both the picker and the web
//! renderer can derive matrices from the same values.

use crate::config::OrbitConfig;
use crate::constants::ORBIT_MAX_PITCH;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera shared by picking and rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Re-derive the aspect ratio after a viewport resize.
    ///
    /// Zero-sized viewports (minimised windows) keep the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Project a world-space point to normalized device coordinates.
    pub fn world_to_ndc(&self, point: Vec3) -> Vec2 {
        self.view_projection().project_point3(point).truncate()
    }
}

/// Edge signals emitted when a manual camera drag starts or ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveSignal {
    Start,
    End,
}

/// Damped orbit around the camera target, without panning.
///
/// Yaw is measured around +Y starting at +Z, pitch is the elevation above the
/// XZ plane. Pointer drags queue rotation which `update` bleeds into the
/// camera a fraction at a time.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    config: OrbitConfig,
    yaw: f32,
    pitch: f32,
    distance: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    dragging: bool,
    last_pointer: Vec2,
}

impl OrbitControls {
    pub fn new(config: OrbitConfig, camera: &Camera) -> Self {
        let offset = camera.eye - camera.target;
        let distance = offset
            .length()
            .clamp(config.min_distance, config.max_distance);
        let dir = offset.normalize_or_zero();
        let pitch = dir.y.clamp(-1.0, 1.0).asin();
        let yaw = dir.x.atan2(dir.z);
        Self {
            config,
            yaw,
            pitch,
            distance,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Start a drag at `pointer_px`. Returns `Start` only on the first call.
    pub fn begin_drag(&mut self, pointer_px: Vec2) -> Option<DriveSignal> {
        self.last_pointer = pointer_px;
        if self.dragging {
            return None;
        }
        self.dragging = true;
        Some(DriveSignal::Start)
    }

    /// Queue rotation for a pointer move. A full viewport height of travel
    /// is one full turn at `rotate_speed == 1`.
    pub fn drag_to(&mut self, pointer_px: Vec2, viewport_height: f32) {
        if !self.dragging || viewport_height <= 0.0 {
            return;
        }
        let delta = pointer_px - self.last_pointer;
        self.last_pointer = pointer_px;
        let turn = std::f32::consts::TAU * self.config.rotate_speed / viewport_height;
        self.pending_yaw -= delta.x * turn;
        self.pending_pitch += delta.y * turn;
    }

    pub fn end_drag(&mut self) -> Option<DriveSignal> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        Some(DriveSignal::End)
    }

    /// Dolly in (negative delta) or out (positive delta), one step per call.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if wheel_delta > 0.0 {
            self.distance /= self.config.zoom_step;
        } else if wheel_delta < 0.0 {
            self.distance *= self.config.zoom_step;
        }
        self.distance = self
            .distance
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Apply a damped share of the queued rotation and move the camera eye.
    pub fn update(&mut self, camera: &mut Camera) {
        let k = self.config.damping;
        self.yaw += self.pending_yaw * k;
        self.pitch =
            (self.pitch + self.pending_pitch * k).clamp(-ORBIT_MAX_PITCH, ORBIT_MAX_PITCH);
        self.pending_yaw *= 1.0 - k;
        self.pending_pitch *= 1.0 - k;

        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let dir = Vec3::new(cp * sy, sp, cp * cy);
        camera.eye = camera.target + dir * self.distance;
    }
}
