use crate::billboard::{BillboardSet, Panel};
use crate::camera::Camera;
use glam::{Vec2, Vec3};

/// World-space ray with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray from the camera eye through `ndc` (x right, y up, both in [-1, 1]).
    pub fn from_camera(ndc: Vec2, camera: &Camera) -> Self {
        let inv = camera.view_projection().inverse();
        // Unproject onto the near plane (depth 0); the far plane loses
        // precision to cancellation when zfar/znear is large.
        let near = inv.project_point3(ndc.extend(0.0));
        Self::new(camera.eye, near - camera.eye)
    }
}

/// Nearest panel under the pointer, or `None` on a miss.
///
/// Ties at equal distance go to the lower panel index so a pointer resting
/// between two coincident panels does not flicker.
pub fn pick<'a>(
    pointer_ndc: Vec2,
    camera: &Camera,
    panels: &'a BillboardSet,
) -> Option<&'a Panel> {
    if panels.is_empty() {
        return None;
    }
    let ray = Ray::from_camera(pointer_ndc, camera);
    panels.intersect(&ray)
}

/// Local-space hit of a ray against an axis-aligned quad in the XY plane.
///
/// `origin`/`direction` are already in quad space; `t` is returned in the
/// parameterisation of `direction`, so an unnormalised direction produced by
/// an affine inverse keeps world-space distances. Both faces are hit.
#[inline]
pub fn ray_quad(origin: Vec3, direction: Vec3, half_extent: f32) -> Option<f32> {
    if direction.z.abs() < 1e-8 {
        return None;
    }
    let t = -origin.z / direction.z;
    if t < 0.0 {
        return None;
    }
    let hit = (origin + direction * t).truncate();
    (hit.x.abs() <= half_extent && hit.y.abs() <= half_extent).then_some(t)
}
