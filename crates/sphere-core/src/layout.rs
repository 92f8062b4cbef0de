//! Distribution of image panels over a sphere surface.
//!
//! Panels are spread evenly in `cos(phi)` so each occupies roughly the same
//! area, and the azimuth advances by `sqrt(N * PI) * phi` so consecutive
//! panels spiral around the sphere instead of stacking on one meridian.

use glam::{Mat3, Quat, Vec3};
use std::fmt;

/// Opaque image reference (URL or object URL). Never inspected by the core.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageSource {
    fn from(source: &str) -> Self {
        Self(source.to_owned())
    }
}

impl From<String> for ImageSource {
    fn from(source: String) -> Self {
        Self(source)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One laid-out panel before it is owned by a `BillboardSet`.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub source: ImageSource,
    pub position: Vec3,
    pub orientation: Quat,
}

/// Place one panel per image on a sphere of `radius` around the origin.
///
/// Output order matches input order. The radius must be positive; callers
/// validate it through `SphereConfig::validate`.
pub fn layout(images: &[ImageSource], radius: f32) -> Vec<Placement> {
    debug_assert!(radius > 0.0, "sphere radius must be positive");
    let total = images.len();
    images
        .iter()
        .enumerate()
        .map(|(i, source)| {
            let position = spherical_point(i, total, radius);
            Placement {
                source: source.clone(),
                position,
                orientation: look_at_origin(position),
            }
        })
        .collect()
}

/// Polar/azimuth angles `(phi, theta)` of panel `index` out of `total`.
#[inline]
pub fn spiral_angles(index: usize, total: usize) -> (f32, f32) {
    let n = total as f32;
    let phi = (-1.0 + (2.0 * index as f32) / n).clamp(-1.0, 1.0).acos();
    let theta = (n * std::f32::consts::PI).sqrt() * phi;
    (phi, theta)
}

/// Cartesian position of panel `index` out of `total`.
///
/// `phi` is measured from +Y and `theta` around Y starting at +Z.
#[inline]
pub fn spherical_point(index: usize, total: usize, radius: f32) -> Vec3 {
    let (phi, theta) = spiral_angles(index, total);
    from_spherical(radius, phi, theta)
}

#[inline]
pub fn from_spherical(radius: f32, phi: f32, theta: f32) -> Vec3 {
    let ring = phi.sin() * radius;
    Vec3::new(ring * theta.sin(), phi.cos() * radius, ring * theta.cos())
}

/// Rotation whose local +Z axis points from `position` toward the origin.
///
/// Local +Y stays as close to world +Y as possible. At the poles the vertical
/// axis is degenerate and local +X is pinned to world +X instead.
pub fn look_at_origin(position: Vec3) -> Quat {
    let forward = (-position).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut right = Vec3::Y.cross(forward);
    if right.length_squared() < 1e-10 {
        right = Vec3::X;
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_panel_sits_on_the_south_pole() {
        let p = spherical_point(0, 6, 3.0);
        assert!((p.y + 3.0).abs() < 1e-5);
        assert!(p.x.abs() < 1e-5 && p.z.abs() < 1e-5);
    }

    #[test]
    fn pole_orientation_is_finite() {
        let q = look_at_origin(Vec3::new(0.0, -3.0, 0.0));
        assert!(q.is_finite());
        let normal = q * Vec3::Z;
        assert!((normal - Vec3::Y).length() < 1e-5);
    }
}
