// Host tests for the camera and the orbit controls.

use glam::{Vec2, Vec3};
use sphere_core::*;

fn camera() -> Camera {
    CameraConfig::default().build_camera(16.0 / 9.0)
}

#[test]
fn default_camera_looks_down_negative_z() {
    let cam = camera();
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_DISTANCE));
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((cam.fovy_radians - CAMERA_FOV_DEGREES.to_radians()).abs() < 1e-6);
    let centre = cam.world_to_ndc(Vec3::ZERO);
    assert!(centre.length() < 1e-5);
}

#[test]
fn resize_rederives_aspect_and_ignores_zero_sizes() {
    let mut cam = camera();
    cam.set_viewport(800.0, 400.0);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(0.0, 400.0);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(800.0, 0.0);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn orbit_starts_from_the_camera_pose() {
    let mut cam = camera();
    let mut orbit = OrbitControls::new(OrbitConfig::default(), &cam);
    assert!(orbit.yaw().abs() < 1e-6);
    assert!(orbit.pitch().abs() < 1e-6);
    assert!((orbit.distance() - CAMERA_DISTANCE).abs() < 1e-6);

    orbit.update(&mut cam);
    assert!((cam.eye - Vec3::new(0.0, 0.0, CAMERA_DISTANCE)).length() < 1e-5);
}

#[test]
fn drive_signals_fire_only_on_edges() {
    let cam = camera();
    let mut orbit = OrbitControls::new(OrbitConfig::default(), &cam);
    assert_eq!(orbit.end_drag(), None);
    assert_eq!(orbit.begin_drag(Vec2::ZERO), Some(DriveSignal::Start));
    assert_eq!(orbit.begin_drag(Vec2::ZERO), None);
    assert!(orbit.is_dragging());
    assert_eq!(orbit.end_drag(), Some(DriveSignal::End));
    assert_eq!(orbit.end_drag(), None);
}

#[test]
fn drag_rotates_the_camera_with_damping() {
    let mut cam = camera();
    let mut orbit = OrbitControls::new(OrbitConfig::default(), &cam);
    orbit.begin_drag(Vec2::new(100.0, 100.0));
    orbit.drag_to(Vec2::new(150.0, 100.0), 500.0);
    orbit.end_drag();

    let total = -std::f32::consts::TAU * 50.0 / 500.0;
    orbit.update(&mut cam);
    let first = orbit.yaw();
    assert!((first - total * ORBIT_DAMPING).abs() < 1e-5);

    for _ in 0..400 {
        orbit.update(&mut cam);
    }
    assert!((orbit.yaw() - total).abs() < 1e-3);
    assert!((cam.eye.length() - CAMERA_DISTANCE).abs() < 1e-4);
    // Dragging right swings the eye toward -X.
    assert!(cam.eye.x < 0.0);
}

#[test]
fn drag_without_begin_is_ignored() {
    let mut cam = camera();
    let mut orbit = OrbitControls::new(OrbitConfig::default(), &cam);
    orbit.drag_to(Vec2::new(300.0, 300.0), 500.0);
    orbit.update(&mut cam);
    assert!(orbit.yaw().abs() < 1e-6);
}

#[test]
fn pitch_is_clamped_away_from_the_poles() {
    let mut cam = camera();
    let mut orbit = OrbitControls::new(OrbitConfig::default(), &cam);
    orbit.begin_drag(Vec2::ZERO);
    orbit.drag_to(Vec2::new(0.0, 5000.0), 500.0);
    for _ in 0..400 {
        orbit.update(&mut cam);
    }
    assert!(orbit.pitch() <= ORBIT_MAX_PITCH + 1e-6);
    assert!(cam.eye.is_finite());
}

#[test]
fn zoom_is_clamped_to_the_orbit_range() {
    let cam = camera();
    let mut orbit = OrbitControls::new(OrbitConfig::default(), &cam);
    orbit.zoom(-1.0);
    assert!((orbit.distance() - CAMERA_DISTANCE * ORBIT_ZOOM_STEP).abs() < 1e-5);
    for _ in 0..200 {
        orbit.zoom(-1.0);
    }
    assert_eq!(orbit.distance(), ORBIT_MIN_DISTANCE);
    for _ in 0..200 {
        orbit.zoom(1.0);
    }
    assert_eq!(orbit.distance(), ORBIT_MAX_DISTANCE);
    orbit.zoom(0.0);
    assert_eq!(orbit.distance(), ORBIT_MAX_DISTANCE);
}
