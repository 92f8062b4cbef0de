// Host tests for tuning constants and configuration validation.

use sphere_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SPHERE_RADIUS > 0.0);
    assert!(PANEL_SIZE > 0.0);
    assert!(IDLE_ROTATION_PER_TICK > 0.0);
    assert!(PULSE_AMPLITUDE > 0.0 && PULSE_AMPLITUDE < 1.0);
    assert!(HOVER_SCALE > REST_SCALE);
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Camera starts outside the sphere and inside the orbit range.
    assert!(CAMERA_DISTANCE > SPHERE_RADIUS);
    assert!(CAMERA_DISTANCE >= ORBIT_MIN_DISTANCE && CAMERA_DISTANCE <= ORBIT_MAX_DISTANCE);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    // Hovered panels must not swallow their neighbours on a six-image sphere.
    assert!(PANEL_SIZE * HOVER_SCALE < SPHERE_RADIUS);
}

#[test]
fn default_configs_validate() {
    assert_eq!(SphereConfig::default().validate(), Ok(()));
    assert_eq!(CameraConfig::default().validate(), Ok(()));
    assert_eq!(OrbitConfig::default().validate(), Ok(()));
}

#[test]
fn default_images_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for src in DEFAULT_IMAGES {
        assert!(seen.insert(src), "duplicate default image {src}");
    }
    assert_eq!(DEFAULT_IMAGES.len(), 6);
}

#[test]
fn invalid_sphere_configs_are_rejected() {
    let bad_radius = SphereConfig {
        radius: -1.0,
        ..SphereConfig::default()
    };
    assert_eq!(bad_radius.validate(), Err(SphereError::InvalidRadius(-1.0)));

    let nan_radius = SphereConfig {
        radius: f32::NAN,
        ..SphereConfig::default()
    };
    assert!(matches!(nan_radius.validate(), Err(SphereError::InvalidRadius(_))));

    let bad_pulse = SphereConfig {
        pulse_amplitude: 1.5,
        ..SphereConfig::default()
    };
    assert!(matches!(bad_pulse.validate(), Err(SphereError::InvalidConfig(_))));

    let bad_panel = SphereConfig {
        panel_size: 0.0,
        ..SphereConfig::default()
    };
    assert!(matches!(bad_panel.validate(), Err(SphereError::InvalidConfig(_))));
}

#[test]
fn invalid_camera_and_orbit_configs_are_rejected() {
    let wide = CameraConfig {
        fov_degrees: 180.0,
        ..CameraConfig::default()
    };
    assert!(wide.validate().is_err());

    let planes = CameraConfig {
        znear: 10.0,
        zfar: 1.0,
        ..CameraConfig::default()
    };
    assert!(planes.validate().is_err());

    let inverted = OrbitConfig {
        min_distance: 12.0,
        max_distance: 3.0,
        ..OrbitConfig::default()
    };
    assert!(inverted.validate().is_err());
}

#[test]
fn errors_render_readable_messages() {
    let err = SphereError::StalePanel {
        index: 2,
        generation: 1,
        current: 3,
    };
    assert_eq!(
        err.to_string(),
        "panel 2 belongs to generation 1, current generation is 3"
    );
}
