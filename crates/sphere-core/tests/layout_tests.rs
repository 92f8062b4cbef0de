// Host tests for the spherical layout.

use glam::Vec3;
use sphere_core::*;

const EPS: f32 = 1e-4;

fn images(n: usize) -> Vec<ImageSource> {
    (0..n).map(|i| ImageSource::new(format!("img-{i}"))).collect()
}

#[test]
fn layout_places_one_panel_per_image_on_the_sphere() {
    for radius in [0.5_f32, 3.0, 10.0] {
        for n in 0..64 {
            let placements = layout(&images(n), radius);
            assert_eq!(placements.len(), n);
            for p in &placements {
                let d = p.position.length();
                assert!(
                    (d - radius).abs() < EPS * radius.max(1.0),
                    "n={n} r={radius}: distance {d}"
                );
            }
        }
    }
}

#[test]
fn empty_image_list_yields_no_panels() {
    assert!(layout(&[], 3.0).is_empty());
}

#[test]
fn single_image_is_finite_and_on_the_south_pole() {
    let placements = layout(&images(1), 3.0);
    assert_eq!(placements.len(), 1);
    let p = placements[0].position;
    assert!(p.is_finite());
    assert!(placements[0].orientation.is_finite());
    assert!((p - Vec3::new(0.0, -3.0, 0.0)).length() < EPS);
}

#[test]
fn layout_is_deterministic() {
    let imgs = images(17);
    let a = layout(&imgs, 3.0);
    let b = layout(&imgs, 3.0);
    assert_eq!(a, b);
}

#[test]
fn layout_preserves_input_order() {
    let imgs: Vec<ImageSource> = ["a", "b", "c", "d"].iter().map(|s| (*s).into()).collect();
    let placements = layout(&imgs, 3.0);
    let sources: Vec<&str> = placements.iter().map(|p| p.source.as_str()).collect();
    assert_eq!(sources, vec!["a", "b", "c", "d"]);
}

#[test]
fn panels_face_the_origin() {
    for p in layout(&images(12), 3.0) {
        let normal = p.orientation * Vec3::Z;
        let inward = -p.position.normalize();
        assert!(
            (normal - inward).length() < 1e-3,
            "normal {normal:?} vs inward {inward:?}"
        );
    }
}

#[test]
fn panels_stay_upright_away_from_the_poles() {
    // Local +X stays horizontal so images are not rolled on screen.
    for p in layout(&images(12), 3.0).iter().skip(1) {
        let right = p.orientation * Vec3::X;
        assert!(right.y.abs() < 1e-3, "right axis tilted: {right:?}");
    }
}

#[test]
fn spiral_matches_reference_positions() {
    // Six panels: index 3 sits on the equator at theta = sqrt(6 PI) * PI / 2.
    let (phi, theta) = spiral_angles(3, 6);
    assert!((phi - std::f32::consts::FRAC_PI_2).abs() < EPS);
    assert!((theta - (6.0 * std::f32::consts::PI).sqrt() * std::f32::consts::FRAC_PI_2).abs() < EPS);

    let p = spherical_point(3, 6, 3.0);
    assert!((p.x - 3.0 * theta.sin()).abs() < EPS);
    assert!(p.y.abs() < EPS);
    assert!((p.z - 3.0 * theta.cos()).abs() < EPS);
}

#[test]
fn polar_angle_is_evenly_spaced_in_cosine() {
    let n = 10;
    for i in 0..n {
        let (phi, _) = spiral_angles(i, n);
        let expected = -1.0 + 2.0 * i as f32 / n as f32;
        assert!((phi.cos() - expected).abs() < EPS);
    }
}
