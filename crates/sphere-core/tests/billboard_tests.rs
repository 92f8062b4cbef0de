// Host tests for the panel set: generations, highlight and ray intersection.

use glam::Vec3;
use sphere_core::*;

fn images(names: &[&str]) -> Vec<ImageSource> {
    names.iter().map(|s| (*s).into()).collect()
}

fn six() -> BillboardSet {
    let mut set = BillboardSet::new(SPHERE_RADIUS, PANEL_SIZE);
    set.rebuild(&images(&["a", "b", "c", "d", "e", "f"]));
    set
}

#[test]
fn rebuild_replaces_every_panel_and_bumps_generation() {
    let mut set = six();
    let first = set.generation();
    assert_eq!(set.len(), 6);

    set.rebuild(&images(&["x", "y"]));
    assert_eq!(set.len(), 2);
    assert_ne!(set.generation(), first);
    for (i, panel) in set.panels().iter().enumerate() {
        assert_eq!(panel.id.index, i);
        assert_eq!(panel.id.generation, set.generation());
        assert_eq!(panel.scale, REST_SCALE);
    }
    assert_eq!(set.panels()[0].source.as_str(), "x");
}

#[test]
fn rebuild_drops_the_highlight() {
    let mut set = six();
    let id = set.panels()[2].id;
    set.set_panel_highlight(id, HOVER_SCALE).unwrap();
    set.rebuild(&images(&["a", "b", "c"]));
    assert_eq!(set.highlighted(), None);
    assert!(set.panels().iter().all(|p| p.scale == REST_SCALE));
}

#[test]
fn only_one_panel_is_highlighted_at_a_time() {
    let mut set = six();
    let a = set.panels()[1].id;
    let b = set.panels()[4].id;

    set.set_panel_highlight(a, HOVER_SCALE).unwrap();
    set.set_panel_highlight(b, HOVER_SCALE).unwrap();

    assert_eq!(set.highlighted(), Some(b));
    let enlarged: Vec<usize> = set
        .panels()
        .iter()
        .filter(|p| p.scale != REST_SCALE)
        .map(|p| p.id.index)
        .collect();
    assert_eq!(enlarged, vec![4]);

    set.clear_highlight();
    assert_eq!(set.highlighted(), None);
    assert!(set.panels().iter().all(|p| p.scale == REST_SCALE));
}

#[test]
fn rest_scale_clears_the_highlight() {
    let mut set = six();
    let a = set.panels()[0].id;
    set.set_panel_highlight(a, HOVER_SCALE).unwrap();
    set.set_panel_highlight(a, REST_SCALE).unwrap();
    assert_eq!(set.highlighted(), None);
}

#[test]
fn stale_handles_are_rejected() {
    let mut set = six();
    let old = set.panels()[0].id;
    set.rebuild(&images(&["a", "b", "c", "d", "e", "f"]));

    let err = set.set_panel_highlight(old, HOVER_SCALE).unwrap_err();
    assert_eq!(
        err,
        SphereError::StalePanel {
            index: 0,
            generation: old.generation,
            current: set.generation(),
        }
    );
    assert!(set.get(old).is_err());
}

#[test]
fn out_of_range_handles_are_rejected() {
    let set = six();
    let bogus = PanelId {
        generation: set.generation(),
        index: 99,
    };
    assert_eq!(
        set.get(bogus).unwrap_err(),
        SphereError::UnknownPanel { index: 99, len: 6 }
    );
}

#[test]
fn group_transform_moves_world_positions_not_panels() {
    let mut set = six();
    let before = set.panels()[3].position;
    set.set_group_transform(std::f32::consts::FRAC_PI_2, 1.02);

    assert_eq!(set.panels()[3].position, before);
    let world = set.world_position(&set.panels()[3]);
    assert!((world.length() - before.length() * 1.02).abs() < 1e-4);
    // Quarter turn about +Y maps (x, y, z) to (z, y, -x).
    let expected = Vec3::new(before.z, before.y, -before.x) * 1.02;
    assert!((world - expected).length() < 1e-4);
}

#[test]
fn intersect_returns_nearest_panel_first() {
    let set = six();
    let p3 = set.panels()[3].position;
    let p2 = set.panels()[2].position;

    // A chord entering through panel 3 and leaving through panel 2.
    let ray = Ray::new(p3 + (p3 - p2) * 2.0, p2 - p3);
    let hits = set.intersect_all(&ray);
    let order: Vec<usize> = hits.iter().map(|h| h.id.index).collect();
    assert_eq!(order, vec![3, 2]);
    assert!(hits[0].distance < hits[1].distance);
    assert!((hits[0].point - p3).length() < 1e-3);
    assert_eq!(set.intersect(&ray).map(|p| p.id.index), Some(3));

    let reverse = Ray::new(p2 + (p2 - p3) * 2.0, p3 - p2);
    assert_eq!(set.intersect(&reverse).map(|p| p.id.index), Some(2));
}

#[test]
fn intersect_is_stable_across_calls() {
    let set = six();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 6.0), set.panels()[3].position - Vec3::new(0.0, 0.0, 6.0));
    let a = set.intersect_all(&ray);
    let b = set.intersect_all(&ray);
    assert_eq!(a, b);
}

#[test]
fn intersect_misses_return_none() {
    let set = six();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::new(0.0, 1.0, 0.0));
    assert!(set.intersect(&ray).is_none());

    let empty = BillboardSet::new(SPHERE_RADIUS, PANEL_SIZE);
    let toward_origin = Ray::new(Vec3::new(0.0, 0.0, 6.0), -Vec3::Z);
    assert!(empty.intersect(&toward_origin).is_none());
}

#[test]
fn highlight_enlarges_the_pickable_area() {
    let mut set = six();
    // Panel 0 lies flat at the south pole; aim just outside its resting edge.
    let ray = Ray::new(Vec3::new(0.7, -10.0, 0.0), Vec3::Y);
    assert!(set.intersect(&ray).is_none());

    let id = set.panels()[0].id;
    set.set_panel_highlight(id, HOVER_SCALE).unwrap();
    assert_eq!(set.intersect(&ray).map(|p| p.id), Some(id));
}

#[test]
fn instances_follow_panel_order_and_flag_the_highlight() {
    let mut set = six();
    let id = set.panels()[5].id;
    set.set_panel_highlight(id, HOVER_SCALE).unwrap();

    let instances: Vec<PanelInstance> = set.instances().collect();
    assert_eq!(instances.len(), 6);
    for (i, inst) in instances.iter().enumerate() {
        assert_eq!(inst.params[0], i as f32);
        let highlighted = if i == 5 { 1.0 } else { 0.0 };
        assert_eq!(inst.params[2], highlighted);
    }
    assert_eq!(instances[5].params[1], HOVER_SCALE);
}
