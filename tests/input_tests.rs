// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-6
}

#[test]
fn ndc_maps_viewport_corners() {
    let (w, h) = (800.0, 600.0);
    assert!(close(client_to_ndc(0.0, 0.0, w, h).unwrap(), Vec2::new(-1.0, 1.0)));
    assert!(close(client_to_ndc(w, h, w, h).unwrap(), Vec2::new(1.0, -1.0)));
    assert!(close(client_to_ndc(w / 2.0, h / 2.0, w, h).unwrap(), Vec2::ZERO));
}

#[test]
fn ndc_y_grows_upward() {
    let top = client_to_ndc(100.0, 10.0, 200.0, 200.0).unwrap();
    let bottom = client_to_ndc(100.0, 190.0, 200.0, 200.0).unwrap();
    assert!(top.y > bottom.y);
    assert!((top.x - bottom.x).abs() < 1e-6);
}

#[test]
fn ndc_rejects_empty_viewport() {
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 600.0), None);
    assert_eq!(client_to_ndc(10.0, 10.0, 800.0, 0.0), None);
}

#[test]
fn wheel_delta_handles_all_modes() {
    assert_eq!(wheel_delta_px(-120.0, 0, 16.0, 800.0), -120.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 800.0), -800.0);
    // Unknown modes are treated as pixels.
    assert_eq!(wheel_delta_px(5.0, 7, 16.0, 800.0), 5.0);
}

#[test]
fn texture_extent_keeps_small_images() {
    assert_eq!(fit_texture_extent(300, 200, 512), (300, 200));
    assert_eq!(fit_texture_extent(512, 512, 512), (512, 512));
}

#[test]
fn texture_extent_downscales_preserving_aspect() {
    assert_eq!(fit_texture_extent(2048, 1024, 512), (512, 256));
    assert_eq!(fit_texture_extent(1000, 4000, 512), (128, 512));
}

#[test]
fn texture_extent_never_collapses() {
    assert_eq!(fit_texture_extent(0, 0, 512), (1, 1));
    assert_eq!(fit_texture_extent(10_000, 1, 512), (512, 1));
}
