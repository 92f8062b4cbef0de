use glam::Vec2;

/// Map a position inside a `width` × `height` viewport to normalized device
/// coordinates: x grows right, y grows up, both in [-1, 1].
///
/// Returns `None` for an empty viewport.
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new(x / width * 2.0 - 1.0, -(y / height) * 2.0 + 1.0))
}

/// Normalise a wheel delta to pixels for the three `WheelEvent` delta modes.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let delta = delta as f32;
    match delta_mode {
        1 => delta * line_px,
        2 => delta * page_px,
        _ => delta,
    }
}

/// Scale an image size down to fit `max_side`, keeping its aspect ratio.
/// Sizes already within bounds are returned unchanged; neither side drops
/// below one pixel.
#[inline]
pub fn fit_texture_extent(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_side || longest == 0 {
        return (width.max(1), height.max(1));
    }
    let scale = max_side as f32 / longest as f32;
    let w = ((width as f32 * scale).round() as u32).clamp(1, max_side);
    let h = ((height as f32 * scale).round() as u32).clamp(1, max_side);
    (w, h)
}
