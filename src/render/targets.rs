use super::helpers;

/// Depth attachment matching the surface size.
///
/// Panels overlap as the sphere turns, so the scene pass depth-tests them
/// instead of relying on draw order.
pub(crate) struct DepthTarget {
    _texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (_texture, view) = helpers::create_texture_device(
            device,
            "depth_tex",
            width.max(1),
            height.max(1),
            helpers::DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self { _texture, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
