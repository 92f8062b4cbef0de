use super::helpers;
use crate::images::DecodedImage;
use sphere_core::ImageSource;
use std::collections::HashMap;

struct LoadedTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Per-source image textures plus a 1×1 placeholder for panels whose image
/// has not arrived (or failed to load).
pub(crate) struct PanelTextures {
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    _placeholder_texture: wgpu::Texture,
    placeholder: wgpu::BindGroup,
    loaded: HashMap<ImageSource, LoadedTexture>,
}

impl PanelTextures {
    pub(crate) fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("panel_texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("panel_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let (placeholder_texture, placeholder_view) =
            helpers::create_rgba_texture(device, queue, "panel_placeholder", 1, 1, &[255; 4]);
        let placeholder = bind_texture(device, &layout, &sampler, &placeholder_view, "placeholder");
        Self {
            layout,
            sampler,
            _placeholder_texture: placeholder_texture,
            placeholder,
            loaded: HashMap::new(),
        }
    }

    pub(crate) fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecodedImage,
    ) {
        let expected = (image.width * image.height * 4) as usize;
        if image.rgba.len() != expected {
            log::warn!(
                "[render] {} has {} bytes, expected {}",
                image.source,
                image.rgba.len(),
                expected
            );
            return;
        }
        let (texture, view) = helpers::create_rgba_texture(
            device,
            queue,
            "panel_image",
            image.width,
            image.height,
            &image.rgba,
        );
        let bind_group = bind_texture(device, &self.layout, &self.sampler, &view, "panel_image");
        self.loaded.insert(
            image.source.clone(),
            LoadedTexture {
                _texture: texture,
                bind_group,
            },
        );
    }

    /// Bind group for `source`, falling back to the placeholder.
    pub(crate) fn bind_group_for(&self, source: &ImageSource) -> &wgpu::BindGroup {
        self.loaded
            .get(source)
            .map_or(&self.placeholder, |t| &t.bind_group)
    }

    pub(crate) fn is_loaded(&self, source: &ImageSource) -> bool {
        self.loaded.contains_key(source)
    }

    /// Drop textures whose source is no longer shown.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&ImageSource) -> bool) {
        self.loaded.retain(|source, _| keep(source));
    }
}

fn bind_texture(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    view: &wgpu::TextureView,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
