//! Owned panel set with group and per-panel transforms.
//!
//! A `BillboardSet` holds exactly one `Panel` per image of the current
//! generation. Idle rotation and the pulse are applied to the group as a
//! whole; hover enlargement is applied to a single panel. Every rebuild bumps
//! the generation so handles from an older set are rejected.

use crate::constants::REST_SCALE;
use crate::error::SphereError;
use crate::layout::{layout, ImageSource};
use crate::picker::{ray_quad, Ray};
use glam::{Mat4, Quat, Vec3};

/// Stable handle to a panel within one generation of a `BillboardSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PanelId {
    pub generation: u32,
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub source: ImageSource,
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: f32,
}

impl Panel {
    /// Panel-local transform inside the group.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation,
            self.position,
        )
    }
}

/// A ray/panel intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelHit {
    pub id: PanelId,
    pub distance: f32,
    pub point: Vec3,
}

/// Per-instance data consumed by the renderer once per frame.
///
/// `params` packs `[index, scale, highlighted, 0]`; the last slot is left
/// for the renderer to mark panels whose image has loaded.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelInstance {
    pub model: [[f32; 4]; 4],
    pub params: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct BillboardSet {
    panels: Vec<Panel>,
    generation: u32,
    radius: f32,
    panel_size: f32,
    group_rotation_y: f32,
    group_scale: f32,
    highlighted: Option<usize>,
}

impl BillboardSet {
    pub fn new(radius: f32, panel_size: f32) -> Self {
        Self {
            panels: Vec::new(),
            generation: 0,
            radius,
            panel_size,
            group_rotation_y: 0.0,
            group_scale: 1.0,
            highlighted: None,
        }
    }

    pub fn from_config(config: &crate::SphereConfig) -> Self {
        Self::new(config.radius, config.panel_size)
    }

    /// Replace every panel with a fresh layout of `images`.
    ///
    /// The group transform is kept so the sphere does not jump; the highlight
    /// is dropped along with the old panels.
    pub fn rebuild(&mut self, images: &[ImageSource]) {
        self.generation = self.generation.wrapping_add(1);
        self.highlighted = None;
        let generation = self.generation;
        self.panels = layout(images, self.radius)
            .into_iter()
            .enumerate()
            .map(|(index, p)| Panel {
                id: PanelId { generation, index },
                source: p.source,
                position: p.position,
                orientation: p.orientation,
                scale: REST_SCALE,
            })
            .collect();
        log::info!(
            "[sphere] rebuilt generation {} with {} panels",
            generation,
            self.panels.len()
        );
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn panel_size(&self) -> f32 {
        self.panel_size
    }

    /// Resolve a handle, rejecting ones from another generation.
    pub fn get(&self, id: PanelId) -> Result<&Panel, SphereError> {
        self.check(id)?;
        Ok(&self.panels[id.index])
    }

    fn check(&self, id: PanelId) -> Result<(), SphereError> {
        if id.generation != self.generation {
            return Err(SphereError::StalePanel {
                index: id.index,
                generation: id.generation,
                current: self.generation,
            });
        }
        if id.index >= self.panels.len() {
            return Err(SphereError::UnknownPanel {
                index: id.index,
                len: self.panels.len(),
            });
        }
        Ok(())
    }

    /// Rotate the whole set about +Y and scale it uniformly.
    pub fn set_group_transform(&mut self, rotation_y: f32, scale: f32) {
        self.group_rotation_y = rotation_y;
        self.group_scale = scale;
    }

    pub fn group_rotation_y(&self) -> f32 {
        self.group_rotation_y
    }

    pub fn group_scale(&self) -> f32 {
        self.group_scale
    }

    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.group_scale),
            Quat::from_rotation_y(self.group_rotation_y),
            Vec3::ZERO,
        )
    }

    pub fn world_matrix(&self, panel: &Panel) -> Mat4 {
        self.group_matrix() * panel.local_matrix()
    }

    pub fn world_position(&self, panel: &Panel) -> Vec3 {
        self.group_matrix().transform_point3(panel.position)
    }

    /// Scale one panel by `factor`, restoring any previously highlighted one.
    ///
    /// A factor equal to the rest scale clears the highlight.
    pub fn set_panel_highlight(&mut self, id: PanelId, factor: f32) -> Result<(), SphereError> {
        self.check(id)?;
        if let Some(prev) = self.highlighted.take() {
            if prev != id.index {
                self.panels[prev].scale = REST_SCALE;
            }
        }
        self.panels[id.index].scale = factor;
        if factor != REST_SCALE {
            self.highlighted = Some(id.index);
        }
        Ok(())
    }

    pub fn clear_highlight(&mut self) {
        if let Some(prev) = self.highlighted.take() {
            self.panels[prev].scale = REST_SCALE;
        }
    }

    pub fn highlighted(&self) -> Option<PanelId> {
        self.highlighted.map(|index| self.panels[index].id)
    }

    /// Every panel hit by `ray`, nearest first, ties broken by index.
    pub fn intersect_all(&self, ray: &Ray) -> Vec<PanelHit> {
        let group = self.group_matrix();
        let half = self.panel_size * 0.5;
        let mut hits: Vec<PanelHit> = self
            .panels
            .iter()
            .filter_map(|panel| {
                let world = group * panel.local_matrix();
                let inv = world.inverse();
                let origin = inv.transform_point3(ray.origin);
                let direction = inv.transform_vector3(ray.direction);
                ray_quad(origin, direction, half).map(|t| PanelHit {
                    id: panel.id,
                    distance: t,
                    point: ray.at(t),
                })
            })
            .collect();
        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.id.index.cmp(&b.id.index))
        });
        hits
    }

    /// Nearest panel hit by `ray`.
    pub fn intersect(&self, ray: &Ray) -> Option<&Panel> {
        self.intersect_all(ray)
            .first()
            .map(|hit| &self.panels[hit.id.index])
    }

    /// Render instances in panel order.
    pub fn instances(&self) -> impl Iterator<Item = PanelInstance> + '_ {
        let group = self.group_matrix();
        self.panels.iter().map(move |panel| PanelInstance {
            model: (group * panel.local_matrix()).to_cols_array_2d(),
            params: [
                panel.id.index as f32,
                panel.scale,
                if self.highlighted == Some(panel.id.index) { 1.0 } else { 0.0 },
                0.0,
            ],
        })
    }
}
