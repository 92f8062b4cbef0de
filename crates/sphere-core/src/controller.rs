//! Hover/activate state machine and per-frame driver.
//!
//! The controller owns the current `BillboardSet` generation, the animation
//! clock and the interaction state. Pointer moves drive the two-state hover
//! machine (`Idle` / `Hovering`), clicks re-pick at the last pointer position
//! and hand the hit's source to a `FullViewer`, and `frame` applies idle
//! rotation and pulse to the group every tick regardless of hover state.

use crate::billboard::{BillboardSet, PanelId};
use crate::camera::{Camera, DriveSignal};
use crate::clock::{AnimationClock, ClockTick};
use crate::config::SphereConfig;
use crate::constants::REST_SCALE;
use crate::error::SphereError;
use crate::layout::ImageSource;
use crate::picker::pick;
use glam::Vec2;

/// Seam to the collaborator that shows an image full-size.
pub trait FullViewer {
    fn open_full_view(&mut self, source: &ImageSource);
}

impl<F: FnMut(&ImageSource)> FullViewer for F {
    fn open_full_view(&mut self, source: &ImageSource) {
        self(source)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(PanelId),
}

/// Edge produced by one pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Entered(PanelId),
    Left(PanelId),
    Switched { from: PanelId, to: PanelId },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hover: HoverState,
    pub user_driving: bool,
}

pub struct InteractionController<V: FullViewer> {
    billboards: BillboardSet,
    clock: AnimationClock,
    viewer: V,
    state: InteractionState,
    pointer_ndc: Option<Vec2>,
    hover_scale: f32,
}

impl<V: FullViewer> InteractionController<V> {
    pub fn new(config: &SphereConfig, viewer: V) -> Result<Self, SphereError> {
        config.validate()?;
        Ok(Self {
            billboards: BillboardSet::from_config(config),
            clock: AnimationClock::from_config(config),
            viewer,
            state: InteractionState::default(),
            pointer_ndc: None,
            hover_scale: config.hover_scale,
        })
    }

    /// Replace the whole panel set. Hover returns to `Idle` synchronously so
    /// no handle from the previous generation survives.
    pub fn rebuild(&mut self, images: &[ImageSource]) {
        self.billboards.rebuild(images);
        self.state.hover = HoverState::Idle;
    }

    /// Route a pointer move at `ndc` through the hover state machine.
    pub fn pointer_moved(
        &mut self,
        ndc: Vec2,
        camera: &Camera,
    ) -> Result<HoverChange, SphereError> {
        self.pointer_ndc = Some(ndc);
        let hit = pick(ndc, camera, &self.billboards).map(|panel| panel.id);

        let change = match (self.state.hover, hit) {
            (HoverState::Idle, None) => HoverChange::Unchanged,
            (HoverState::Hovering(p), None) => {
                self.billboards.set_panel_highlight(p, REST_SCALE)?;
                self.state.hover = HoverState::Idle;
                HoverChange::Left(p)
            }
            (HoverState::Idle, Some(q)) => {
                self.billboards.set_panel_highlight(q, self.hover_scale)?;
                self.state.hover = HoverState::Hovering(q);
                HoverChange::Entered(q)
            }
            (HoverState::Hovering(p), Some(q)) if p == q => HoverChange::Unchanged,
            (HoverState::Hovering(p), Some(q)) => {
                self.billboards.set_panel_highlight(p, REST_SCALE)?;
                self.billboards.set_panel_highlight(q, self.hover_scale)?;
                self.state.hover = HoverState::Hovering(q);
                HoverChange::Switched { from: p, to: q }
            }
        };
        if change != HoverChange::Unchanged {
            log::debug!("[hover] {:?}", change);
        }
        Ok(change)
    }

    /// Re-pick at the last pointer position and open the hit panel.
    ///
    /// Hover state is left untouched. Returns the opened source, if any.
    pub fn activate(&mut self, camera: &Camera) -> Option<ImageSource> {
        let ndc = self.pointer_ndc?;
        let source = pick(ndc, camera, &self.billboards)?.source.clone();
        log::debug!("[click] open {}", source);
        self.viewer.open_full_view(&source);
        Some(source)
    }

    /// Advance the clock and apply rotation and pulse to the group.
    pub fn frame(&mut self, now: f64) -> ClockTick {
        let tick = self.clock.tick(now, self.state.user_driving);
        self.billboards
            .set_group_transform(self.clock.rotation_angle(), tick.pulse_scale);
        tick
    }

    pub fn set_user_driving(&mut self, driving: bool) {
        self.state.user_driving = driving;
    }

    pub fn apply_drive_signal(&mut self, signal: DriveSignal) {
        self.set_user_driving(signal == DriveSignal::Start);
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn hover_state(&self) -> HoverState {
        self.state.hover
    }

    pub fn is_user_driving(&self) -> bool {
        self.state.user_driving
    }

    pub fn pointer_ndc(&self) -> Option<Vec2> {
        self.pointer_ndc
    }

    pub fn billboards(&self) -> &BillboardSet {
        &self.billboards
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }
}
