//! Per-frame change detection.
//!
//! [`RenderScheduler::tick`] compares the live state against the last
//! rendered snapshot and emits only the presentation writes that are needed.
//! The host calls it once per display refresh and applies the returned
//! [`RenderCommands`] to its surface.

use crate::lighting::{face_brightness, FaceBrightness};
use crate::resolution::{Clock, ScaleCommitManager};
use crate::shadow::{project_shadow, ShadowInput, ShadowTransform};
use crate::state::{InteractionState, LightSource};
use crate::surface::{Layer, PresentationSurface};

/// Last-applied values, used only for change detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub light_x: f64,
    pub light_y: f64,
}

impl RenderSnapshot {
    pub fn capture(state: &InteractionState, light: LightSource) -> Self {
        Self {
            rotation_x: state.rotation_x,
            rotation_y: state.rotation_y,
            scale: state.scale,
            pan_x: state.pan_x,
            pan_y: state.pan_y,
            light_x: light.x,
            light_y: light.y,
        }
    }
}

/// `translate(pan) scale(ratio)` for the container. `scale` is the visual
/// ratio against the committed resolution, not the raw zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

impl ObjectTransform {
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationUpdate {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub brightness: FaceBrightness,
}

/// Presentation writes produced by one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderCommands {
    pub rotation: Option<RotationUpdate>,
    pub render_scale: Option<f64>,
    pub transform: Option<ObjectTransform>,
    pub shadow: Option<ShadowTransform>,
}

impl RenderCommands {
    pub fn is_empty(&self) -> bool {
        self.rotation.is_none()
            && self.render_scale.is_none()
            && self.transform.is_none()
            && self.shadow.is_none()
    }

    pub fn apply<S: PresentationSurface + ?Sized>(&self, surface: &mut S) {
        if let Some(rotation) = &self.rotation {
            surface.set_property(Layer::Root, "--rot-x", &format!("{}deg", rotation.rotation_x));
            surface.set_property(Layer::Root, "--rot-y", &format!("{}deg", rotation.rotation_y));
            for (name, value) in rotation.brightness.css_variables() {
                surface.set_property(Layer::Container, name, &value.to_string());
            }
        }
        // Resize before re-transforming so both land in the same paint.
        if let Some(render_scale) = self.render_scale {
            surface.set_property(Layer::Container, "--render-scale", &render_scale.to_string());
        }
        if let Some(transform) = &self.transform {
            surface.set_property(Layer::Container, "transform", &transform.to_css());
        }
        if let Some(shadow) = &self.shadow {
            surface.set_property(Layer::Shadow, "transform", &shadow.to_css());
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderScheduler {
    snapshot: Option<RenderSnapshot>,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn snapshot(&self) -> Option<&RenderSnapshot> {
        self.snapshot.as_ref()
    }

    /// Derive this frame's writes. Returns empty commands when nothing
    /// changed since the last tick and no resolution commit is due.
    pub fn tick<C: Clock>(
        &mut self,
        state: &InteractionState,
        light: LightSource,
        resolution: &mut ScaleCommitManager<C>,
    ) -> RenderCommands {
        let committed = resolution.poll();
        let current = RenderSnapshot::capture(state, light);
        if committed.is_none() && self.snapshot == Some(current) {
            return RenderCommands::default();
        }

        let previous = self.snapshot;
        let rotation_changed = previous.map_or(true, |p| {
            p.rotation_x != current.rotation_x || p.rotation_y != current.rotation_y
        });
        let scale_changed = previous.map_or(true, |p| p.scale != current.scale);

        let rotation = rotation_changed.then(|| RotationUpdate {
            rotation_x: state.rotation_x,
            rotation_y: state.rotation_y,
            brightness: face_brightness(state.rotation_x, state.rotation_y),
        });
        let ratio = if scale_changed {
            resolution.visual_scale(state.scale)
        } else {
            resolution.ratio(state.scale)
        };

        self.snapshot = Some(current);
        RenderCommands {
            rotation,
            render_scale: committed,
            transform: Some(ObjectTransform {
                pan_x: state.pan_x,
                pan_y: state.pan_y,
                scale: ratio,
            }),
            shadow: Some(project_shadow(ShadowInput::new(state, light))),
        }
    }
}
