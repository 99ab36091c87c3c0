use crate::constants::{
    SHADOW_ELEVATION, SHADOW_SQUASH_MIN, SHADOW_STRETCH_BASE, SHADOW_STRETCH_MAX,
    SHADOW_STRETCH_PER_PX,
};
use crate::state::{InteractionState, LightSource};
use glam::DVec2;

/// Inputs of the ground-shadow projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowInput {
    pub pan: DVec2,
    pub rotation_y: f64,
    pub scale: f64,
    pub light: LightSource,
}

impl ShadowInput {
    pub fn new(state: &InteractionState, light: LightSource) -> Self {
        Self {
            pan: state.pan(),
            rotation_y: state.rotation_y,
            scale: state.scale,
            light,
        }
    }
}

/// Translate / scale-x / scale-y recipe for the shadow layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub squash_x: f64,
    pub stretch_y: f64,
}

impl ShadowTransform {
    /// CSS transform for the shadow element, which sits centred under the
    /// object and pushed far behind it.
    pub fn to_css(&self) -> String {
        format!(
            "translate(-50%, 0) translateZ(-3000px) translate({}px, {}px) scaleX({}) scaleY({})",
            self.offset_x, self.offset_y, self.squash_x, self.stretch_y
        )
    }
}

/// Project the object's shadow away from the light.
///
/// The throw direction is light -> object; the offset grows with the zoom
/// (a virtual elevation), the length with the distance to the light, and the
/// width narrows as the object turns edge-on.
pub fn project_shadow(input: ShadowInput) -> ShadowTransform {
    let to_object = input.pan - DVec2::new(input.light.x, input.light.y);
    let mut distance = to_object.length();
    if distance == 0.0 || !distance.is_finite() {
        distance = 1.0;
    }
    let offset = (to_object / distance) * (SHADOW_ELEVATION * input.scale);

    ShadowTransform {
        offset_x: offset.x,
        offset_y: offset.y,
        squash_x: input.rotation_y.to_radians().cos().abs().max(SHADOW_SQUASH_MIN),
        stretch_y: (SHADOW_STRETCH_BASE + distance * SHADOW_STRETCH_PER_PX).min(SHADOW_STRETCH_MAX),
    }
}
