//! Interaction state shared between the gesture interpreter and the render
//! scheduler.
//!
//! These types avoid referencing platform APIs. The web frontend owns one
//! [`InteractionState`] for the whole session, lets the gesture interpreter
//! mutate it, and hands a shared reference to the scheduler every frame.

use glam::DVec2;

/// Rotation, zoom and pan of the packaging object.
///
/// Angles are in degrees and unbounded. `scale` stays within
/// [`MIN_SCALE`](crate::constants::MIN_SCALE)..=[`MAX_SCALE`](crate::constants::MAX_SCALE)
/// as long as it is only written through the gesture interpreter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl InteractionState {
    #[inline]
    pub fn pan(&self) -> DVec2 {
        DVec2::new(self.pan_x, self.pan_y)
    }

    #[inline]
    pub(crate) fn add_pan(&mut self, delta: DVec2) {
        self.pan_x += delta.x;
        self.pan_y += delta.y;
    }
}

/// Position of the virtual light, anchored at minus half the viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub x: f64,
    pub y: f64,
}

impl LightSource {
    pub fn from_viewport(width: f64, height: f64) -> Self {
        Self {
            x: -width / 2.0,
            y: -height / 2.0,
        }
    }
}
