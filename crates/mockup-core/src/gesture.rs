//! Pointer, touch and wheel interpretation.
//!
//! [`GestureInterpreter`] is a small state machine over [`GestureMode`]. The
//! host translates DOM events into [`InputEvent`]s and forwards them together
//! with the session's [`InteractionState`]; the interpreter is the only writer
//! of that state.

use crate::constants::{clamp_scale, MAX_SCALE, MIN_SCALE, ROTATION_SPEED, WHEEL_ZOOM_STEP};
use crate::state::InteractionState;
use glam::DVec2;
use smallvec::SmallVec;

/// Touch points of a single touch event in client coordinates.
pub type TouchPoints = SmallVec<[DVec2; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value.
    #[inline]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Other,
        }
    }
}

/// Platform-neutral input event. Positions are client (viewport) pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { button: PointerButton, position: DVec2 },
    PointerMove { position: DVec2 },
    PointerUp,
    TouchStart { touches: TouchPoints },
    TouchMove { touches: TouchPoints },
    TouchEnd,
    /// `precision` is the ctrl-key (trackpad pinch) modifier.
    Wheel { delta_y: f64, position: DVec2, precision: bool },
}

/// Trackers for an in-progress two-finger pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    pub initial_distance: f64,
    pub initial_scale: f64,
    pub last_scale: f64,
    pub last_center: DVec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    /// `last` is the previous sample; tracking is incremental.
    Rotating { last: DVec2 },
    Panning { last: DVec2 },
    Pinching(PinchSession),
}

impl GestureMode {
    fn name(&self) -> &'static str {
        match self {
            GestureMode::Idle => "idle",
            GestureMode::Rotating { .. } => "rotating",
            GestureMode::Panning { .. } => "panning",
            GestureMode::Pinching(_) => "pinching",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    mode: GestureMode,
    scene_center: DVec2,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> &GestureMode {
        &self.mode
    }

    /// Client-space center of the scene area; the object's origin before pan.
    pub fn set_scene_center(&mut self, center: DVec2) {
        self.scene_center = center;
    }

    #[inline]
    pub fn scene_center(&self) -> DVec2 {
        self.scene_center
    }

    /// Apply one input event. Returns `true` when the event was consumed and
    /// the host should suppress the browser's default handling.
    pub fn handle(&mut self, state: &mut InteractionState, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { button, position } => match button {
                PointerButton::Primary => {
                    self.enter(GestureMode::Rotating { last: *position });
                    true
                }
                PointerButton::Secondary => {
                    self.enter(GestureMode::Panning { last: *position });
                    true
                }
                PointerButton::Other => false,
            },
            InputEvent::TouchStart { touches } => match touches.as_slice() {
                [a, b, ..] => {
                    self.enter(GestureMode::Pinching(PinchSession {
                        initial_distance: a.distance(*b),
                        initial_scale: state.scale,
                        last_scale: state.scale,
                        last_center: (*a + *b) * 0.5,
                    }));
                    true
                }
                [a] => {
                    self.enter(GestureMode::Rotating { last: *a });
                    true
                }
                [] => false,
            },
            InputEvent::PointerMove { position } => self.drag_to(state, *position),
            InputEvent::TouchMove { touches } => {
                if let GestureMode::Pinching(session) = &mut self.mode {
                    return match touches.as_slice() {
                        [a, b, ..] => {
                            pinch_step(state, session, self.scene_center, *a, *b);
                            true
                        }
                        _ => false,
                    };
                }
                match touches.first() {
                    Some(first) => self.drag_to(state, *first),
                    None => false,
                }
            }
            InputEvent::PointerUp | InputEvent::TouchEnd => {
                let was_active = self.mode != GestureMode::Idle;
                self.enter(GestureMode::Idle);
                was_active
            }
            InputEvent::Wheel {
                delta_y,
                position,
                precision,
            } => {
                if !*precision {
                    return false;
                }
                self.wheel_zoom(state, *delta_y, *position);
                true
            }
        }
    }

    /// Face the front panel and drop any zoom/pan.
    pub fn reset_front(&mut self, state: &mut InteractionState) {
        state.rotation_x = 0.0;
        state.rotation_y = 0.0;
        state.scale = 1.0;
        state.pan_x = 0.0;
        state.pan_y = 0.0;
    }

    /// Face the back panel; zoom and pan are kept.
    pub fn reset_back(&mut self, state: &mut InteractionState) {
        state.rotation_x = 0.0;
        state.rotation_y = 180.0;
    }

    fn enter(&mut self, mode: GestureMode) {
        if self.mode.name() != mode.name() {
            log::debug!("[gesture] {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
    }

    fn drag_to(&mut self, state: &mut InteractionState, position: DVec2) -> bool {
        match &mut self.mode {
            GestureMode::Rotating { last } => {
                let delta = position - *last;
                state.rotation_y += delta.x * ROTATION_SPEED;
                state.rotation_x -= delta.y * ROTATION_SPEED;
                *last = position;
                true
            }
            GestureMode::Panning { last } => {
                state.add_pan(position - *last);
                *last = position;
                true
            }
            _ => false,
        }
    }

    fn wheel_zoom(&mut self, state: &mut InteractionState, delta_y: f64, position: DVec2) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let delta = -delta_y.signum() * WHEEL_ZOOM_STEP;
        let candidate = state.scale + delta;
        if !(MIN_SCALE..=MAX_SCALE).contains(&candidate) {
            return;
        }
        let correction = anchor_correction(state, self.scene_center, position, state.scale, delta);
        state.add_pan(correction);
        state.scale = candidate;
    }
}

/// Pan adjustment that keeps `anchor` over the same point of the object when
/// the scale moves from `reference_scale` by `scale_delta`.
fn anchor_correction(
    state: &InteractionState,
    scene_center: DVec2,
    anchor: DVec2,
    reference_scale: f64,
    scale_delta: f64,
) -> DVec2 {
    if reference_scale == 0.0 {
        return DVec2::ZERO;
    }
    let offset = anchor - (scene_center + state.pan());
    -(offset / reference_scale) * scale_delta
}

fn pinch_step(
    state: &mut InteractionState,
    session: &mut PinchSession,
    scene_center: DVec2,
    a: DVec2,
    b: DVec2,
) {
    let new_scale = if session.initial_distance > 0.0 {
        clamp_scale(session.initial_scale * (a.distance(b) / session.initial_distance))
    } else {
        session.last_scale
    };
    let scale_delta = new_scale - session.last_scale;

    // Two-finger drag pans first; the zoom is then anchored at the new midpoint.
    let center = (a + b) * 0.5;
    state.add_pan(center - session.last_center);
    let correction = anchor_correction(state, scene_center, center, session.last_scale, scale_delta);
    state.add_pan(correction);

    state.scale = new_scale;
    session.last_scale = new_scale;
    session.last_center = center;
}
