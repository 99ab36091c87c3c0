use glam::DVec3;
use std::time::Duration;

// Shared interaction/visual tuning constants for the packaging mockup.

// Interaction
pub const ROTATION_SPEED: f64 = 0.5; // degrees per pixel of drag
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 5.0;
pub const WHEEL_ZOOM_STEP: f64 = 0.1; // scale change per precision-wheel notch

// Lighting
pub const BASE_BRIGHTNESS: f64 = 0.95;
pub const LIGHT_RANGE: f64 = 0.15;
// Left (-X), top (-Y), front (+Z). Deliberately not unit length; the face
// shading is calibrated against these exact components.
pub const LIGHT_DIRECTION: DVec3 = DVec3::new(-0.5, -0.5, 0.7);

// Shadow
pub const SHADOW_ELEVATION: f64 = 45.0; // offset in px at scale 1
pub const SHADOW_STRETCH_BASE: f64 = 0.7;
pub const SHADOW_STRETCH_PER_PX: f64 = 0.0012;
pub const SHADOW_STRETCH_MAX: f64 = 2.2;
pub const SHADOW_SQUASH_MIN: f64 = 0.18;

// Resolution commits
pub const COMMIT_DELAY: Duration = Duration::from_millis(500);
pub const COMMIT_DEAD_ZONE: f64 = 0.01;
pub const MAX_RENDER_SCALE: f64 = 3.0; // never re-render above 3x, transform covers the rest

#[inline]
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
