use crate::constants::{BASE_BRIGHTNESS, LIGHT_DIRECTION, LIGHT_RANGE};
use glam::{DMat3, DVec3};

/// Brightness multiplier per box face, roughly centred on [`BASE_BRIGHTNESS`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBrightness {
    pub front: f64,
    pub back: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl FaceBrightness {
    /// `(css variable, value)` pairs in face order.
    pub fn css_variables(&self) -> [(&'static str, f64); 6] {
        [
            ("--light-front", self.front),
            ("--light-back", self.back),
            ("--light-left", self.left),
            ("--light-right", self.right),
            ("--light-top", self.top),
            ("--light-bottom", self.bottom),
        ]
    }
}

// Screen-space normals: +Z faces the viewer, -Y is up.
const FRONT: DVec3 = DVec3::new(0.0, 0.0, 1.0);
const BACK: DVec3 = DVec3::new(0.0, 0.0, -1.0);
const LEFT: DVec3 = DVec3::new(-1.0, 0.0, 0.0);
const RIGHT: DVec3 = DVec3::new(1.0, 0.0, 0.0);
const TOP: DVec3 = DVec3::new(0.0, -1.0, 0.0);
const BOTTOM: DVec3 = DVec3::new(0.0, 1.0, 0.0);

/// Shade the six faces for the given rotation (degrees).
///
/// Normals are yawed about the vertical axis first, then pitched about the
/// horizontal axis, and dotted with [`LIGHT_DIRECTION`].
pub fn face_brightness(rotation_x: f64, rotation_y: f64) -> FaceBrightness {
    let rotation =
        DMat3::from_rotation_x(rotation_x.to_radians()) * DMat3::from_rotation_y(rotation_y.to_radians());
    let shade = |normal: DVec3| BASE_BRIGHTNESS + (rotation * normal).dot(LIGHT_DIRECTION) * LIGHT_RANGE;

    FaceBrightness {
        front: shade(FRONT),
        back: shade(BACK),
        left: shade(LEFT),
        right: shade(RIGHT),
        top: shade(TOP),
        bottom: shade(BOTTOM),
    }
}
