use glam::DVec2;
use mockup_core::{InputEvent, PointerButton, TouchPoints};
use web_sys as web;

// ---------------- DOM -> core event translation ----------------
#[inline]
pub fn mouse_position(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[inline]
pub fn touch_points(ev: &web::TouchEvent) -> TouchPoints {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| DVec2::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

#[inline]
pub fn pointer_down(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::PointerDown {
        button: PointerButton::from_dom(ev.button()),
        position: mouse_position(ev),
    }
}

#[inline]
pub fn wheel(ev: &web::WheelEvent) -> InputEvent {
    InputEvent::Wheel {
        delta_y: ev.delta_y(),
        position: DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        precision: ev.ctrl_key(),
    }
}
