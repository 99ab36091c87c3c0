use super::pointer::InputWiring;
use crate::dom;
use crate::input;
use mockup_core::{GestureMode, InputEvent};
use web_sys as web;

pub fn wire_touch_handlers(w: &InputWiring) {
    let start = w.clone();
    dom::add_active_listener(&w.scene, "touchstart", move |ev: web::TouchEvent| {
        start.refresh_scene_center();
        start.dispatch(&InputEvent::TouchStart {
            touches: input::touch_points(&ev),
        });
    });

    let Some(window) = web::window() else {
        return;
    };

    let moved = w.clone();
    dom::add_active_listener(&window, "touchmove", move |ev: web::TouchEvent| {
        let consumed = moved.dispatch(&InputEvent::TouchMove {
            touches: input::touch_points(&ev),
        });
        // Only a pinch owns the page; single-finger drags keep native behaviour.
        let pinching = matches!(
            moved.session.borrow().gestures.mode(),
            GestureMode::Pinching(_)
        );
        if consumed && pinching {
            ev.prevent_default();
        }
    });

    let end = w.clone();
    dom::add_active_listener(&window, "touchend", move |_ev: web::TouchEvent| {
        end.dispatch(&InputEvent::TouchEnd);
    });
}
