use crate::dom;
use crate::input;
use crate::session::SharedSession;
use mockup_core::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub scene: web::Element,
    pub session: SharedSession,
}

impl InputWiring {
    /// Re-read the scene's on-screen center before a gesture begins.
    pub(super) fn refresh_scene_center(&self) {
        let center = dom::element_center(&self.scene);
        self.session.borrow_mut().gestures.set_scene_center(center);
    }

    pub(super) fn dispatch(&self, event: &InputEvent) -> bool {
        let mut session = self.session.borrow_mut();
        let session = &mut *session;
        session.gestures.handle(&mut session.interaction, event)
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_contextmenu(&w);
    wire_mousedown(&w);
    wire_mousemove(&w);
    wire_mouseup(&w);
    wire_wheel(&w);
    super::touch::wire_touch_handlers(&w);
}

fn wire_contextmenu(w: &InputWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .scene
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousedown(w: &InputWiring) {
    let w_inner = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w_inner.refresh_scene_center();
        w_inner.dispatch(&input::pointer_down(&ev));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .scene
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.dispatch(&InputEvent::PointerMove {
            position: input::mouse_position(&ev),
        });
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.dispatch(&InputEvent::PointerUp);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w_inner = w.clone();
    dom::add_active_listener(&w.scene, "wheel", move |ev: web::WheelEvent| {
        if !ev.ctrl_key() {
            return;
        }
        w_inner.refresh_scene_center();
        if w_inner.dispatch(&input::wheel(&ev)) {
            ev.prevent_default();
        }
    });
}
