use crate::constants::{
    ACTIVE_CLASS, CLICKED_CLASS, CLICK_PULSE_MS, RESET_BACK_ID, RESET_FRONT_ID,
    VARIANT_DATA_ATTR, VARIANT_PILL_SELECTOR,
};
use crate::dom;
use crate::session::SharedSession;
use crate::surface::CssSurface;
use mockup_core::{apply_variant, LightSource, VariantId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_reset_buttons(document: &web::Document, session: &SharedSession) {
    for (id, back) in [(RESET_FRONT_ID, false), (RESET_BACK_ID, true)] {
        let Some(button) = document.get_element_by_id(id) else {
            log::warn!("[controls] missing #{}", id);
            continue;
        };
        let session = session.clone();
        dom::add_click_listener(document, id, move || {
            dom::pulse_class(&button, CLICKED_CLASS, CLICK_PULSE_MS);
            let mut s = session.borrow_mut();
            let s = &mut *s;
            if back {
                s.gestures.reset_back(&mut s.interaction);
            } else {
                s.gestures.reset_front(&mut s.interaction);
            }
        });
    }
}

pub fn apply_variant_by_key(surface: &Rc<RefCell<CssSurface>>, key: &str) {
    match key.parse::<VariantId>() {
        Ok(id) => {
            apply_variant(&mut *surface.borrow_mut(), id.variant());
            log::info!("[variant] applied {}", id);
        }
        Err(e) => log::warn!("[variant] {}", e),
    }
}

pub fn wire_variant_pills(document: &web::Document, surface: &Rc<RefCell<CssSurface>>) {
    let pills = Rc::new(dom::query_all(document, VARIANT_PILL_SELECTOR));
    for pill in pills.iter() {
        let all = pills.clone();
        let clicked = pill.clone();
        let surface = surface.clone();
        let closure = Closure::wrap(Box::new(move || {
            for p in all.iter() {
                _ = p.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = clicked.class_list().add_1(ACTIVE_CLASS);
            if let Some(key) = clicked.get_attribute(VARIANT_DATA_ATTR) {
                apply_variant_by_key(&surface, &key);
            }
        }) as Box<dyn FnMut()>);
        _ = pill.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the light anchored to the viewport corner and the zoom anchor
/// origin at the scene's center.
pub fn wire_resize(session: &SharedSession, scene: &web::Element) {
    let Some(window) = web::window() else {
        return;
    };
    let session = session.clone();
    let scene = scene.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut s = session.borrow_mut();
        if let Some((w, h)) = dom::viewport_size() {
            s.light = LightSource::from_viewport(w, h);
        }
        s.gestures.set_scene_center(dom::element_center(&scene));
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
