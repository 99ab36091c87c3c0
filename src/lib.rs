#![cfg(target_arch = "wasm32")]
use crate::session::Session;
use crate::surface::CssSurface;
use mockup_core::curve::{sine_path, SinePathParams};
use mockup_core::{LightSource, VariantId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod perf;
mod session;
mod surface;

fn draw_sine_path(document: &web::Document) {
    if let Some(path) = document.get_element_by_id(constants::SINE_PATH_ID) {
        _ = path.set_attribute("d", &sine_path(SinePathParams::default()));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mockup-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    perf::install_motion_policy(&window, &document);

    let scene = document
        .get_element_by_id(constants::SCENE_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::SCENE_ID))?;
    let surface = Rc::new(RefCell::new(CssSurface::from_document(&document)?));

    let (w, h) = dom::viewport_size().unwrap_or((0.0, 0.0));
    let session = Session::new(LightSource::from_viewport(w, h));
    session
        .borrow_mut()
        .gestures
        .set_scene_center(dom::element_center(&scene));

    // ---------------- Interaction ----------------
    events::wire_resize(&session, &scene);
    events::wire_input_handlers(events::InputWiring {
        scene,
        session: session.clone(),
    });
    events::wire_reset_buttons(&document, &session);
    events::wire_variant_pills(&document, &surface);
    events::apply_variant_by_key(&surface, VariantId::default().key());

    draw_sine_path(&document);

    // Render loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(session, surface)));
    frame::start_loop(frame_ctx);

    Ok(())
}
