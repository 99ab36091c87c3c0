use crate::session::SharedSession;
use crate::surface::CssSurface;
use mockup_core::{RenderScheduler, ScaleCommitManager, SystemClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: SharedSession,
    pub surface: Rc<RefCell<CssSurface>>,
    pub scheduler: RenderScheduler,
    pub resolution: ScaleCommitManager<SystemClock>,
}

impl FrameContext {
    pub fn new(session: SharedSession, surface: Rc<RefCell<CssSurface>>) -> Self {
        Self {
            session,
            surface,
            scheduler: RenderScheduler::new(),
            resolution: ScaleCommitManager::new(SystemClock),
        }
    }

    pub fn frame(&mut self) {
        let (state, light) = {
            let s = self.session.borrow();
            (s.interaction, s.light)
        };
        let commands = self.scheduler.tick(&state, light, &mut self.resolution);
        if commands.is_empty() {
            return;
        }
        commands.apply(&mut *self.surface.borrow_mut());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
