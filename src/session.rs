use mockup_core::{GestureInterpreter, InteractionState, LightSource};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything input handlers mutate and the frame loop reads.
pub struct Session {
    pub interaction: InteractionState,
    pub gestures: GestureInterpreter,
    pub light: LightSource,
}

pub type SharedSession = Rc<RefCell<Session>>;

impl Session {
    pub fn new(light: LightSource) -> SharedSession {
        Rc::new(RefCell::new(Self {
            interaction: InteractionState::default(),
            gestures: GestureInterpreter::new(),
            light,
        }))
    }
}
