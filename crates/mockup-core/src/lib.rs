pub mod capability;
pub mod constants;
pub mod curve;
pub mod gesture;
pub mod lighting;
pub mod resolution;
pub mod scheduler;
pub mod shadow;
pub mod state;
pub mod surface;
pub mod variant;

pub use gesture::{GestureInterpreter, GestureMode, InputEvent, PinchSession, PointerButton, TouchPoints};
pub use lighting::{face_brightness, FaceBrightness};
pub use resolution::{Clock, ScaleCommitManager, SystemClock};
pub use scheduler::{ObjectTransform, RenderCommands, RenderScheduler, RenderSnapshot, RotationUpdate};
pub use shadow::{project_shadow, ShadowInput, ShadowTransform};
pub use state::{InteractionState, LightSource};
pub use surface::{Layer, PresentationSurface, TextSlot};
pub use variant::{apply_variant, UnknownVariant, Variant, VariantId};
