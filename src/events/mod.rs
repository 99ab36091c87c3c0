pub mod controls;
pub mod pointer;
pub mod touch;

pub use controls::{apply_variant_by_key, wire_reset_buttons, wire_resize, wire_variant_pills};
pub use pointer::{wire_input_handlers, InputWiring};
