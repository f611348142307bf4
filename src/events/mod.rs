pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_global_keydown, wire_octave_buttons, KeyWiring};
pub use pointer::{wire_input_handlers, InputWiring};
