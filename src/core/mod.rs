pub mod camera;
pub mod keymap;
pub mod layout;
pub mod note;
pub mod orbit;
pub mod piano;
pub mod picking;
pub mod player;

pub use camera::*;
pub use keymap::*;
pub use layout::*;
pub use note::*;
pub use orbit::*;
pub use piano::*;
pub use picking::*;
pub use player::*;

// Shaders bundled as string constants
pub static KEYS_WGSL: &str = include_str!("../../shaders/keys.wgsl");
