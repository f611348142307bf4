// Rendering, camera and synth tuning constants for the web frontend.
// Geometry lives in `LayoutParams`; these only matter once the keyboard is
// drawn or heard.

// Camera (right-handed, y up, keyboard on the z = 0 plane)
pub const CAMERA_EYE: [f32; 3] = [0.0, -1.4, 4.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOVY_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.01;
pub const CAMERA_ZFAR: f32 = 50.0;

// Key colors (linear RGBA)
pub const NATURAL_RGBA: [f32; 4] = [0.92, 0.92, 0.90, 1.0];
pub const ACCIDENTAL_RGBA: [f32; 4] = [0.04, 0.04, 0.05, 1.0];
pub const ACTIVE_RGBA: [f32; 4] = [0.50, 0.50, 0.50, 1.0];

pub const CLEAR_RGB: [f64; 3] = [0.55, 0.05, 0.05];

// Lighting
pub const LIGHT_DIR: [f32; 3] = [-0.3, 0.6, -1.0]; // direction light travels
pub const AMBIENT_LEVEL: f32 = 0.55; // 0..1 floor for unlit faces

// Synth envelope (seconds, levels 0..1)
pub const SYNTH_ATTACK_SEC: f64 = 0.005;
pub const SYNTH_DECAY_SEC: f64 = 0.1;
pub const SYNTH_SUSTAIN_LEVEL: f32 = 0.3;
pub const SYNTH_RELEASE_SEC: f64 = 1.0;
pub const SYNTH_PEAK_LEVEL: f32 = 0.8;
pub const SYNTH_START_DELAY_SEC: f64 = 0.005;
pub const MASTER_GAIN: f32 = 0.35;
