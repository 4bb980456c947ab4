/// Frontend tuning constants: webcam capture size, per-kind draw sizes and
/// the ornament palette. Kept free of imports so host-side tests can
/// include this module directly.
// Webcam capture resolution; detection runs on tiny frames
pub const VIDEO_WIDTH: u32 = 160;
pub const VIDEO_HEIGHT: u32 = 120;

// Canvas backing-store pixel ratio cap
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Base draw extents per object kind (unit cube scaled by these, then by the
// object's animated scale)
pub const STRUCTURAL_SIZE: f32 = 0.5;
pub const DUST_SIZE: f32 = 0.1;
pub const PHOTO_WIDTH: f32 = 2.0; // multiplied by the image aspect
pub const PHOTO_FRAME_PAD: f32 = 0.2;
pub const PHOTO_HEIGHT: f32 = 2.2;
pub const PHOTO_DEPTH: f32 = 0.15;

// Ornament palette, linear RGB + emissive amount in the fourth channel
pub const GOLD: [f32; 4] = [0.83, 0.69, 0.22, 0.05];
pub const PINE_GREEN: [f32; 4] = [0.0, 0.27, 0.13, 0.0];
pub const BAUBLE_RED: [f32; 4] = [0.73, 0.0, 0.0, 0.0];
pub const DUST_GLOW: [f32; 4] = [0.99, 0.93, 0.65, 0.8];

// Scene clear color (near-black, slightly warm)
pub const CLEAR_COLOR: [f64; 3] = [0.008, 0.006, 0.004];

// The startup greeting ornament
pub const DEFAULT_PHOTO_ASPECT: f32 = 1.0;
