// Shared tuning constants used by both web and native frontends.

// Trail
pub const TRAIL_CAPACITY: usize = 100; // snapshots kept, oldest evicted first
pub const TRAIL_SATURATION: f64 = 100.0; // percent
pub const TRAIL_LIGHTNESS: f64 = 50.0; // percent

// Live box, created once at startup
pub const SHAPE_START: [f64; 2] = [10.0, 10.0];
pub const SHAPE_SIZE: [f64; 2] = [20.0, 20.0];
pub const SHAPE_COLOR: &str = "red";
pub const TARGET_LINE_COLOR: &str = "black";

// Spring defaults, used until the inputs report their own values
pub const DEFAULT_STIFFNESS: f64 = 0.02;
pub const DEFAULT_DAMPING: f64 = 0.3;
pub const DEFAULT_MASS: f64 = 10.0;

// Frame timing (milliseconds)
pub const MAX_FRAME_DELTA_MS: f64 = 1000.0; // longer gaps (backgrounded tab) are clamped
pub const MAX_STEP_MS: f64 = 50.0; // larger deltas are split into equal sub-steps
