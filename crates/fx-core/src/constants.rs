// Tuning constants shared by the core recurrences and the web frontend.

// Pointer trail
pub const CURSOR_SMOOTHING: f32 = 0.25; // primary marker, fast
pub const FOLLOWER_SMOOTHING: f32 = 0.12; // trailing marker, slow
pub const FOLLOWER_HOVER_SCALE: f32 = 1.8;
pub const POINTER_MIN_VIEWPORT_WIDTH: f64 = 768.0; // pointer effect is off at or below this

// Click bursts
pub const BURST_PARTICLE_COUNT: usize = 8;
pub const BURST_SPEED: f32 = 100.0;
pub const BURST_STEP: f32 = 0.015; // fraction of velocity applied per frame
pub const BURST_MAX_FRAMES: u32 = 60;
pub const BURST_PARTICLE_SIZE_PX: f32 = 6.0;
pub const BURST_PALETTE: [&str; 3] = ["#00F7FF", "#FF10F0", "#7C3AED"];

// Typing cycle (milliseconds)
pub const TYPE_INTERVAL_MS: u64 = 100;
pub const DELETE_INTERVAL_MS: u64 = 50;
pub const PAUSE_MS: u64 = 2000;
pub const NEXT_PHRASE_DELAY_MS: u64 = 500;
pub const TYPING_MAX_STEPS_PER_FRAME: u32 = 64;
pub const DEFAULT_PHRASES: [&str; 4] = [
    "Full Stack Developer",
    "AI Enthusiast",
    "Problem Solver",
    "Innovation Builder",
];

// Tilt
pub const TILT_MAX_ANGLE_DEG: f32 = 8.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_LIFT_PX: f32 = 15.0;
pub const TILT_SCALE: f32 = 1.02;
pub const TILT_ENTER_MS: u32 = 100;
pub const TILT_ENTER_CURVE: [f32; 4] = [0.25, 0.46, 0.45, 0.94];
pub const TILT_LEAVE_MS: u32 = 600;
pub const TILT_LEAVE_CURVE: [f32; 4] = [0.34, 1.56, 0.64, 1.0]; // overshoots, "bouncy"

// Particle field
pub const FIELD_PARTICLE_COUNT: usize = 50;
pub const FIELD_LINK_DISTANCE: f32 = 150.0;
pub const FIELD_MAX_SPEED: f32 = 0.25; // per axis, per frame
pub const FIELD_MIN_RADIUS: f32 = 1.0;
pub const FIELD_MAX_RADIUS: f32 = 3.0;
pub const FIELD_GLOW_PX: f64 = 10.0;
pub const FIELD_LINK_WIDTH_PX: f64 = 0.5;
pub const FIELD_PALETTE: [&str; 2] = ["#00F7FF", "#FF10F0"];
// Above this count the O(N^2) link pass is replaced by a uniform grid.
pub const FIELD_GRID_THRESHOLD: usize = 200;
// Hard cap on configured particles; larger page overrides are rejected.
pub const FIELD_MAX_COUNT: usize = 2000;

// Scroll reveal, parallax and navigation
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 100.0;
pub const PARALLAX_SPEED: f32 = 0.5;
pub const PARALLAX_DAMPING: f32 = 0.1;
pub const NAV_PROBE_OFFSET_PX: f64 = 200.0;
