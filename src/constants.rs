/// DOM hooks and presentation constants for the web frontend.
///
/// Selectors and class names are the contract with the page markup; each
/// effect module no-ops when its hook is missing.
// Pointer
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const HOVER_TARGETS_SELECTOR: &str = "a, button, .project-card, .tech-item";
pub const CURSOR_CLASSES: [&str; 2] = ["cursor", "cursor-follower"];
pub const BURST_Z_INDEX: &str = "9998";
pub const BURST_GLOW_PX: f32 = 10.0;

// Typing
pub const TYPING_SELECTOR: &str = ".typing-text";
pub const PHRASES_ATTR: &str = "data-phrases";
pub const PHRASES_SEPARATOR: char = '|';

// Tilt
pub const TILT_SELECTOR: &str = "[data-tilt]";

// Particle field
pub const FIELD_CONTAINER_ID: &str = "particles-bg";
pub const FIELD_COUNT_ATTR: &str = "data-particles";

// Scroll
pub const REVEAL_SELECTOR: &str = "[data-aos]";
pub const REVEAL_CLASS: &str = "aos-animate";
pub const REVEAL_KEY_ATTR: &str = "data-fx-key";
pub const SECTION_SELECTOR: &str = ".section";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAV_ACTIVE_CLASS: &str = "active";
