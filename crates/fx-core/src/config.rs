//! Per-module configuration with defaults taken from [`crate::constants`].
//!
//! The web frontend starts from [`FxConfig::default`], applies any overrides
//! found on the page and calls [`FxConfig::validate`] before wiring modules.

use crate::constants::*;
use crate::error::{FxError, FxResult};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct PointerConfig {
    pub cursor_smoothing: f32,
    pub follower_smoothing: f32,
    pub hover_scale: f32,
    pub min_viewport_width: f64,
    pub burst: BurstConfig,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            cursor_smoothing: CURSOR_SMOOTHING,
            follower_smoothing: FOLLOWER_SMOOTHING,
            hover_scale: FOLLOWER_HOVER_SCALE,
            min_viewport_width: POINTER_MIN_VIEWPORT_WIDTH,
            burst: BurstConfig::default(),
        }
    }
}

impl PointerConfig {
    /// The pointer effect only runs on viewports wider than the breakpoint.
    pub fn enabled_for_width(&self, viewport_width: f64) -> bool {
        viewport_width > self.min_viewport_width
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub speed: f32,
    pub step: f32,
    pub max_frames: u32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            speed: BURST_SPEED,
            step: BURST_STEP,
            max_frames: BURST_MAX_FRAMES,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypingTiming {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub pause: Duration,
    pub next_phrase_delay: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(TYPE_INTERVAL_MS),
            delete_interval: Duration::from_millis(DELETE_INTERVAL_MS),
            pause: Duration::from_millis(PAUSE_MS),
            next_phrase_delay: Duration::from_millis(NEXT_PHRASE_DELAY_MS),
        }
    }
}

impl TypingTiming {
    pub fn validate(&self) -> FxResult<()> {
        let intervals = [
            ("type", self.type_interval),
            ("delete", self.delete_interval),
            ("pause", self.pause),
            ("next phrase", self.next_phrase_delay),
        ];
        for (name, d) in intervals {
            if d.is_zero() {
                return Err(FxError::ZeroInterval(name));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub timing: TypingTiming,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            timing: TypingTiming::default(),
        }
    }
}

/// A CSS `cubic-bezier()` timing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier(pub [f32; 4]);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub curve: CubicBezier,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_angle_deg: f32,
    pub perspective_px: f32,
    pub lift_px: f32,
    pub scale: f32,
    pub enter: Transition,
    pub leave: Transition,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle_deg: TILT_MAX_ANGLE_DEG,
            perspective_px: TILT_PERSPECTIVE_PX,
            lift_px: TILT_LIFT_PX,
            scale: TILT_SCALE,
            enter: Transition {
                duration_ms: TILT_ENTER_MS,
                curve: CubicBezier(TILT_ENTER_CURVE),
            },
            leave: Transition {
                duration_ms: TILT_LEAVE_MS,
                curve: CubicBezier(TILT_LEAVE_CURVE),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub link_distance: f32,
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub grid_threshold: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: FIELD_PARTICLE_COUNT,
            link_distance: FIELD_LINK_DISTANCE,
            max_speed: FIELD_MAX_SPEED,
            min_radius: FIELD_MIN_RADIUS,
            max_radius: FIELD_MAX_RADIUS,
            grid_threshold: FIELD_GRID_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub bottom_margin_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl RevealConfig {
    /// Root margin string in the form an `IntersectionObserver` expects.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    pub parallax_speed: f32,
    pub parallax_damping: f32,
    pub nav_probe_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            parallax_speed: PARALLAX_SPEED,
            parallax_damping: PARALLAX_DAMPING,
            nav_probe_offset_px: NAV_PROBE_OFFSET_PX,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FxConfig {
    pub pointer: PointerConfig,
    pub typing: TypingConfig,
    pub tilt: TiltConfig,
    pub field: FieldConfig,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
}

impl FxConfig {
    pub fn validate(&self) -> FxResult<()> {
        for f in [self.pointer.cursor_smoothing, self.pointer.follower_smoothing] {
            if !(f > 0.0 && f <= 1.0) {
                return Err(FxError::InvalidSmoothing(f));
            }
        }
        if self.pointer.burst.max_frames == 0 {
            return Err(FxError::ZeroInterval("burst"));
        }
        self.typing.timing.validate()?;
        if self.field.count > FIELD_MAX_COUNT {
            return Err(FxError::TooManyParticles(self.field.count, FIELD_MAX_COUNT));
        }
        let d = self.field.link_distance;
        if !(d.is_finite() && d > 0.0) {
            return Err(FxError::InvalidDistance(d));
        }
        let t = self.reveal.threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(FxError::InvalidThreshold(t));
        }
        Ok(())
    }
}
