// CSS value formatting. Kept free of web-sys so host tests can include it.

use fx_core::{TiltPose, Transition};
use glam::Vec2;

#[inline]
pub fn translate3d(pos: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", pos.x, pos.y)
}

#[inline]
pub fn translate3d_scaled(pos: Vec2, scale: f32) -> String {
    format!("translate3d({}px, {}px, 0) scale({})", pos.x, pos.y, scale)
}

pub fn tilt_transform(pose: &TiltPose, perspective_px: f32) -> String {
    if pose.is_rest() {
        return format!(
            "perspective({}px) rotateX(0) rotateY(0) translateY(0) scale(1)",
            perspective_px
        );
    }
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px) scale({})",
        perspective_px, pose.rotate_x_deg, pose.rotate_y_deg, -pose.lift_px, pose.scale
    )
}

pub fn transition(property: &str, t: &Transition) -> String {
    let [x1, y1, x2, y2] = t.curve.0;
    format!(
        "{} {}s cubic-bezier({}, {}, {}, {})",
        property,
        t.duration_ms as f32 / 1000.0,
        x1,
        y1,
        x2,
        y2
    )
}

#[inline]
pub fn translate_y(px: f32) -> String {
    format!("translateY({}px)", px)
}

#[inline]
pub fn glow(px: f32, color: &str) -> String {
    format!("0 0 {}px {}", px, color)
}

/// Split a `|`-separated phrase list, dropping blank entries.
pub fn parse_phrases(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
