use crate::config::TiltConfig;
use glam::Vec2;

/// Card pose under the pointer. Pure function of pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    /// Upward lift in px (applied as a negative `translateY`).
    pub lift_px: f32,
    pub scale: f32,
}

impl TiltPose {
    pub const REST: TiltPose = TiltPose {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        lift_px: 0.0,
        scale: 1.0,
    };

    /// Pose for a pointer at `local` (relative to the card's top-left corner)
    /// on a card of `size`. Degenerate cards stay at rest.
    pub fn from_pointer(local: Vec2, size: Vec2, cfg: &TiltConfig) -> Self {
        let center = size * 0.5;
        if center.x <= 0.0 || center.y <= 0.0 {
            return Self::REST;
        }
        Self {
            rotate_x_deg: ((local.y - center.y) / center.y) * cfg.max_angle_deg,
            rotate_y_deg: ((center.x - local.x) / center.x) * cfg.max_angle_deg,
            lift_px: cfg.lift_px,
            scale: cfg.scale,
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }
}
