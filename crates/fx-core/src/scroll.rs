use crate::config::ScrollConfig;

/// Vertical offset for the section at `index` when the page is scrolled to
/// `scroll_y`. Even sections drift up, odd ones down.
#[inline]
pub fn parallax_offset(scroll_y: f32, index: usize, cfg: &ScrollConfig) -> f32 {
    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
    -(scroll_y * cfg.parallax_speed * sign) * cfg.parallax_damping
}

/// Document-space extent of a page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the section under the navigation probe line.
pub fn active_section(
    scroll_y: f64,
    sections: &[SectionSpan],
    cfg: &ScrollConfig,
) -> Option<usize> {
    let probe = scroll_y + cfg.nav_probe_offset_px;
    sections.iter().position(|s| s.contains(probe))
}

/// Element id targeted by an in-page anchor `href`, e.g. `"#about"`.
/// A bare `"#"` or any other link yields `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
