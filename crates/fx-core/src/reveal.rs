//! One-way reveal tracking for scroll-triggered elements.
//!
//! Each element starts `Pending` and flips to `Revealed` the first time it is
//! seen intersecting. Nothing moves it back.

use fnv::FnvHashMap;

pub type RevealKey = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Debug, Default)]
pub struct RevealSet {
    states: FnvHashMap<RevealKey, RevealState>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `key`. Already-tracked keys keep their state.
    pub fn observe(&mut self, key: RevealKey) {
        self.states.entry(key).or_insert(RevealState::Pending);
    }

    pub fn state(&self, key: RevealKey) -> Option<RevealState> {
        self.states.get(&key).copied()
    }

    /// Feed one intersection report. Returns `true` only for the report that
    /// performs the `Pending -> Revealed` transition.
    pub fn on_intersection(&mut self, key: RevealKey, intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(&key) else {
            return false;
        };
        if !intersecting || *state == RevealState::Revealed {
            return false;
        }
        *state = RevealState::Revealed;
        log::trace!("[reveal] element {} revealed", key);
        true
    }

    pub fn pending_keys(&self) -> impl Iterator<Item = RevealKey> + '_ {
        self.states
            .iter()
            .filter(|(_, s)| **s == RevealState::Pending)
            .map(|(k, _)| *k)
    }

    pub fn pending_count(&self) -> usize {
        self.pending_keys().count()
    }

    pub fn revealed_count(&self) -> usize {
        self.states.len() - self.pending_count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Fraction of an element's height inside the viewport, with the bottom edge
/// of the viewport pulled up by `bottom_margin`.
///
/// `top` is the element's top relative to the viewport (as reported by
/// `getBoundingClientRect`).
pub fn visible_ratio(top: f64, height: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let view_bottom = (viewport_height - bottom_margin).max(0.0);
    let visible = ((top + height).min(view_bottom) - top.max(0.0)).max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Whether a visibility ratio counts as intersecting for `threshold`.
#[inline]
pub fn meets_threshold(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}
