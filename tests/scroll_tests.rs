// Host-side tests for reveal state, parallax, nav highlighting and anchors.

use fx_core::{
    active_section, anchor_target, meets_threshold, parallax_offset, visible_ratio, RevealConfig,
    RevealSet, RevealState, ScrollConfig, SectionSpan,
};

#[test]
fn reveal_is_one_way() {
    let mut set = RevealSet::new();
    set.observe(3);
    assert_eq!(set.state(3), Some(RevealState::Pending));

    assert!(!set.on_intersection(3, false));
    assert!(set.on_intersection(3, true));
    assert_eq!(set.state(3), Some(RevealState::Revealed));

    // Scrolling out and back in never flips it again.
    for intersecting in [false, true, false, false, true] {
        assert!(!set.on_intersection(3, intersecting));
        assert_eq!(set.state(3), Some(RevealState::Revealed));
    }
}

#[test]
fn reobserving_keeps_revealed_state() {
    let mut set = RevealSet::new();
    set.observe(1);
    set.on_intersection(1, true);
    set.observe(1);
    assert_eq!(set.state(1), Some(RevealState::Revealed));
    assert_eq!(set.len(), 1);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut set = RevealSet::new();
    assert!(!set.on_intersection(42, true));
    assert_eq!(set.state(42), None);
    assert!(set.is_empty());
}

#[test]
fn counts_track_transitions() {
    let mut set = RevealSet::new();
    for k in 0..5 {
        set.observe(k);
    }
    set.on_intersection(0, true);
    set.on_intersection(4, true);
    assert_eq!(set.pending_count(), 3);
    assert_eq!(set.revealed_count(), 2);
    let mut pending: Vec<_> = set.pending_keys().collect();
    pending.sort_unstable();
    assert_eq!(pending, vec![1, 2, 3]);
}

#[test]
fn visible_ratio_respects_bottom_margin() {
    // 200px element whose top sits 100px above the viewport bottom. With the
    // trigger line pulled up 100px nothing of it counts as visible yet.
    assert_eq!(visible_ratio(700.0, 200.0, 800.0, 100.0), 0.0);
    assert_eq!(visible_ratio(700.0, 200.0, 800.0, 0.0), 0.5);
    // Fully inside.
    assert_eq!(visible_ratio(100.0, 200.0, 800.0, 100.0), 1.0);
    // Partly scrolled off the top.
    assert_eq!(visible_ratio(-150.0, 200.0, 800.0, 100.0), 0.25);
    // Degenerate element.
    assert_eq!(visible_ratio(100.0, 0.0, 800.0, 100.0), 0.0);
}

#[test]
fn crossing_threshold_reveals_exactly_once() {
    let cfg = RevealConfig::default();
    let viewport_h = 800.0;
    let (section_doc_top, section_h) = (1800.0, 400.0);

    let mut set = RevealSet::new();
    set.observe(2);
    let mut transitions = 0;
    let mut revealed_at = None;

    // Scroll down in 10px steps, then back up.
    let downs = (0..=200).map(|i| i as f64 * 10.0);
    let ups = (0..=200).rev().map(|i| i as f64 * 10.0);
    for scroll_y in downs.chain(ups) {
        let top = section_doc_top - scroll_y;
        let ratio = visible_ratio(top, section_h, viewport_h, cfg.bottom_margin_px);
        if set.on_intersection(2, meets_threshold(ratio, cfg.threshold)) {
            transitions += 1;
            revealed_at.get_or_insert(ratio);
        }
    }
    assert_eq!(transitions, 1);
    assert!(revealed_at.unwrap() >= 0.15);
    assert_eq!(set.state(2), Some(RevealState::Revealed));
}

#[test]
fn meets_threshold_requires_some_visibility() {
    assert!(!meets_threshold(0.0, 0.0));
    assert!(meets_threshold(0.01, 0.0));
    assert!(!meets_threshold(0.14, 0.15));
    assert!(meets_threshold(0.15, 0.15));
}

#[test]
fn root_margin_pulls_bottom_edge_up() {
    assert_eq!(RevealConfig::default().root_margin(), "0px 0px -100px 0px");
}

#[test]
fn parallax_alternates_direction_by_index() {
    let cfg = ScrollConfig::default();
    assert_eq!(parallax_offset(0.0, 0, &cfg), 0.0);
    assert!((parallax_offset(1000.0, 0, &cfg) - (-50.0)).abs() < 1e-4);
    assert!((parallax_offset(1000.0, 1, &cfg) - 50.0).abs() < 1e-4);
    assert!((parallax_offset(1000.0, 2, &cfg) - (-50.0)).abs() < 1e-4);
    // Linear in scroll position.
    let a = parallax_offset(200.0, 3, &cfg);
    let b = parallax_offset(400.0, 3, &cfg);
    assert!((b - 2.0 * a).abs() < 1e-4);
}

#[test]
fn active_section_uses_probe_line() {
    let cfg = ScrollConfig::default();
    let spans = [
        SectionSpan {
            top: 0.0,
            height: 600.0,
        },
        SectionSpan {
            top: 600.0,
            height: 800.0,
        },
        SectionSpan {
            top: 1400.0,
            height: 500.0,
        },
    ];
    assert_eq!(active_section(0.0, &spans, &cfg), Some(0));
    // Probe at 399 + 200 = 599 is still inside the first section.
    assert_eq!(active_section(399.0, &spans, &cfg), Some(0));
    assert_eq!(active_section(400.0, &spans, &cfg), Some(1));
    assert_eq!(active_section(1250.0, &spans, &cfg), Some(2));
    assert_eq!(active_section(5000.0, &spans, &cfg), None);
    assert_eq!(active_section(0.0, &[], &cfg), None);
}

#[test]
fn anchor_target_extracts_fragment_ids() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/page#about"), None);
    assert_eq!(anchor_target("https://example.com"), None);
}
