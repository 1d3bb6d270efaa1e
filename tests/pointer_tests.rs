// Host-side tests for cursor smoothing and click bursts.

use fx_core::constants::{BURST_MAX_FRAMES, BURST_PARTICLE_COUNT};
use fx_core::easing::{approach, ease_out_cubic, steps_to_converge};
use fx_core::{Burst, BurstConfig, PointerConfig, PointerState, PointerTrail};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn smoothing_converges_monotonically_without_overshoot() {
    for &factor in &[0.05_f32, 0.12, 0.25, 0.5, 0.9, 1.0] {
        let target = 500.0_f32;
        let mut pos = 0.0_f32;
        let mut prev_gap = target - pos;
        for _ in 0..400 {
            pos = approach(pos, target, factor);
            let gap = target - pos;
            assert!(gap >= 0.0, "overshoot with factor {factor}: pos={pos}");
            assert!(gap <= prev_gap, "gap grew with factor {factor}");
            prev_gap = gap;
        }
        assert!((target - pos).abs() < 1e-2, "factor {factor} did not settle");
    }
}

#[test]
fn smoothing_reaches_epsilon_within_predicted_steps() {
    let (distance, eps) = (800.0_f32, 0.5_f32);
    for &factor in &[0.12_f32, 0.25, 0.6] {
        let n = steps_to_converge(distance, factor, eps);
        let mut pos = 0.0_f32;
        for _ in 0..n {
            pos = approach(pos, distance, factor);
        }
        assert!(
            (distance - pos).abs() <= eps + 1e-3,
            "factor {factor}: {} steps left gap {}",
            n,
            distance - pos
        );
        // One step fewer is not enough.
        let mut short = 0.0_f32;
        for _ in 0..n.saturating_sub(1) {
            short = approach(short, distance, factor);
        }
        assert!((distance - short).abs() > eps - 1e-3);
    }
}

#[test]
fn steps_to_converge_edge_cases() {
    assert_eq!(steps_to_converge(0.1, 0.25, 0.5), 0);
    assert_eq!(steps_to_converge(100.0, 1.0, 0.01), 1);
    // A non-positive factor never closes the gap.
    assert_eq!(steps_to_converge(100.0, 0.0, 0.1), u32::MAX);
    assert_eq!(steps_to_converge(100.0, -0.5, 0.1), u32::MAX);
    assert_eq!(steps_to_converge(100.0, f32::NAN, 0.1), u32::MAX);
    // Slower factors need more steps.
    assert!(steps_to_converge(100.0, 0.12, 0.1) > steps_to_converge(100.0, 0.25, 0.1));
}

#[test]
fn follower_lags_behind_cursor() {
    let mut trail = PointerTrail::new(&PointerConfig::default());
    trail.set_target(Vec2::new(200.0, 100.0));
    trail.step();
    assert!((trail.cursor.pos.x - 50.0).abs() < 1e-4);
    assert!((trail.follower.pos.x - 24.0).abs() < 1e-4);
    for _ in 0..10 {
        trail.step();
        assert!(trail.follower.pos.x < trail.cursor.pos.x);
    }
}

#[test]
fn hover_scales_only_the_follower() {
    let mut trail = PointerTrail::new(&PointerConfig::default());
    assert_eq!(trail.follower_scale(), 1.0);
    trail.set_hovering(true);
    assert!((trail.follower_scale() - 1.8).abs() < 1e-6);
    trail.set_hovering(false);
    assert_eq!(trail.follower_scale(), 1.0);
}

#[test]
fn nested_hover_targets_keep_the_scale() {
    // A link inside a project card: enter card, enter link, leave link.
    let mut trail = PointerTrail::new(&PointerConfig::default());
    trail.set_hovering(true);
    trail.set_hovering(true);
    trail.set_hovering(false);
    assert!(trail.is_hovering());
    assert!((trail.follower_scale() - 1.8).abs() < 1e-6);

    trail.set_hovering(false);
    assert!(!trail.is_hovering());
    // A stray leave never drives the count below zero.
    trail.set_hovering(false);
    trail.set_hovering(true);
    assert!(trail.is_hovering());
}

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!(ease_out_cubic(0.5) > 0.5);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn burst_spawns_eight_radial_particles() {
    let burst = Burst::spawn(0, Vec2::new(100.0, 100.0), &BurstConfig::default(), &mut rng());
    assert_eq!(burst.particles.len(), BURST_PARTICLE_COUNT);
    assert_eq!(BURST_PARTICLE_COUNT, 8);

    // First particle heads right, third straight down (screen y grows downward).
    let p0 = &burst.particles[0];
    assert!((p0.velocity.x - 100.0).abs() < 1e-3 && p0.velocity.y.abs() < 1e-3);
    let p2 = &burst.particles[2];
    assert!(p2.velocity.x.abs() < 1e-3 && (p2.velocity.y - 100.0).abs() < 1e-3);

    let sum: Vec2 = burst.particles.iter().map(|p| p.velocity).sum();
    assert!(sum.length() < 1e-3, "velocities should cancel out, got {sum:?}");
}

#[test]
fn burst_opacity_strictly_decreases_to_zero() {
    let mut burst = Burst::spawn(0, Vec2::ZERO, &BurstConfig::default(), &mut rng());
    let mut prev = burst.particles[0].opacity;
    assert_eq!(prev, 1.0);
    for frame in 1..=BURST_MAX_FRAMES {
        let alive = burst.step();
        let op = burst.particles[0].opacity;
        assert!(op < prev, "opacity did not drop at frame {frame}");
        prev = op;
        assert_eq!(alive, frame < BURST_MAX_FRAMES);
    }
    assert_eq!(prev, 0.0);
    assert!(burst.is_finished());
    assert!(!burst.step());
}

#[test]
fn burst_particles_slow_down_and_stop() {
    let mut burst = Burst::spawn(0, Vec2::ZERO, &BurstConfig::default(), &mut rng());
    let mut last = 0.0_f32;
    let mut last_step = f32::MAX;
    while burst.step() {
        let d = burst.particles[0].offset.x;
        let step = d - last;
        assert!(step > 0.0 && step <= last_step);
        last_step = step;
        last = d;
    }
    // 60 frames of 100 * 0.015 * (1 - eased) stays well under 60 * 1.5.
    assert!(last > 10.0 && last < 90.0, "travel {last}");
}

#[test]
fn click_end_to_end_removes_all_particles_by_frame_sixty() {
    let mut state = PointerState::new(&PointerConfig::default());
    let mut rng = rng();
    let id = state.click(Vec2::new(100.0, 100.0), &mut rng).id;
    assert_eq!(state.live_particles(), 8);
    assert!(state
        .bursts
        .iter()
        .flat_map(|b| &b.particles)
        .all(|p| p.origin == Vec2::new(100.0, 100.0)));

    let mut finished = Vec::new();
    for frame in 1..=BURST_MAX_FRAMES {
        state.frame(&mut finished);
        if frame < BURST_MAX_FRAMES {
            assert_eq!(state.live_particles(), 8, "removed early at frame {frame}");
            assert!(finished.is_empty());
        }
    }
    assert_eq!(state.live_particles(), 0);
    assert_eq!(finished, vec![id]);
}

#[test]
fn overlapping_clicks_get_distinct_ids() {
    let mut state = PointerState::new(&PointerConfig::default());
    let mut rng = rng();
    let a = state.click(Vec2::ZERO, &mut rng).id;
    let mut finished = Vec::new();
    for _ in 0..30 {
        state.frame(&mut finished);
    }
    let b = state.click(Vec2::ONE, &mut rng).id;
    assert_ne!(a, b);
    assert_eq!(state.live_particles(), 16);
    for _ in 0..30 {
        state.frame(&mut finished);
    }
    assert_eq!(finished, vec![a]);
    assert_eq!(state.live_particles(), 8);
}

#[test]
fn pointer_disabled_at_or_below_breakpoint() {
    let cfg = PointerConfig::default();
    assert!(!cfg.enabled_for_width(375.0));
    assert!(!cfg.enabled_for_width(768.0));
    assert!(cfg.enabled_for_width(769.0));
}
