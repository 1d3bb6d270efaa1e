//! Cursor trail smoothing and click bursts.
//!
//! Both are plain per-frame recurrences. The web frontend owns the marker
//! elements and only copies positions, scales and opacities out of here.

use crate::config::{BurstConfig, PointerConfig};
use crate::constants::{BURST_PALETTE, BURST_PARTICLE_COUNT};
use crate::easing::{approach_vec, ease_out_cubic};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// A position chasing a target by a fixed fraction per frame.
#[derive(Clone, Copy, Debug)]
pub struct Smoothed {
    pub pos: Vec2,
    pub factor: f32,
}

impl Smoothed {
    pub fn new(factor: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            factor,
        }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) {
        self.pos = approach_vec(self.pos, target, self.factor);
    }
}

#[derive(Clone, Debug)]
pub struct PointerTrail {
    pub target: Vec2,
    pub cursor: Smoothed,
    pub follower: Smoothed,
    /// Hover targets currently under the pointer. Targets nest, e.g. a link
    /// inside a project card.
    hover_depth: u32,
    hover_scale: f32,
}

impl PointerTrail {
    pub fn new(cfg: &PointerConfig) -> Self {
        Self {
            target: Vec2::ZERO,
            cursor: Smoothed::new(cfg.cursor_smoothing),
            follower: Smoothed::new(cfg.follower_smoothing),
            hover_depth: 0,
            hover_scale: cfg.hover_scale,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Record the pointer entering (`true`) or leaving (`false`) a hover target.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hover_depth = if hovering {
            self.hover_depth.saturating_add(1)
        } else {
            self.hover_depth.saturating_sub(1)
        };
    }

    pub fn is_hovering(&self) -> bool {
        self.hover_depth > 0
    }

    /// Scale applied to the trailing marker this frame.
    pub fn follower_scale(&self) -> f32 {
        if self.is_hovering() {
            self.hover_scale
        } else {
            1.0
        }
    }

    pub fn step(&mut self) {
        self.cursor.step(self.target);
        self.follower.step(self.target);
    }
}

#[derive(Clone, Debug)]
pub struct BurstParticle {
    pub origin: Vec2,
    pub velocity: Vec2,
    /// Displacement from `origin` accumulated so far.
    pub offset: Vec2,
    pub opacity: f32,
    pub color: &'static str,
    pub glow: &'static str,
}

/// One click's worth of radial particles.
#[derive(Clone, Debug)]
pub struct Burst {
    pub id: u64,
    pub particles: SmallVec<[BurstParticle; BURST_PARTICLE_COUNT]>,
    frame: u32,
    max_frames: u32,
    step: f32,
}

impl Burst {
    pub fn spawn<R: Rng + ?Sized>(id: u64, origin: Vec2, cfg: &BurstConfig, rng: &mut R) -> Self {
        let particles = (0..BURST_PARTICLE_COUNT)
            .map(|i| {
                let angle = TAU * i as f32 / BURST_PARTICLE_COUNT as f32;
                BurstParticle {
                    origin,
                    velocity: Vec2::new(angle.cos(), angle.sin()) * cfg.speed,
                    offset: Vec2::ZERO,
                    opacity: 1.0,
                    color: BURST_PALETTE.choose(rng).copied().unwrap_or(BURST_PALETTE[0]),
                    glow: BURST_PALETTE.choose(rng).copied().unwrap_or(BURST_PALETTE[0]),
                }
            })
            .collect();
        Self {
            id,
            particles,
            frame: 0,
            max_frames: cfg.max_frames.max(1),
            step: cfg.step,
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.max_frames
    }

    /// Advance one frame. Returns `false` once the frame budget is spent.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.frame += 1;
        let eased = ease_out_cubic(self.frame as f32 / self.max_frames as f32);
        for p in &mut self.particles {
            p.offset += p.velocity * self.step * (1.0 - eased);
            p.opacity = 1.0 - eased;
        }
        !self.is_finished()
    }
}

/// Everything the cursor effect mutates: the trail and in-flight bursts.
#[derive(Debug)]
pub struct PointerState {
    pub trail: PointerTrail,
    pub bursts: Vec<Burst>,
    burst_cfg: BurstConfig,
    next_id: u64,
}

impl PointerState {
    pub fn new(cfg: &PointerConfig) -> Self {
        Self {
            trail: PointerTrail::new(cfg),
            bursts: Vec::new(),
            burst_cfg: cfg.burst.clone(),
            next_id: 0,
        }
    }

    /// Spawn a burst at `at` and return it so the caller can create visuals.
    pub fn click<R: Rng + ?Sized>(&mut self, at: Vec2, rng: &mut R) -> &Burst {
        let id = self.next_id;
        self.next_id += 1;
        self.bursts.push(Burst::spawn(id, at, &self.burst_cfg, rng));
        log::trace!("[pointer] burst {} at ({:.0},{:.0})", id, at.x, at.y);
        &self.bursts[self.bursts.len() - 1]
    }

    /// Advance the trail and every burst by one frame. Ids of bursts that ran
    /// out of frames are pushed to `finished` and dropped from the state.
    pub fn frame(&mut self, finished: &mut Vec<u64>) {
        self.trail.step();
        self.bursts.retain_mut(|b| {
            if b.step() {
                true
            } else {
                finished.push(b.id);
                false
            }
        });
    }

    pub fn live_particles(&self) -> usize {
        self.bursts.iter().map(|b| b.particles.len()).sum()
    }
}
