//! Drifting particle field with distance-faded links.
//!
//! Link search is a plain pairwise pass, O(N^2) per frame. At the default 50
//! particles that is 1225 distance checks and is the intended scale limit.
//! Fields configured above `grid_threshold` bucket particles into a uniform
//! grid whose cell size equals the link distance, so only neighbouring cells
//! are compared.

use crate::config::FieldConfig;
use crate::constants::FIELD_PALETTE;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct FieldParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: &'static str,
}

/// Connection between particles `a < b` with its stroke alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Alpha of a link at `distance`, or `None` when the pair is too far apart.
#[inline]
pub fn link_alpha(distance: f32, link_distance: f32) -> Option<f32> {
    (distance < link_distance).then(|| 1.0 - distance / link_distance)
}

/// Wrap one coordinate to the opposite edge once it leaves `[0, extent]`.
#[inline]
pub fn wrap_coord(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        extent
    } else if v > extent {
        0.0
    } else {
        v
    }
}

pub struct ParticleField {
    particles: Vec<FieldParticle>,
    size: Vec2,
    link_distance: f32,
    grid_threshold: usize,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(cfg: &FieldConfig, size: Vec2, rng: &mut R) -> Self {
        let size = size.max(Vec2::ZERO);
        let max_radius = cfg.max_radius.max(cfg.min_radius + f32::EPSILON);
        let particles = (0..cfg.count)
            .map(|_| FieldParticle {
                pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_speed,
                    (rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_speed,
                ),
                radius: rng.gen_range(cfg.min_radius..max_radius),
                color: FIELD_PALETTE.choose(rng).copied().unwrap_or(FIELD_PALETTE[0]),
            })
            .collect();
        log::debug!(
            "[field] {} particles on {:.0}x{:.0}",
            cfg.count,
            size.x,
            size.y
        );
        Self::from_particles(particles, size, cfg)
    }

    pub fn from_particles(particles: Vec<FieldParticle>, size: Vec2, cfg: &FieldConfig) -> Self {
        Self {
            particles,
            size,
            link_distance: cfg.link_distance,
            grid_threshold: cfg.grid_threshold,
        }
    }

    pub fn particles(&self) -> &[FieldParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Change the surface size. Particles are not repositioned; anything left
    /// outside the new bounds wraps on the next step.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ZERO);
    }

    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.pos.x = wrap_coord(p.pos.x, self.size.x);
            p.pos.y = wrap_coord(p.pos.y, self.size.y);
        }
    }

    /// Collect all links into `out` (cleared first), ordered by `(a, b)`.
    pub fn links_into(&self, out: &mut Vec<Link>) {
        out.clear();
        if self.particles.len() > self.grid_threshold {
            self.links_grid(out);
        } else {
            self.links_pairwise(out);
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        self.links_into(&mut out);
        out
    }

    fn links_pairwise(&self, out: &mut Vec<Link>) {
        for (i, p) in self.particles.iter().enumerate() {
            for (j, q) in self.particles.iter().enumerate().skip(i + 1) {
                if let Some(alpha) = link_alpha(p.pos.distance(q.pos), self.link_distance) {
                    out.push(Link { a: i, b: j, alpha });
                }
            }
        }
    }

    fn links_grid(&self, out: &mut Vec<Link>) {
        let cell = self.link_distance;
        let key = |pos: Vec2| ((pos.x / cell).floor() as i32, (pos.y / cell).floor() as i32);

        let mut grid: FnvHashMap<(i32, i32), SmallVec<[usize; 8]>> = FnvHashMap::default();
        for (i, p) in self.particles.iter().enumerate() {
            grid.entry(key(p.pos)).or_default().push(i);
        }

        for (i, p) in self.particles.iter().enumerate() {
            let (cx, cy) = key(p.pos);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let Some(bucket) = grid.get(&(cx + dx, cy + dy)) else {
                        continue;
                    };
                    for &j in bucket.iter().filter(|&&j| j > i) {
                        let d = p.pos.distance(self.particles[j].pos);
                        if let Some(alpha) = link_alpha(d, self.link_distance) {
                            out.push(Link { a: i, b: j, alpha });
                        }
                    }
                }
            }
        }
        out.sort_by_key(|l| (l.a, l.b));
    }
}
