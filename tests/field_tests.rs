// Host-side tests for the particle field.
//
// The default field links particles with an O(N^2) pairwise pass. That is the
// intended cost at 50 particles; the grid path only kicks in above
// `FIELD_GRID_THRESHOLD` and must agree with the pairwise result.

use fx_core::constants::{FIELD_GRID_THRESHOLD, FIELD_PARTICLE_COUNT};
use fx_core::{link_alpha, wrap_coord, FieldConfig, FieldParticle, ParticleField};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn particle(x: f32, y: f32, vx: f32, vy: f32) -> FieldParticle {
    FieldParticle {
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        radius: 2.0,
        color: "#00F7FF",
    }
}

fn in_bounds(field: &ParticleField) -> bool {
    let size = field.size();
    field
        .particles()
        .iter()
        .all(|p| (0.0..=size.x).contains(&p.pos.x) && (0.0..=size.y).contains(&p.pos.y))
}

#[test]
fn default_field_has_fifty_particles_inside_the_surface() {
    let cfg = FieldConfig::default();
    let field = ParticleField::new(&cfg, Vec2::new(1280.0, 720.0), &mut StdRng::seed_from_u64(1));
    assert_eq!(field.len(), FIELD_PARTICLE_COUNT);
    assert_eq!(field.len(), 50);
    assert!(in_bounds(&field));
    for p in field.particles() {
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
        assert!(p.radius >= 1.0 && p.radius < 3.0);
        assert!(p.color == "#00F7FF" || p.color == "#FF10F0");
    }
}

#[test]
fn count_and_bounds_hold_across_many_ticks() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = ParticleField::new(&cfg, Vec2::new(300.0, 200.0), &mut rng);
    for _ in 0..5000 {
        field.step();
        assert_eq!(field.len(), 50);
        assert!(in_bounds(&field));
    }
}

#[test]
fn wrap_sends_particles_to_the_opposite_edge() {
    assert_eq!(wrap_coord(-0.1, 100.0), 100.0);
    assert_eq!(wrap_coord(100.1, 100.0), 0.0);
    assert_eq!(wrap_coord(100.0, 100.0), 100.0);
    assert_eq!(wrap_coord(0.0, 100.0), 0.0);

    let cfg = FieldConfig::default();
    let mut field = ParticleField::from_particles(
        vec![particle(0.1, 50.0, -0.2, 0.0), particle(99.9, 99.9, 0.2, 0.2)],
        Vec2::new(100.0, 100.0),
        &cfg,
    );
    field.step();
    let ps = field.particles();
    assert_eq!(ps[0].pos.x, 100.0);
    assert_eq!(ps[1].pos, Vec2::new(0.0, 0.0));
}

#[test]
fn shrinking_the_surface_wraps_outliers_on_next_step() {
    let cfg = FieldConfig::default();
    let mut field = ParticleField::from_particles(
        vec![particle(900.0, 10.0, 0.1, 0.0)],
        Vec2::new(1000.0, 100.0),
        &cfg,
    );
    field.resize(Vec2::new(500.0, 100.0));
    // Resize only changes the surface; the particle stays put until it moves.
    assert_eq!(field.particles()[0].pos.x, 900.0);
    field.step();
    assert_eq!(field.particles()[0].pos.x, 0.0);
    assert!(in_bounds(&field));
}

#[test]
fn link_alpha_fades_linearly_with_distance() {
    assert_eq!(link_alpha(0.0, 150.0), Some(1.0));
    assert_eq!(link_alpha(75.0, 150.0), Some(0.5));
    assert!((link_alpha(149.0, 150.0).unwrap() - 1.0 / 150.0).abs() < 1e-6);
    assert_eq!(link_alpha(150.0, 150.0), None);
    assert_eq!(link_alpha(400.0, 150.0), None);
}

#[test]
fn links_connect_pairs_closer_than_threshold_once() {
    let cfg = FieldConfig::default();
    let field = ParticleField::from_particles(
        vec![
            particle(0.0, 0.0, 0.0, 0.0),
            particle(90.0, 120.0, 0.0, 0.0), // 150 from #0: not linked
            particle(60.0, 80.0, 0.0, 0.0),  // 100 from #0, 50 from #1
            particle(900.0, 900.0, 0.0, 0.0),
        ],
        Vec2::new(1000.0, 1000.0),
        &cfg,
    );
    let links = field.links();
    let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
    assert_eq!(pairs, vec![(0, 2), (1, 2)]);
    assert!((links[0].alpha - (1.0 - 100.0 / 150.0)).abs() < 1e-5);
    assert!((links[1].alpha - (1.0 - 50.0 / 150.0)).abs() < 1e-5);
}

#[test]
fn pairwise_cost_is_quadratic_at_default_size() {
    // Every particle within range of every other: N*(N-1)/2 links.
    let cfg = FieldConfig::default();
    let particles = (0..FIELD_PARTICLE_COUNT)
        .map(|i| particle(i as f32, 0.0, 0.0, 0.0))
        .collect();
    let field = ParticleField::from_particles(particles, Vec2::new(100.0, 100.0), &cfg);
    assert_eq!(field.links().len(), 50 * 49 / 2);
}

#[test]
fn grid_search_matches_pairwise_search() {
    let count = FIELD_GRID_THRESHOLD + 150;
    let size = Vec2::new(1600.0, 900.0);
    let mut rng = StdRng::seed_from_u64(99);

    let grid_cfg = FieldConfig {
        count,
        ..FieldConfig::default()
    };
    let mut grid_field = ParticleField::new(&grid_cfg, size, &mut rng);
    for _ in 0..10 {
        grid_field.step();
    }

    let brute_cfg = FieldConfig {
        grid_threshold: usize::MAX,
        ..grid_cfg.clone()
    };
    let brute_field =
        ParticleField::from_particles(grid_field.particles().to_vec(), size, &brute_cfg);

    let grid_links = grid_field.links();
    let brute_links = brute_field.links();
    assert!(!brute_links.is_empty());
    assert_eq!(grid_links, brute_links);
}
