// Host-side tests for pointer links, peer links and the grid index.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spider_core::grid::PeerGrid;
use spider_core::*;

fn particle(id: usize, x: f32, y: f32, hue: f32) -> Particle {
    Particle {
        id,
        origin: Vec2::new(x, y),
        size: 3.0,
        hue,
    }
}

#[test]
fn pointer_link_opacity_fades_linearly() {
    assert!((pointer_link_opacity(0.0, 150.0, 0.4) - 0.4).abs() < 1e-6);
    assert!((pointer_link_opacity(75.0, 150.0, 0.4) - 0.2).abs() < 1e-6);
    assert_eq!(pointer_link_opacity(150.0, 150.0, 0.4), 0.0);
    assert_eq!(pointer_link_opacity(400.0, 150.0, 0.4), 0.0);
    assert!(pointer_link_opacity(0.001, 150.0, 0.4) < 0.4);
}

#[test]
fn pointer_links_only_within_range() {
    let cfg = FieldConfig::default();
    let particles = vec![
        particle(0, 0.0, 0.0, 10.0),
        particle(1, 149.0, 0.0, 20.0),
        particle(2, 150.0, 0.0, 30.0),
        particle(3, 300.0, 0.0, 40.0),
    ];
    let links = pointer_links(&particles, Vec2::ZERO, &cfg);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].from, Vec2::ZERO);
    assert_eq!(links[1].from, Vec2::new(149.0, 0.0));
    for l in &links {
        assert_eq!(l.to, Vec2::ZERO);
        assert_eq!(l.color.saturation, 100.0);
        assert_eq!(l.color.lightness, 60.0);
        assert_eq!(l.width, 1.0);
    }
    assert_eq!(links[1].color.hue, 20.0);
    assert!((links[0].color.alpha - 0.4).abs() < 1e-6);
}

#[test]
fn far_pointer_draws_no_pointer_link() {
    let cfg = FieldConfig::default();
    let particles = vec![particle(0, 0.0, 0.0, 0.0)];
    assert!(pointer_links(&particles, Vec2::new(300.0, 0.0), &cfg).is_empty());
}

#[test]
fn peer_links_use_strict_threshold_and_skip_self() {
    let particles = vec![
        particle(0, 0.0, 0.0, 0.0),
        particle(1, 79.0, 0.0, 0.0),
        particle(2, 80.0, 0.0, 0.0),
        particle(3, 500.0, 500.0, 0.0),
    ];
    let pairs = peer_pairs(&particles, 80.0);
    assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    assert!(pairs.iter().all(|(i, j)| i < j));
}

#[test]
fn peer_links_are_faint_white() {
    let cfg = FieldConfig::default();
    let particles = vec![particle(0, 10.0, 10.0, 200.0), particle(1, 20.0, 10.0, 90.0)];
    let links = peer_links(&particles, &cfg);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].color, Hsla::white(0.1));
    assert_eq!(links[0].width, 0.5);
    assert_eq!(links[0].from, Vec2::new(10.0, 10.0));
    assert_eq!(links[0].to, Vec2::new(20.0, 10.0));
}

#[test]
fn empty_field_has_no_links() {
    let cfg = FieldConfig::default();
    assert!(pointer_links(&[], Vec2::new(5.0, 5.0), &cfg).is_empty());
    assert!(peer_links(&[], &cfg).is_empty());
    assert!(Scene::build(&[], Vec2::ZERO, &cfg).is_empty());
}

#[test]
fn grid_matches_exhaustive_scan() {
    let cfg = FieldConfig::default();
    for seed in [1u64, 2, 3, 99] {
        let s = Surface::new(1600.0, 900.0).unwrap();
        let particles = generate(&s, &cfg, &mut StdRng::seed_from_u64(seed));
        let naive = peer_pairs(&particles, cfg.peer_link_range);
        let grid = PeerGrid::build(&particles, cfg.peer_link_range);
        assert!(grid.cell_count() > 1);
        assert_eq!(grid.pairs(&particles), naive, "seed {seed}");
    }
}

#[test]
fn peer_links_identical_above_and_below_grid_threshold() {
    let s = Surface::new(1200.0, 800.0).unwrap();
    let particles = generate(&s, &FieldConfig::default(), &mut StdRng::seed_from_u64(5));
    let naive_cfg = FieldConfig {
        peer_grid_threshold: usize::MAX,
        ..FieldConfig::default()
    };
    let grid_cfg = FieldConfig {
        peer_grid_threshold: 0,
        ..FieldConfig::default()
    };
    assert_eq!(peer_links(&particles, &naive_cfg), peer_links(&particles, &grid_cfg));
}
