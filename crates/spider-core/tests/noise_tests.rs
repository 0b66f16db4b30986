// Host-side tests for the noise overlay descriptor and colour strings.

use rand::rngs::StdRng;
use rand::SeedableRng;
use spider_core::*;

#[test]
fn default_params_map_to_frequency_and_opacity() {
    let overlay = NoiseOverlay::new(NoiseParams::default(), &mut StdRng::seed_from_u64(1));
    let uri = overlay.data_uri();
    assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
    assert!(uri.contains("baseFrequency='0.6'"), "{uri}");
    assert!(uri.contains("opacity='0.05'"), "{uri}");
    assert!(uri.contains("type='fractalNoise'"));
    assert!(uri.contains(&format!("filter id='{}'", overlay.filter_id)));
    assert!(uri.contains(&format!("url(%23{})", overlay.filter_id)));
    assert!(uri.ends_with("%3C/svg%3E"));
}

#[test]
fn filter_id_and_seed_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..50 {
        let o = NoiseOverlay::new(NoiseParams::default(), &mut rng);
        let suffix = o.filter_id.strip_prefix("noise-").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert!(o.seed < 100);
    }
}

#[test]
fn out_of_range_params_are_clamped() {
    let p = NoiseParams {
        size: 0,
        density: 250,
        kind: NoiseKind::Color,
    }
    .clamped();
    assert_eq!(p.size, 1);
    assert_eq!(p.density, 100);

    let o = NoiseOverlay::new(
        NoiseParams {
            size: 42,
            density: 100,
            kind: NoiseKind::Mono,
        },
        &mut StdRng::seed_from_u64(2),
    );
    assert_eq!(o.params.size, 10);
    assert!(o.data_uri().contains("baseFrequency='2.0'"));
    assert!(o.data_uri().contains("opacity='1.00'"));
}

#[test]
fn kind_selects_matrix_and_blend_mode() {
    let mut rng = StdRng::seed_from_u64(3);
    let mono = NoiseOverlay::new(NoiseParams::default(), &mut rng);
    assert_eq!(mono.blend_mode(), "multiply");
    assert!(mono.color_matrix().ends_with("0 0 0 1 0"));
    assert!(mono.color_matrix().starts_with("0 0 0 0 0"));

    let color = NoiseOverlay::new(
        NoiseParams {
            kind: NoiseKind::Color,
            ..NoiseParams::default()
        },
        &mut rng,
    );
    assert_eq!(color.blend_mode(), "normal");
    assert!(color.color_matrix().starts_with("1 0 0 0 0"));
    assert!(color.css_background().starts_with("url(\"data:image/svg+xml,"));
}

#[test]
fn hsla_formats_as_css() {
    assert_eq!(
        Hsla::vivid(120.0, 60.0, 0.4).to_string(),
        "hsla(120.0, 100.0%, 60.0%, 0.400)"
    );
    assert_eq!(Hsla::white(0.1).to_string(), "hsla(0.0, 0.0%, 100.0%, 0.100)");
}
