// Host-side tests for the falling glyph rain.
// The web crate is wasm-only, so these drive the platform-free state directly.

use folio_core::constants::*;
use folio_core::rain::{Alphabet, Glyph, RainField, Step};
use folio_core::{EffectsConfig, FxError, Preset, RainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn refined() -> RainConfig {
    EffectsConfig::for_preset(Preset::Refined).rain
}

fn glyph_at(top_pct: f32, alphabet: &Alphabet, rng: &mut StdRng) -> Glyph {
    let mut g = Glyph::spawn(rng, alphabet);
    g.top_pct = top_pct;
    g.opacity = 1.0;
    g
}

#[test]
fn field_spawns_configured_glyph_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let cfg = refined();
    let field = RainField::spawn(&cfg, &mut rng).unwrap();
    assert_eq!(field.glyphs.len(), 60);
    for g in &field.glyphs {
        assert!((0.0..=100.0).contains(&g.left_pct));
        assert!((0.0..=100.0).contains(&g.top_pct));
        assert_eq!(g.opacity, 1.0);
        assert!(field.alphabet.contains(g.ch));
        assert!(g.delay_s >= 0.0 && g.delay_s <= RAIN_MAX_DELAY_SEC);
        assert!(g.duration_s >= RAIN_MIN_DURATION_SEC);
        assert!(g.duration_s <= RAIN_MIN_DURATION_SEC + RAIN_DURATION_SPAN_SEC);
    }
}

#[test]
fn empty_alphabet_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut cfg = refined();
    cfg.alphabet.clear();
    assert_eq!(
        RainField::spawn(&cfg, &mut rng).err(),
        Some(FxError::EmptyAlphabet("rain.alphabet"))
    );
}

#[test]
fn glyph_fades_and_falls_each_tick() {
    let mut rng = StdRng::seed_from_u64(3);
    let cfg = refined();
    let alphabet = Alphabet::new("rain", &cfg.alphabet).unwrap();
    let mut g = glyph_at(10.0, &alphabet, &mut rng);
    let left = g.left_pct;
    assert_eq!(g.step(&cfg, &mut rng, &alphabet), Step::Moved);
    assert!((g.opacity - (1.0 - cfg.opacity_decay)).abs() < 1e-6);
    assert!((g.top_pct - (10.0 + cfg.fall_step_pct)).abs() < 1e-5);
    assert_eq!(g.left_pct, left);
}

#[test]
fn refined_glyph_resets_after_250_ticks() {
    let mut rng = StdRng::seed_from_u64(11);
    let cfg = refined();
    let alphabet = Alphabet::new("rain", &cfg.alphabet).unwrap();
    let mut g = glyph_at(0.0, &alphabet, &mut rng);
    for tick in 1..250 {
        assert_eq!(g.step(&cfg, &mut rng, &alphabet), Step::Moved, "tick {tick}");
    }
    assert!(g.opacity > 0.0 && g.opacity < 0.01);
    assert_eq!(g.step(&cfg, &mut rng, &alphabet), Step::Recycled);
    assert_eq!(g.top_pct, RAIN_TOP_RESET_PCT);
    assert_eq!(g.opacity, 1.0);
    assert!(alphabet.contains(g.ch));
}

#[test]
fn initial_glyph_resets_after_100_ticks() {
    let mut rng = StdRng::seed_from_u64(5);
    let cfg = EffectsConfig::for_preset(Preset::Initial).rain;
    let alphabet = Alphabet::new("rain", &cfg.alphabet).unwrap();
    let mut g = glyph_at(0.0, &alphabet, &mut rng);
    let steps: Vec<Step> = (0..100).map(|_| g.step(&cfg, &mut rng, &alphabet)).collect();
    assert!(steps[..99].iter().all(|s| *s == Step::Moved));
    assert_eq!(steps[99], Step::Recycled);
}

#[test]
fn glyph_past_bottom_recycles_before_fading() {
    let mut rng = StdRng::seed_from_u64(9);
    let cfg = refined();
    let alphabet = Alphabet::new("rain", &cfg.alphabet).unwrap();
    let mut g = glyph_at(99.9, &alphabet, &mut rng);
    assert_eq!(g.step(&cfg, &mut rng, &alphabet), Step::Recycled);
    assert_eq!(g.top_pct, RAIN_TOP_RESET_PCT);
    assert_eq!(g.opacity, 1.0);
}

#[test]
fn long_run_stays_in_band() {
    let mut rng = StdRng::seed_from_u64(42);
    let cfg = refined();
    let mut field = RainField::spawn(&cfg, &mut rng).unwrap();
    for _ in 0..2000 {
        for g in field.glyphs.iter_mut() {
            g.step(&cfg, &mut rng, &field.alphabet);
            assert!(g.top_pct >= RAIN_TOP_RESET_PCT && g.top_pct <= RAIN_BOTTOM_PCT);
            assert!(g.opacity > 0.0 && g.opacity <= 1.0);
        }
    }
}

#[test]
fn css_positions_are_percentages() {
    let mut rng = StdRng::seed_from_u64(2);
    let alphabet = Alphabet::new("rain", "01").unwrap();
    let mut g = glyph_at(-5.0, &alphabet, &mut rng);
    g.left_pct = 12.5;
    assert_eq!(g.css_left(), "12.5%");
    assert_eq!(g.css_top(), "-5%");
}
