// Host-side tests for effect presets and their validation rules.

use folio_core::constants::*;
use folio_core::{EffectsConfig, FxError, Preset};

#[test]
fn default_is_refined() {
    let cfg = EffectsConfig::default();
    assert_eq!(cfg.preset, Preset::Refined);
    assert_eq!(cfg.scene.particle_count, 1500);
    assert_eq!(cfg.rain.glyph_count, 60);
    assert_eq!(cfg.rain.opacity_decay, 0.004);
    assert_eq!(cfg.rain.fall_step_pct, 0.3);
    assert_eq!(cfg.rain.alphabet, RAIN_ALPHABET_REFINED);
}

#[test]
fn initial_preset_differs_only_in_density_and_glyphs() {
    let initial = EffectsConfig::for_preset(Preset::Initial);
    let refined = EffectsConfig::for_preset(Preset::Refined);
    assert_eq!(initial.scene.particle_count, 2000);
    assert_eq!(initial.rain.glyph_count, 80);
    assert_eq!(initial.rain.opacity_decay, 0.01);
    assert_eq!(initial.rain.fall_step_pct, 0.5);
    assert_eq!(initial.rain.alphabet, RAIN_ALPHABET_INITIAL);

    assert_eq!(initial.parallax, refined.parallax);
    assert_eq!(initial.typewriter, refined.typewriter);
    assert_eq!(initial.glitch, refined.glitch);
    assert_eq!(initial.nav, refined.nav);
    assert_eq!(initial.scene.solid_radius, refined.scene.solid_radius);
}

#[test]
fn both_presets_validate() {
    for preset in [Preset::Initial, Preset::Refined] {
        assert_eq!(EffectsConfig::for_preset(preset).validate(), Ok(()));
    }
}

#[test]
fn preset_names_parse_case_insensitively() {
    assert_eq!("refined".parse::<Preset>(), Ok(Preset::Refined));
    assert_eq!(" Initial ".parse::<Preset>(), Ok(Preset::Initial));
    assert_eq!(
        "neon".parse::<Preset>(),
        Err(FxError::UnknownPreset("neon".to_string()))
    );
    for preset in [Preset::Initial, Preset::Refined] {
        assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
    }
}

#[test]
fn validate_rejects_bad_rain_parameters() {
    let mut cfg = EffectsConfig::default();
    cfg.rain.opacity_decay = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(FxError::InvalidConfig {
            field: "rain.opacity_decay",
            ..
        })
    ));

    let mut cfg = EffectsConfig::default();
    cfg.rain.opacity_decay = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = EffectsConfig::default();
    cfg.rain.glyph_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = EffectsConfig::default();
    cfg.rain.alphabet.clear();
    assert_eq!(cfg.validate(), Err(FxError::EmptyAlphabet("rain.alphabet")));
}

#[test]
fn validate_rejects_bad_scene_and_text_parameters() {
    let mut cfg = EffectsConfig::default();
    cfg.scene.particle_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = EffectsConfig::default();
    cfg.parallax.scale = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = EffectsConfig::default();
    cfg.glitch.step = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = EffectsConfig::default();
    cfg.glitch.alphabet.clear();
    assert_eq!(cfg.validate(), Err(FxError::EmptyAlphabet("glitch.alphabet")));
}

#[test]
fn errors_render_readable_messages() {
    let e = FxError::InvalidConfig {
        field: "rain.glyph_count",
        reason: "must be positive",
    };
    assert_eq!(e.to_string(), "invalid config `rain.glyph_count`: must be positive");
    assert_eq!(
        FxError::UnknownPreset("x".into()).to_string(),
        "unknown effects preset `x`"
    );
}
