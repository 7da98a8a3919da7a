//! Tunable parameters for every effect.
//!
//! The page ships two parameter sets that differ only in a handful of
//! constants. [`Preset::Refined`] is the default; [`Preset::Initial`] keeps
//! the heavier first pass (more particles and glyphs, faster decay, ASCII
//! glyphs) for pages that still want it.

use crate::constants::*;
use crate::error::FxError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    Initial,
    #[default]
    Refined,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Initial => "initial",
            Preset::Refined => "refined",
        }
    }
}

impl FromStr for Preset {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "initial" => Ok(Preset::Initial),
            "refined" => Ok(Preset::Refined),
            other => Err(FxError::UnknownPreset(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub extent: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub point_size: f32,
    pub point_opacity: f32,
    pub points_spin: [f32; 2],
    pub solid_radius: f32,
    pub solid_position: [f32; 3],
    pub solid_opacity: f32,
    pub solid_spin: [f32; 2],
    pub fog_density: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RainConfig {
    pub glyph_count: usize,
    pub opacity_decay: f32, // per tick
    pub fall_step_pct: f32, // per tick
    pub alphabet: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub start_delay_ms: i32,
    pub char_delay_ms: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlitchConfig {
    pub tick_ms: i32,
    pub step: f32,
    pub restore_delay_ms: i32,
    pub alphabet: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub lookahead_px: f64,
    pub debounce_ms: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub preset: Preset,
    pub scene: SceneConfig,
    pub rain: RainConfig,
    pub parallax: ParallaxConfig,
    pub typewriter: TypewriterConfig,
    pub glitch: GlitchConfig,
    pub nav: NavConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self::for_preset(Preset::default())
    }
}

impl EffectsConfig {
    pub fn for_preset(preset: Preset) -> Self {
        let (particle_count, glyph_count, opacity_decay, fall_step_pct, alphabet) = match preset {
            Preset::Initial => (2000, 80, 0.01, 0.5, RAIN_ALPHABET_INITIAL),
            Preset::Refined => (1500, 60, 0.004, 0.3, RAIN_ALPHABET_REFINED),
        };
        Self {
            preset,
            scene: SceneConfig {
                particle_count,
                extent: POINT_CLOUD_EXTENT,
                saturation: POINT_SATURATION,
                lightness: POINT_LIGHTNESS,
                point_size: POINT_SIZE,
                point_opacity: POINT_OPACITY,
                points_spin: [POINT_SPIN_X, POINT_SPIN_Y],
                solid_radius: SOLID_RADIUS,
                solid_position: SOLID_POSITION,
                solid_opacity: SOLID_OPACITY,
                solid_spin: [SOLID_SPIN_X, SOLID_SPIN_Y],
                fog_density: FOG_DENSITY,
            },
            rain: RainConfig {
                glyph_count,
                opacity_decay,
                fall_step_pct,
                alphabet: alphabet.to_string(),
            },
            parallax: ParallaxConfig {
                scale: PARALLAX_SCALE,
            },
            typewriter: TypewriterConfig {
                start_delay_ms: TYPEWRITER_START_DELAY_MS,
                char_delay_ms: TYPEWRITER_CHAR_DELAY_MS,
            },
            glitch: GlitchConfig {
                tick_ms: GLITCH_TICK_MS,
                step: GLITCH_STEP,
                restore_delay_ms: GLITCH_RESTORE_DELAY_MS,
                alphabet: GLITCH_ALPHABET.to_string(),
            },
            nav: NavConfig {
                lookahead_px: NAV_LOOKAHEAD_PX,
                debounce_ms: SCROLL_DEBOUNCE_MS,
            },
        }
    }

    /// Reject parameter sets that would stall or blow up an effect.
    pub fn validate(&self) -> Result<(), FxError> {
        fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), FxError> {
            if ok {
                Ok(())
            } else {
                Err(FxError::InvalidConfig { field, reason })
            }
        }
        let s = &self.scene;
        check(s.particle_count > 0, "scene.particle_count", "must be positive")?;
        check(s.extent > 0.0, "scene.extent", "must be positive")?;
        check(
            (0.0..=1.0).contains(&s.saturation) && (0.0..=1.0).contains(&s.lightness),
            "scene.saturation/lightness",
            "must lie in [0, 1]",
        )?;
        check(s.point_size > 0.0, "scene.point_size", "must be positive")?;
        check(s.solid_radius > 0.0, "scene.solid_radius", "must be positive")?;
        check(s.fog_density >= 0.0, "scene.fog_density", "must not be negative")?;

        let r = &self.rain;
        check(r.glyph_count > 0, "rain.glyph_count", "must be positive")?;
        check(
            r.opacity_decay > 0.0 && r.opacity_decay <= 1.0,
            "rain.opacity_decay",
            "must lie in (0, 1]",
        )?;
        check(r.fall_step_pct > 0.0, "rain.fall_step_pct", "must be positive")?;
        if r.alphabet.is_empty() {
            return Err(FxError::EmptyAlphabet("rain.alphabet"));
        }

        check(self.parallax.scale > 0.0, "parallax.scale", "must be positive")?;
        check(
            self.typewriter.char_delay_ms > 0,
            "typewriter.char_delay_ms",
            "must be positive",
        )?;
        check(self.glitch.step > 0.0, "glitch.step", "must be positive")?;
        check(self.glitch.tick_ms > 0, "glitch.tick_ms", "must be positive")?;
        if self.glitch.alphabet.is_empty() {
            return Err(FxError::EmptyAlphabet("glitch.alphabet"));
        }
        check(self.nav.debounce_ms >= 0, "nav.debounce_ms", "must not be negative")?;
        Ok(())
    }
}
