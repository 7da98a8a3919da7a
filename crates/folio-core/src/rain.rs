//! Falling glyph rain.
//!
//! Every glyph is independent: it owns its position, opacity and character
//! and is stepped once per display refresh. A glyph that drops past the
//! bottom of the band or fades out is recycled in place just above the top.

use crate::config::RainConfig;
use crate::constants::*;
use crate::error::FxError;
use rand::Rng;

/// Non-empty set of characters a glyph can show.
#[derive(Clone, Debug, PartialEq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn new(name: &'static str, chars: &str) -> Result<Self, FxError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(FxError::EmptyAlphabet(name));
        }
        Ok(Self { chars })
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Moved,
    Recycled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub left_pct: f32, // fixed for the glyph's lifetime
    pub top_pct: f32,
    pub opacity: f32,
    pub ch: char,
    pub delay_s: f32,
    pub duration_s: f32,
}

impl Glyph {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, alphabet: &Alphabet) -> Self {
        Self {
            left_pct: rng.gen::<f32>() * 100.0,
            top_pct: rng.gen::<f32>() * 100.0,
            opacity: 1.0,
            ch: alphabet.sample(rng),
            delay_s: rng.gen::<f32>() * RAIN_MAX_DELAY_SEC,
            duration_s: RAIN_MIN_DURATION_SEC + rng.gen::<f32>() * RAIN_DURATION_SPAN_SEC,
        }
    }

    /// Advance one tick: fall by `fall_step_pct`, fade by `opacity_decay`,
    /// and recycle when out of the band or fully faded.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        cfg: &RainConfig,
        rng: &mut R,
        alphabet: &Alphabet,
    ) -> Step {
        self.opacity -= cfg.opacity_decay;
        self.top_pct += cfg.fall_step_pct;
        if self.opacity <= OPACITY_EPSILON || self.top_pct > RAIN_BOTTOM_PCT {
            self.recycle(rng, alphabet);
            return Step::Recycled;
        }
        Step::Moved
    }

    fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R, alphabet: &Alphabet) {
        self.top_pct = RAIN_TOP_RESET_PCT;
        self.opacity = 1.0;
        self.ch = alphabet.sample(rng);
    }

    pub fn css_left(&self) -> String {
        format!("{}%", self.left_pct)
    }

    pub fn css_top(&self) -> String {
        format!("{}%", self.top_pct)
    }
}

/// Initial glyph set for the overlay.
pub struct RainField {
    pub alphabet: Alphabet,
    pub glyphs: Vec<Glyph>,
}

impl RainField {
    pub fn spawn<R: Rng + ?Sized>(cfg: &RainConfig, rng: &mut R) -> Result<Self, FxError> {
        let alphabet = Alphabet::new("rain.alphabet", &cfg.alphabet)?;
        let glyphs = (0..cfg.glyph_count)
            .map(|_| Glyph::spawn(rng, &alphabet))
            .collect();
        Ok(Self { alphabet, glyphs })
    }
}
