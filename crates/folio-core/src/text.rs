//! Timed text effects: a one-shot typewriter reveal and a retriggerable
//! scramble that resolves left to right.
//!
//! Both work on `char`s so multi-byte text never gets split mid-character.

use crate::rain::Alphabet;
use rand::Rng;

pub struct Typewriter {
    source: Vec<char>,
    shown: String,
    revealed: usize,
}

impl Typewriter {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            shown: String::with_capacity(source.len()),
            revealed: 0,
        }
    }

    /// Reveal one more character. Returns the new text, or `None` once the
    /// whole source is showing.
    pub fn tick(&mut self) -> Option<&str> {
        let c = *self.source.get(self.revealed)?;
        self.shown.push(c);
        self.revealed += 1;
        Some(&self.shown)
    }

    pub fn displayed(&self) -> &str {
        &self.shown
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.source.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlitchFrame {
    Scrambled(String),
    Done(String),
}

pub struct GlitchReveal {
    original: Vec<char>,
    progress: f32,
    step: f32,
}

impl GlitchReveal {
    pub fn new(original: &str, step: f32) -> Self {
        Self {
            original: original.chars().collect(),
            progress: 0.0,
            step,
        }
    }

    pub fn original(&self) -> String {
        self.original.iter().collect()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Start over from a fully scrambled string.
    pub fn restart(&mut self) {
        self.progress = 0.0;
    }

    pub fn is_done(&self) -> bool {
        self.progress >= self.original.len() as f32
    }

    /// Characters before `progress` show the original, the rest are drawn
    /// from `alphabet`. Once the prefix covers the string the frame is
    /// [`GlitchFrame::Done`] carrying the original text.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, alphabet: &Alphabet) -> GlitchFrame {
        if self.is_done() {
            return GlitchFrame::Done(self.original());
        }
        let progress = self.progress;
        let frame: String = self
            .original
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if (i as f32) < progress {
                    *c
                } else {
                    alphabet.sample(rng)
                }
            })
            .collect();
        self.progress += self.step;
        GlitchFrame::Scrambled(frame)
    }
}
