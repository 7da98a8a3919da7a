// Host-side tests for the typewriter and glitch text effects.

use folio_core::constants::GLITCH_ALPHABET;
use folio_core::rain::Alphabet;
use folio_core::text::{GlitchFrame, GlitchReveal, Typewriter};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn typewriter_reveals_prefixes_in_order() {
    let mut w = Typewriter::new("Hi there");
    let mut frames = Vec::new();
    while let Some(t) = w.tick() {
        frames.push(t.to_string());
    }
    assert_eq!(frames.len(), 8);
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.as_str(), &"Hi there"[..=i]);
    }
    assert!(w.is_done());
    assert_eq!(w.displayed(), "Hi there");
    // Further ticks change nothing.
    assert_eq!(w.tick(), None);
    assert_eq!(w.revealed(), 8);
}

#[test]
fn typewriter_handles_multibyte_and_empty_text() {
    let mut w = Typewriter::new("ｱｲ");
    assert_eq!(w.tick(), Some("ｱ"));
    assert_eq!(w.tick(), Some("ｱｲ"));
    assert_eq!(w.tick(), None);

    let mut empty = Typewriter::new("");
    assert!(empty.is_done());
    assert_eq!(empty.tick(), None);
    assert_eq!(empty.displayed(), "");
}

#[test]
fn glitch_resolves_left_to_right_then_finishes() {
    let mut rng = StdRng::seed_from_u64(4);
    let alphabet = Alphabet::new("glitch", GLITCH_ALPHABET).unwrap();
    let original = "hello world";
    let mut g = GlitchReveal::new(original, 0.5);
    let mut scrambled = 0;
    loop {
        let progress = g.progress();
        match g.tick(&mut rng, &alphabet) {
            GlitchFrame::Scrambled(frame) => {
                scrambled += 1;
                assert_eq!(frame.chars().count(), original.chars().count());
                for (i, (a, b)) in frame.chars().zip(original.chars()).enumerate() {
                    if (i as f32) < progress {
                        assert_eq!(a, b);
                    } else {
                        assert!(alphabet.contains(a));
                    }
                }
            }
            GlitchFrame::Done(text) => {
                assert_eq!(text, original);
                break;
            }
        }
        assert!(scrambled < 100, "glitch never finished");
    }
    // 11 characters at half a character per tick.
    assert_eq!(scrambled, 22);
    assert!(g.is_done());
}

#[test]
fn glitch_restart_scrambles_again() {
    let mut rng = StdRng::seed_from_u64(8);
    let alphabet = Alphabet::new("glitch", GLITCH_ALPHABET).unwrap();
    let mut g = GlitchReveal::new("ABC", 1.0);
    while !matches!(g.tick(&mut rng, &alphabet), GlitchFrame::Done(_)) {}
    g.restart();
    assert_eq!(g.progress(), 0.0);
    assert!(matches!(g.tick(&mut rng, &alphabet), GlitchFrame::Scrambled(_)));
    assert_eq!(g.original(), "ABC");
}

#[test]
fn glitch_on_empty_text_is_immediately_done() {
    let mut rng = StdRng::seed_from_u64(0);
    let alphabet = Alphabet::new("glitch", GLITCH_ALPHABET).unwrap();
    let mut g = GlitchReveal::new("", 0.5);
    assert_eq!(g.tick(&mut rng, &alphabet), GlitchFrame::Done(String::new()));
}
