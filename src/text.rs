use crate::dom;
use crate::timer::{Interval, Timeout};
use folio_core::rain::Alphabet;
use folio_core::text::{GlitchFrame, GlitchReveal, Typewriter};
use folio_core::{GlitchConfig, TypewriterConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const HERO_SELECTORS: [&str; 2] = [".hero-text .holo-card-3d p", "#hero p"];

/// Clear the hero paragraph and type it back in, one character per tick.
pub fn start_typewriter(document: &web::Document, cfg: &TypewriterConfig) -> bool {
    let Some(el) = HERO_SELECTORS
        .iter()
        .find_map(|sel| dom::query_html(document, sel))
    else {
        log::debug!("[typewriter] no hero paragraph; skipped");
        return false;
    };
    let source = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));

    let writer = Rc::new(RefCell::new(Typewriter::new(&source)));
    let char_delay = cfg.char_delay_ms;
    let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot = interval_slot.clone();
    let start = Timeout::new(cfg.start_delay_ms, move || {
        let slot_tick = slot.clone();
        let interval = Interval::new(char_delay, move || {
            let mut w = writer.borrow_mut();
            match w.tick() {
                Some(text) => el.set_text_content(Some(text)),
                // Fully revealed: stop ticking, no restart.
                None => {
                    if let Some(i) = slot_tick.borrow_mut().take() {
                        i.cancel();
                    }
                }
            }
        });
        match interval {
            Ok(i) => *slot.borrow_mut() = Some(i),
            Err(e) => log::warn!("[typewriter] {:?}", e),
        }
    });
    match start {
        Ok(t) => {
            t.forget();
            true
        }
        Err(e) => {
            log::warn!("[typewriter] {:?}", e);
            false
        }
    }
}

struct GlitchState {
    reveal: GlitchReveal,
    alphabet: Alphabet,
    rng: StdRng,
    running: Option<Interval>,
}

/// Scramble-then-resolve the `.glitch` heading every time the pointer
/// enters it.
pub fn wire_glitch(document: &web::Document, cfg: &GlitchConfig) -> bool {
    let Some(el) = dom::query_html(document, ".glitch") else {
        log::debug!("[glitch] no .glitch element; skipped");
        return false;
    };
    let alphabet = match Alphabet::new("glitch.alphabet", &cfg.alphabet) {
        Ok(a) => a,
        Err(e) => {
            log::warn!("[glitch] {}", e);
            return false;
        }
    };
    let original = el.text_content().unwrap_or_default();
    let state = Rc::new(RefCell::new(GlitchState {
        reveal: GlitchReveal::new(&original, cfg.step),
        alphabet,
        rng: StdRng::from_entropy(),
        running: None,
    }));
    let tick_ms = cfg.tick_ms;
    let restore_ms = cfg.restore_delay_ms;

    let target = el.clone();
    dom::listen(el.as_ref(), "mouseover", move |_: web::Event| {
        // Retrigger: dropping the previous interval clears it.
        {
            let mut s = state.borrow_mut();
            if let Some(i) = s.running.take() {
                i.cancel();
            }
            s.reveal.restart();
        }
        let state_tick = state.clone();
        let el_tick = target.clone();
        let interval = Interval::new(tick_ms, move || {
            let frame = {
                let mut s = state_tick.borrow_mut();
                let GlitchState {
                    reveal, alphabet, rng, ..
                } = &mut *s;
                reveal.tick(rng, alphabet)
            };
            match frame {
                GlitchFrame::Scrambled(text) => el_tick.set_text_content(Some(&text)),
                GlitchFrame::Done(text) => {
                    el_tick.set_text_content(Some(&text));
                    if let Some(i) = state_tick.borrow_mut().running.take() {
                        i.cancel();
                    }
                    let el_restore = el_tick.clone();
                    match Timeout::new(restore_ms, move || {
                        el_restore.set_text_content(Some(&text));
                    }) {
                        Ok(t) => t.forget(),
                        Err(e) => log::warn!("[glitch] restore timer: {:?}", e),
                    }
                }
            }
        });
        match interval {
            Ok(i) => state.borrow_mut().running = Some(i),
            Err(e) => log::warn!("[glitch] {:?}", e),
        }
    });
    true
}
