use crate::dom;
use crate::frame::{FrameLoop, LoopControl};
use folio_core::rain::{Alphabet, Glyph, RainField, Step};
use folio_core::RainConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The spawned glyph elements and their per-glyph frame tasks.
pub struct RainOverlay {
    tasks: Vec<FrameLoop>,
}

impl RainOverlay {
    /// Fill `#container_id` with `cfg.glyph_count` glyphs, each running its
    /// own frame task. Returns `None` when the container is absent.
    pub fn start(document: &web::Document, container_id: &str, cfg: &RainConfig) -> Option<Self> {
        let Some(container) = document.get_element_by_id(container_id) else {
            log::debug!("[rain] missing #{}; skipped", container_id);
            return None;
        };
        let mut rng = StdRng::from_entropy();
        let field = match RainField::spawn(cfg, &mut rng) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("[rain] {}", e);
                return None;
            }
        };
        let alphabet = Rc::new(field.alphabet);
        let cfg = Rc::new(cfg.clone());

        let mut tasks = Vec::with_capacity(field.glyphs.len());
        for glyph in field.glyphs {
            let el = match create_glyph_element(document, &glyph) {
                Some(el) => el,
                None => continue,
            };
            if container.append_child(&el).is_err() {
                continue;
            }
            match animate_glyph(el, glyph, cfg.clone(), alphabet.clone()) {
                Ok(task) => tasks.push(task),
                Err(e) => log::warn!("[rain] glyph task failed: {:?}", e),
            }
        }
        log::info!("[rain] {} glyphs falling", tasks.len());
        Some(Self { tasks })
    }

    pub fn stop(&self) {
        for t in &self.tasks {
            t.cancel();
        }
    }
}

fn create_glyph_element(document: &web::Document, glyph: &Glyph) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name("matrix-char");
    el.set_text_content(Some(&glyph.ch.to_string()));
    dom::set_style(&el, "left", &glyph.css_left());
    dom::set_style(&el, "top", &glyph.css_top());
    dom::set_style(&el, "animation-delay", &format!("{}s", glyph.delay_s));
    dom::set_style(&el, "animation-duration", &format!("{}s", glyph.duration_s));
    Some(el)
}

fn animate_glyph(
    el: web::HtmlElement,
    mut glyph: Glyph,
    cfg: Rc<RainConfig>,
    alphabet: Rc<Alphabet>,
) -> anyhow::Result<FrameLoop> {
    let mut rng = StdRng::from_entropy();
    FrameLoop::start(move || {
        if glyph.step(&cfg, &mut rng, &alphabet) == Step::Recycled {
            el.set_text_content(Some(&glyph.ch.to_string()));
        }
        dom::set_style(&el, "opacity", &glyph.opacity.to_string());
        dom::set_style(&el, "top", &glyph.css_top());
        LoopControl::Continue
    })
}
