#![cfg(target_arch = "wasm32")]
use crate::background::SceneDriver;
use crate::frame::FrameLoop;
use crate::rain::RainOverlay;
use folio_core::{EffectsConfig, Preset};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod clock;
mod dom;
mod events;
mod frame;
mod rain;
mod render;
mod text;
mod timer;
mod widgets;

/// Long-lived handles for the running effects.
#[derive(Default)]
struct Effects {
    scene: Option<(Rc<RefCell<SceneDriver>>, FrameLoop)>,
    rain: Option<RainOverlay>,
    stopped: bool,
}

thread_local! {
    static EFFECTS: RefCell<Effects> = RefCell::new(Effects::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() != "loading" {
        bootstrap();
    } else {
        dom::listen(document.as_ref(), "DOMContentLoaded", |_: web::Event| bootstrap());
    }
    Ok(())
}

/// Smoothly scroll to the section with `section_id`. Exposed for the page's
/// navigation links.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    events::scroll_to_section(section_id);
}

/// Stop the per-frame effects (background scene and rain).
#[wasm_bindgen(js_name = stopEffects)]
pub fn stop_effects() {
    EFFECTS.with(|fx| {
        let mut fx = fx.borrow_mut();
        fx.stopped = true;
        if let Some((_, task)) = fx.scene.take() {
            if task.is_active() {
                task.cancel();
            }
        }
        if let Some(rain) = fx.rain.take() {
            rain.stop();
        }
    });
    log::info!("[boot] effects stopped");
}

fn read_config(document: &web::Document) -> EffectsConfig {
    let preset = match document.body().and_then(|b| b.get_attribute("data-fx-preset")) {
        Some(name) => name.parse::<Preset>().unwrap_or_else(|e| {
            log::warn!("[boot] {}; using {}", e, Preset::default().name());
            Preset::default()
        }),
        None => Preset::default(),
    };
    let cfg = EffectsConfig::for_preset(preset);
    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[boot] {} preset rejected: {}; using defaults", preset.name(), e);
            EffectsConfig::default()
        }
    }
}

fn bootstrap() {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        log::error!("[boot] no window/document");
        return;
    };
    let cfg = read_config(&document);
    log::info!("[boot] preset={}", cfg.preset.name());

    let scene_cfg = cfg.scene.clone();
    spawn_local(async move {
        if let Some((driver, task)) = SceneDriver::start("threejs-canvas", &scene_cfg).await {
            EFFECTS.with(|fx| {
                let mut fx = fx.borrow_mut();
                // Stopped while the renderer was still coming up.
                if fx.stopped {
                    task.cancel();
                } else {
                    fx.scene = Some((driver, task));
                }
            });
        }
    });

    let rain = RainOverlay::start(&document, "matrix", &cfg.rain);
    EFFECTS.with(|fx| fx.borrow_mut().rain = rain);

    events::wire_parallax(&document, "interactive-cube", &cfg.parallax);

    let spheres = widgets::wire_data_spheres(&document);
    let orbs = widgets::wire_skill_orbs(&document);
    let cards = widgets::wire_project_cards(&document);
    log::debug!("[boot] widgets spheres={} orbs={} cards={}", spheres, orbs, cards);

    events::ScrollNavigator::new(&cfg.nav).wire(&window);
    text::start_typewriter(&document, &cfg.typewriter);
    text::wire_glitch(&document, &cfg.glitch);
    clock::set_current_date(&document, "current-date");

    log::info!("> SYSTEM INITIALIZED");
    log::info!("> 3D Holographic Interface v3.0 Active");
    log::info!("> Neural Connection Established");
    log::info!("> Welcome to the Digital Realm");
}
