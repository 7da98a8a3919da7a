//! Hover and tap feedback for the portfolio cards: data spheres, skill orbs
//! and project cards.

use crate::dom;
use crate::timer::Timeout;
use folio_core::constants::{ANIMATION_RESTART_DELAY_MS, CARD_HOVER_TRANSITION, CARD_LEAVE_TRANSITION};
use folio_core::widgets::{info_popup_text, popup_anchor, toggle_card_flip, OrbLabel};
use wasm_bindgen::JsCast;
use web_sys as web;

const POPUP_STYLE: &str = "position: fixed; background: rgba(0, 0, 0, 0.9); color: var(--neon-cyan); \
    padding: 10px 20px; border-radius: 10px; border: 2px solid var(--neon-cyan); z-index: 1000; \
    font-family: 'Orbitron', monospace; box-shadow: 0 0 20px var(--neon-cyan); pointer-events: none; \
    transition: all 0.3s; font-size: 0.9rem;";
const ORB_LABEL_STYLE: &str = "position: absolute; width: 100%; height: 100%; display: flex; \
    flex-direction: column; justify-content: center; align-items: center;";

/// Clear an element's CSS animation and put it back shortly after, so a
/// click replays it from the start.
fn restart_animation(el: &web::HtmlElement, animation: &'static str) {
    dom::set_style(el, "animation", "none");
    let el = el.clone();
    match Timeout::new(ANIMATION_RESTART_DELAY_MS, move || {
        dom::set_style(&el, "animation", animation);
    }) {
        Ok(t) => t.forget(),
        Err(e) => log::warn!("[widgets] {:?}", e),
    }
}

fn info_popup(document: &web::Document) -> Option<web::HtmlElement> {
    if let Some(p) = dom::query_html(document, ".info-popup") {
        return Some(p);
    }
    let popup = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    popup.set_class_name("info-popup");
    _ = popup.set_attribute("style", POPUP_STYLE);
    document.body()?.append_child(&popup).ok()?;
    Some(popup)
}

pub fn wire_data_spheres(document: &web::Document) -> usize {
    let spheres = dom::query_all_html(document, ".data-sphere");
    for sphere in &spheres {
        let s = sphere.clone();
        dom::listen(sphere.as_ref(), "mouseenter", move |_: web::Event| {
            let Some(document) = dom::window_document() else {
                return;
            };
            let Some(popup) = info_popup(&document) else {
                return;
            };
            let info = s.get_attribute("data-info").unwrap_or_default();
            let rect = s.get_bounding_client_rect();
            let (left, top) = popup_anchor(rect.left(), rect.top(), rect.width());
            popup.set_text_content(Some(&info_popup_text(&info)));
            dom::set_style(&popup, "left", &format!("{left}px"));
            dom::set_style(&popup, "top", &format!("{top}px"));
            dom::set_style(&popup, "transform", "translateX(-50%)");
            dom::set_style(&popup, "opacity", "1");
        });

        dom::listen(sphere.as_ref(), "mouseleave", move |_: web::Event| {
            if let Some(popup) = dom::window_document().and_then(|d| dom::query_html(&d, ".info-popup")) {
                dom::set_style(&popup, "opacity", "0");
            }
        });

        let s = sphere.clone();
        dom::listen(sphere.as_ref(), "click", move |_: web::Event| {
            restart_animation(&s, "floatSphere 15s infinite ease-in-out");
        });
    }
    spheres.len()
}

fn orb_label_node(document: &web::Document, label: &OrbLabel) -> Option<web::HtmlElement> {
    let make = |style: &str, text: &str| -> Option<web::HtmlElement> {
        let el = document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        _ = el.set_attribute("style", style);
        el.set_text_content(Some(text));
        Some(el)
    };
    let wrap = make(ORB_LABEL_STYLE, "")?;
    let percent = make(
        "font-size: 2rem; font-weight: bold; text-shadow: 0 0 15px currentColor;",
        &label.percent_text(),
    )?;
    let skill = make("font-size: 1rem; margin-top: 10px; opacity: 0.9;", &label.skill)?;
    wrap.append_child(&percent).ok()?;
    wrap.append_child(&skill).ok()?;
    Some(wrap)
}

pub fn wire_skill_orbs(document: &web::Document) -> usize {
    let orbs = dom::query_all_html(document, ".skill-orb");
    for orb in &orbs {
        let o = orb.clone();
        dom::listen(orb.as_ref(), "mouseenter", move |_: web::Event| {
            let Some(label) =
                OrbLabel::from_attrs(o.get_attribute("data-percent"), o.get_attribute("data-skill"))
            else {
                return;
            };
            let Some(document) = dom::window_document() else {
                return;
            };
            let Some(node) = orb_label_node(&document, &label) else {
                return;
            };
            _ = o.set_attribute("data-original-html", &o.inner_html());
            o.set_inner_html("");
            _ = o.append_child(&node);
        });

        let o = orb.clone();
        dom::listen(orb.as_ref(), "mouseleave", move |_: web::Event| {
            if let Some(original) = o.get_attribute("data-original-html") {
                o.set_inner_html(&original);
            }
        });

        let o = orb.clone();
        dom::listen(orb.as_ref(), "click", move |_: web::Event| {
            restart_animation(&o, "orbFloat 6s infinite ease-in-out");
        });
    }
    orbs.len()
}

pub fn wire_project_cards(document: &web::Document) -> usize {
    let cards = dom::query_all_html(document, ".project-card");
    for card in &cards {
        let c = card.clone();
        dom::listen(card.as_ref(), "mouseenter", move |_: web::Event| {
            dom::set_style(&c, "transition-duration", CARD_HOVER_TRANSITION);
        });

        let c = card.clone();
        dom::listen(card.as_ref(), "mouseleave", move |_: web::Event| {
            dom::set_style(&c, "transition-duration", CARD_LEAVE_TRANSITION);
        });

        // Touch screens have no hover, so a tap flips the card instead.
        let c = card.clone();
        dom::listen(card.as_ref(), "touchstart", move |_: web::Event| {
            dom::set_style(&c, "transition-duration", CARD_HOVER_TRANSITION);
            let current = c.style().get_property_value("transform").unwrap_or_default();
            dom::set_style(&c, "transform", toggle_card_flip(&current));
        });
    }
    cards.len()
}
