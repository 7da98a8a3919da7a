use crate::dom;
use folio_core::pointer::{parallax_angles, REST_TRANSFORM};
use folio_core::ParallaxConfig;
use web_sys as web;

/// Tilt `#element_id` toward the pointer on every document `mousemove`;
/// settle back to the resting angle when the pointer leaves the element.
pub fn wire_parallax(document: &web::Document, element_id: &str, cfg: &ParallaxConfig) -> bool {
    let Some(cube) = dom::html_by_id(document, element_id) else {
        log::debug!("[parallax] missing #{}; skipped", element_id);
        return false;
    };
    let scale = cfg.scale;

    let cube_move = cube.clone();
    dom::listen(document.as_ref(), "mousemove", move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::viewport_size(&window);
        let angles = parallax_angles(
            w as f32,
            h as f32,
            ev.client_x() as f32,
            ev.client_y() as f32,
            scale,
        );
        dom::set_style(&cube_move, "transform", &angles.css_transform());
    });

    let cube_leave = cube.clone();
    dom::listen(cube.as_ref(), "mouseleave", move |_: web::Event| {
        dom::set_style(&cube_leave, "transform", REST_TRANSFORM);
    });
    true
}
