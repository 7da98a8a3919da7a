use crate::dom;
use crate::timer::Timeout;
use folio_core::constants::{NAV_ALIAS_LABEL, NAV_ALIAS_SECTION};
use folio_core::nav::{current_section, indicator_matches, IndicatorAlias, SectionBounds, TrailingDebounce};
use folio_core::NavConfig;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const ALIAS: IndicatorAlias<'static> = IndicatorAlias {
    section: NAV_ALIAS_SECTION,
    label: NAV_ALIAS_LABEL,
};

/// Keeps the `.nav-dot` matching the section in view marked `active`.
#[derive(Clone)]
pub struct ScrollNavigator {
    lookahead: f64,
    debounce: Rc<RefCell<TrailingDebounce>>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollNavigator {
    pub fn new(cfg: &NavConfig) -> Self {
        Self {
            lookahead: cfg.lookahead_px,
            debounce: Rc::new(RefCell::new(TrailingDebounce::new(cfg.debounce_ms))),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Recompute the current section and toggle indicator classes.
    pub fn update(&self) {
        let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let bounds: Vec<SectionBounds> = dom::query_all_html(&document, "section")
            .iter()
            .map(|s| SectionBounds {
                id: s.id(),
                top: s.offset_top() as f64,
            })
            .collect();
        let current = current_section(&bounds, scroll_y, self.lookahead).unwrap_or("");

        for dot in dom::query_all_html(&document, ".nav-dot") {
            let classes = dot.class_list();
            _ = classes.remove_1("active");
            let label = dot.get_attribute("data-section").unwrap_or_default();
            if indicator_matches(&label, current, ALIAS) {
                _ = classes.add_1("active");
            }
        }
    }

    /// Update now, on every scroll, and once more after each scroll burst
    /// settles.
    pub fn wire(self, window: &web::Window) {
        self.update();

        let immediate = self.clone();
        dom::listen(window.as_ref(), "scroll", move |_: web::Event| {
            immediate.update();
        });

        let debounced = self;
        dom::listen(window.as_ref(), "scroll", move |_: web::Event| {
            debounced.schedule_trailing();
        });
    }

    fn schedule_trailing(&self) {
        let token = self.debounce.borrow_mut().trigger();
        let wait = self.debounce.borrow().wait_ms;
        let nav = self.clone();
        let timeout = Timeout::new(wait, move || {
            if nav.debounce.borrow().is_latest(token) {
                nav.update();
            }
        });
        match timeout {
            // Replacing the previous handle clears its timer.
            Ok(t) => *self.pending.borrow_mut() = Some(t),
            Err(e) => log::warn!("[nav] debounce timer failed: {:?}", e),
        }
    }
}

/// Smoothly scroll the element with `section_id` into view; unknown ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    if let Some(el) = document.get_element_by_id(section_id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    } else {
        log::debug!("[nav] no section #{}", section_id);
    }
}
