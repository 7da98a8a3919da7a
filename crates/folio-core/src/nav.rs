//! Scroll position to active-section mapping.

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// Alternate indicator label for one canonical section id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorAlias<'a> {
    pub section: &'a str,
    pub label: &'a str,
}

/// The last section, in document order, whose top minus `lookahead` is at
/// or above `scroll_y`. `None` when the page is scrolled above every section.
pub fn current_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let mut current = None;
    for s in sections {
        if scroll_y >= s.top - lookahead {
            current = Some(s.id.as_str());
        }
    }
    current
}

/// Whether an indicator carrying `label` marks `current`.
pub fn indicator_matches(label: &str, current: &str, alias: IndicatorAlias<'_>) -> bool {
    if current.is_empty() {
        return false;
    }
    label.to_lowercase() == current || (current == alias.section && label == alias.label)
}

/// Trailing-edge debounce bookkeeping.
///
/// Each event calls [`TrailingDebounce::trigger`] and schedules a timer that
/// carries the returned token; when the timer fires, the handler runs only if
/// the token is still the latest one. A burst therefore produces a single
/// call, `wait_ms` after the last event.
#[derive(Clone, Debug, Default)]
pub struct TrailingDebounce {
    pub wait_ms: i32,
    generation: u64,
}

impl TrailingDebounce {
    pub fn new(wait_ms: i32) -> Self {
        Self {
            wait_ms,
            generation: 0,
        }
    }

    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    #[inline]
    pub fn is_latest(&self, token: u64) -> bool {
        token == self.generation
    }
}
