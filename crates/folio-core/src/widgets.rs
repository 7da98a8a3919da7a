use crate::constants::POPUP_OFFSET_PX;

pub const FLIPPED: &str = "rotateY(180deg)";
pub const UNFLIPPED: &str = "rotateY(0deg)";

#[inline]
pub fn info_popup_text(info: &str) -> String {
    format!("> {info}")
}

/// Popup anchor: horizontally centred on the element, just above it.
#[inline]
pub fn popup_anchor(rect_left: f64, rect_top: f64, rect_width: f64) -> (f64, f64) {
    (rect_left + rect_width / 2.0, rect_top - POPUP_OFFSET_PX)
}

/// Next transform for a project card tapped on a touch screen.
#[inline]
pub fn toggle_card_flip(current_transform: &str) -> &'static str {
    if current_transform.contains("180deg") {
        UNFLIPPED
    } else {
        FLIPPED
    }
}

/// Hover label for a skill orb, read from its `data-percent`/`data-skill`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrbLabel {
    pub percent: String,
    pub skill: String,
}

impl OrbLabel {
    pub fn from_attrs(percent: Option<String>, skill: Option<String>) -> Option<Self> {
        Some(Self {
            percent: percent?.trim().to_string(),
            skill: skill?.trim().to_string(),
        })
    }

    pub fn percent_text(&self) -> String {
        format!("{}%", self.percent)
    }
}
