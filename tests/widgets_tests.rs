// Host-side tests for parallax angles, card widgets and the date line.

use folio_core::clock::{format_system_time, DateParts};
use folio_core::constants::PARALLAX_SCALE;
use folio_core::pointer::{parallax_angles, REST_TRANSFORM};
use folio_core::widgets::{info_popup_text, popup_anchor, toggle_card_flip, OrbLabel, FLIPPED, UNFLIPPED};

#[test]
fn pointer_at_centre_is_level() {
    let a = parallax_angles(1000.0, 800.0, 500.0, 400.0, PARALLAX_SCALE);
    assert_eq!(a.rotate_x_deg, 0.0);
    assert_eq!(a.rotate_y_deg, 0.0);
    assert_eq!(a.css_transform(), "rotateX(0deg) rotateY(0deg)");
}

#[test]
fn pointer_top_left_tilts_toward_it() {
    let a = parallax_angles(1000.0, 800.0, 0.0, 0.0, PARALLAX_SCALE);
    assert_eq!(a.rotate_x_deg, -8.0);
    assert_eq!(a.rotate_y_deg, 10.0);
    assert_eq!(a.css_transform(), "rotateX(-8deg) rotateY(10deg)");
    assert_eq!(REST_TRANSFORM, "rotateX(-10deg) rotateY(-10deg)");
}

#[test]
fn popup_text_and_anchor() {
    assert_eq!(info_popup_text("Rust"), "> Rust");
    assert_eq!(popup_anchor(100.0, 300.0, 60.0), (130.0, 250.0));
}

#[test]
fn card_flip_toggles() {
    assert_eq!(toggle_card_flip(""), FLIPPED);
    assert_eq!(toggle_card_flip(FLIPPED), UNFLIPPED);
    assert_eq!(toggle_card_flip(UNFLIPPED), FLIPPED);
}

#[test]
fn orb_label_needs_both_attributes() {
    let label = OrbLabel::from_attrs(Some(" 90 ".into()), Some("Rust".into())).unwrap();
    assert_eq!(label.percent_text(), "90%");
    assert_eq!(label.skill, "Rust");
    assert_eq!(OrbLabel::from_attrs(None, Some("Rust".into())), None);
    assert_eq!(OrbLabel::from_attrs(Some("90".into()), None), None);
}

#[test]
fn system_time_uses_long_month_and_padded_clock() {
    let parts = DateParts {
        year: 2026,
        month0: 9,
        day: 18,
        hour: 14,
        minute: 5,
    };
    assert_eq!(format_system_time(parts), "SYSTEM TIME: October 18, 2026, 14:05");
    let midnight = DateParts {
        year: 2025,
        month0: 0,
        day: 1,
        hour: 0,
        minute: 0,
    };
    assert_eq!(format_system_time(midnight), "SYSTEM TIME: January 1, 2025, 00:00");
}
