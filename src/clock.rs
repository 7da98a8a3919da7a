use folio_core::clock::{format_system_time, DateParts};
use web_sys as web;

pub fn set_current_date(document: &web::Document, element_id: &str) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::debug!("[clock] missing #{}; skipped", element_id);
        return false;
    };
    let now = js_sys::Date::new_0();
    let parts = DateParts {
        year: now.get_full_year() as i32,
        month0: now.get_month(),
        day: now.get_date(),
        hour: now.get_hours(),
        minute: now.get_minutes(),
    };
    el.set_text_content(Some(&format_system_time(parts)));
    true
}
