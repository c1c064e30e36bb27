//! Optional on-page log panel.
//!
//! Pages that carry a `#debug-log` element get a timestamped copy of the
//! shim's lifecycle messages; everything also goes to the `log` facade.

use crate::constants::DEBUG_LOG_ID;
use web_sys as web;

pub fn append(document: &web::Document, message: &str) {
    let Some(panel) = document.get_element_by_id(DEBUG_LOG_ID) else {
        return;
    };
    let stamp = js_sys::Date::new_0().to_locale_time_string("en-US");
    let Ok(line) = document.create_element("div") else {
        return;
    };
    line.set_text_content(Some(&format!("[{}] {}", String::from(stamp), message)));
    _ = panel.append_child(&line);
    panel.set_scroll_top(panel.scroll_height());
}

/// Log at info level and mirror into the panel.
pub fn note(message: &str) {
    log::info!("{message}");
    if let Some(document) = crate::dom::window_document() {
        append(&document, message);
    }
}
