use crate::constants::LOADING_ID;
use crate::error::ShimError;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        el.set_text_content(Some(text));
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

/// Replace the loading text with a persistent failure message.
pub fn show_failure(document: &web::Document, err: &ShimError) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        el.set_text_content(Some(&format!("Failed to load HexTrail: {err}")));
        _ = el.class_list().add_1("error");
        _ = el.set_attribute("style", "");
    }
}
