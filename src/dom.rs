use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{element_id}; click handler not wired");
    }
}

#[inline]
pub fn input_element(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Width available to the canvas: the client width of its parent element.
pub fn container_width(canvas: &web::HtmlCanvasElement) -> Option<f64> {
    canvas
        .parent_element()
        .map(|parent| f64::from(parent.client_width()))
}

pub fn window_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// CSS size of the canvas in pixels.
pub fn style_canvas_px(canvas: &web::HtmlCanvasElement, width: f64, height: f64) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{width}px"));
    _ = style.set_property("height", &format!("{height}px"));
}

/// Canvas covering the whole window, backing store at window resolution.
pub fn style_canvas_fullscreen(canvas: &web::HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width((width as u32).max(1));
    canvas.set_height((height as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", "100vw");
    _ = style.set_property("height", "100vh");
}

pub fn set_backing_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}

#[inline]
pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
}

pub fn set_class(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}

#[inline]
pub fn data_attribute(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
}
