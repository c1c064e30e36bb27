use crate::app::App;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(app: &App) {
    wire_mousedown(app);
    wire_mousemove(app);
    wire_drag_end(app, "mouseup");
    wire_drag_end(app, "mouseleave");
    wire_wheel(app);
    dom::set_cursor(&app.canvas, "grab");
}

fn wire_mousedown(app: &App) {
    let app = app.clone();
    let canvas = app.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        app.with_shim(|s| s.begin_drag(f64::from(ev.client_x()), f64::from(ev.client_y())));
        dom::set_cursor(&app.canvas, "grabbing");
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(app: &App) {
    let app = app.clone();
    let canvas = app.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let sent = app
            .with_shim(|s| s.drag_to(f64::from(ev.client_x()), f64::from(ev.client_y())))
            .flatten();
        if let Some(d) = sent {
            log::trace!("[mouse] drag {:.0},{:.0}", d.x, d.y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_drag_end(app: &App, event: &str) {
    let app = app.clone();
    let canvas = app.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        app.with_shim(|s| s.end_drag());
        dom::set_cursor(&app.canvas, "grab");
    }) as Box<dyn FnMut()>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(app: &App) {
    let app = app.clone();
    let canvas = app.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        if let Some(Some(dir)) = app.with_shim(|s| s.route_wheel(ev.delta_y())) {
            log::debug!("[mouse] wheel {dir}");
        }
    }) as Box<dyn FnMut(_)>);
    // non-passive so prevent_default stops the page from scrolling
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
