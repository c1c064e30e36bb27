use crate::app::App;
use crate::constants::{FULLSCREEN_ID, RESET_ID, SPEED_VALUE_ID, THICKNESS_VALUE_ID};
use crate::controls::{ControlField, ControlValue};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Id of the label that shows a slider's current value.
pub fn value_label_id(field: ControlField) -> Option<&'static str> {
    match field {
        ControlField::Speed => Some(SPEED_VALUE_ID),
        ControlField::Thickness => Some(THICKNESS_VALUE_ID),
        ControlField::Spin | ControlField::Wander => None,
    }
}

fn widget_value(input: &web::HtmlInputElement, field: ControlField) -> ControlValue {
    match field.range() {
        // value_as_number is NaN for an empty or non-numeric slider
        Some(_) => ControlValue::Continuous(input.value_as_number()),
        None => ControlValue::Flag(input.checked()),
    }
}

pub fn wire_controls(app: &App) {
    for field in ControlField::ALL {
        wire_widget(app, field);
    }

    let app_reset = app.clone();
    dom::add_click_listener(&app.document, RESET_ID, move || {
        app_reset.with_shim(|s| s.reset());
    });

    let app_fs = app.clone();
    dom::add_click_listener(&app.document, FULLSCREEN_ID, move || {
        app_fs.toggle_fullscreen();
    });
}

fn wire_widget(app: &App, field: ControlField) {
    let Some(input) = dom::input_element(&app.document, field.element_id()) else {
        log::warn!("[controls] missing #{}", field.element_id());
        return;
    };
    // sliders report continuously, checkboxes on commit
    let event = if field.range().is_some() { "input" } else { "change" };
    let app = app.clone();
    let input_for_listener = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        app.apply_control(field, widget_value(&input, field));
    }) as Box<dyn FnMut(_)>);
    _ = input_for_listener.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Take the widgets' initial values from the page markup.
pub fn seed_from_widgets(app: &App) {
    for field in ControlField::ALL {
        if let Some(input) = dom::input_element(&app.document, field.element_id()) {
            app.apply_control(field, widget_value(&input, field));
        }
    }
}
