use crate::app::App;
use crate::controls::{ControlField, ControlValue};
use crate::input::{key_command, KeyCommand};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &App) {
    // leave browser shortcuts (Ctrl+R, Cmd+F, ...) alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(cmd) = key_command(&ev.key()) else {
        return;
    };
    match cmd {
        KeyCommand::ToggleFullscreen => app.toggle_fullscreen(),
        KeyCommand::ExitFullscreen => {
            if app.is_fullscreen() {
                app.exit_fullscreen();
            }
        }
        KeyCommand::Reset => {
            if app.with_shim(|s| s.reset()).unwrap_or(false) {
                log::info!("[keys] reset");
            }
        }
        KeyCommand::ToggleSpin => toggle_flag(app, ControlField::Spin),
        KeyCommand::ToggleWander => toggle_flag(app, ControlField::Wander),
        KeyCommand::TogglePause => {
            app.with_shim(|s| s.toggle_rendering());
            ev.prevent_default();
        }
    }
}

// The checkbox is updated directly; no synthetic change event is dispatched,
// so the module sees exactly one call per key press.
fn toggle_flag(app: &App, field: ControlField) {
    match app.with_shim(|s| s.toggle_control(field)) {
        Some(Ok(on)) => {
            app.show_control(field, ControlValue::Flag(on));
            log::info!("[keys] {}={}", field.name(), on);
        }
        Some(Err(e)) => log::warn!("[keys] {e}"),
        None => {}
    }
}

pub fn wire_global_keydown(app: &App) {
    let app = app.clone();
    let document = app.document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &app);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
