//! Browser shim for the compiled hextrail simulation.
//!
//! The simulation itself is an opaque Emscripten module. This crate acquires
//! it, keeps it sized to the page, and routes slider, keyboard and mouse
//! input to its exported entry points. The state machine and everything it
//! depends on are plain Rust and build on any target; the DOM wiring only
//! exists on `wasm32`.

pub mod acquire;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod input;
pub mod module;
pub mod shim;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod debug_log;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod js_module;
#[cfg(target_arch = "wasm32")]
mod loading;

pub use config::{DrawMode, ShimConfig};
pub use error::ShimError;
pub use module::{Call, Capabilities, Export, ModuleHandle};
pub use shim::{ShimState, SimulationShim};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn wire_window_listeners(app: &app::App) {
    if let Some(window) = web_sys::window() {
        let app_resize = app.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            app_resize.layout();
        }) as Box<dyn FnMut()>);
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        resize_closure.forget();

        let app_unload = app.clone();
        let unload_closure = Closure::wrap(Box::new(move || {
            app_unload.teardown();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(
            "beforeunload",
            unload_closure.as_ref().unchecked_ref(),
        );
        unload_closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hextrail-web starting");

    let app = app::App::new().map_err(|e| JsValue::from_str(&format!("{e:?}")))?;

    // Listeners go in before the module exists; the shim ignores them until ready.
    app.layout();
    events::seed_from_widgets(&app);
    events::wire_controls(&app);
    events::wire_global_keydown(&app);
    events::wire_pointer_handlers(&app);
    wire_window_listeners(&app);

    wasm_bindgen_futures::spawn_local(app.run());
    Ok(())
}
