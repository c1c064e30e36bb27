use crate::app::App;
use crate::shim::ShimState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive `draw` from requestAnimationFrame for modules that do not schedule
/// their own frames. The loop ends once the shim leaves `Ready`.
pub fn start_loop(app: App) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let live = app
            .with_shim(|s| {
                s.frame();
                *s.state() == ShimState::Ready
            })
            // busy this frame; try again next one
            .unwrap_or(true);
        if !live {
            log::info!("[frame] loop stopped");
            // dropping the closure here would free it while it runs
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
