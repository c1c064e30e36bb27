//! Page-level application context.
//!
//! `App` owns the shim for one page session and is handed to every listener
//! explicitly; there is no window-global instance.

use crate::config::{DrawMode, ShimConfig};
use crate::constants::{CANVAS_ID, CONTAINER_ID, FULLSCREEN_CLASS, REFERENCE_HEIGHT, REFERENCE_WIDTH};
use crate::controls::{display_value, ControlField, ControlValue};
use crate::js_module::{self, JsModule};
use crate::shim::SimulationShim;
use crate::viewport::fit_viewport;
use crate::{debug_log, dom, frame, loading};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Shim = SimulationShim<JsModule>;

#[derive(Clone)]
pub struct App {
    pub shim: Rc<RefCell<Shim>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow!("missing #{CANVAS_ID}"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;

        let config = ShimConfig::default().with_overrides(
            dom::data_attribute(&canvas, "draw-mode").as_deref(),
            dom::data_attribute(&canvas, "module-global").as_deref(),
        );
        log::info!(
            "[app] draw mode {:?}, module global window.{}",
            config.draw_mode,
            config.module_global
        );

        Ok(Self {
            shim: Rc::new(RefCell::new(SimulationShim::new(config))),
            document,
            canvas,
        })
    }

    /// Run `f` against the shim unless it is already borrowed further up the
    /// stack (a listener dispatched from inside another listener). The nested
    /// call is dropped rather than forwarded twice.
    pub fn with_shim<R>(&self, f: impl FnOnce(&mut Shim) -> R) -> Option<R> {
        match self.shim.try_borrow_mut() {
            Ok(mut shim) => Some(f(&mut shim)),
            Err(_) => {
                log::debug!("[app] nested dispatch ignored");
                None
            }
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.shim
            .try_borrow()
            .map(|s| s.viewport().is_fullscreen)
            .unwrap_or(false)
    }

    /// Size the canvas for the current window and forward it.
    pub fn layout(&self) {
        let Some((win_w, win_h)) = dom::window_size() else {
            return;
        };
        if self.is_fullscreen() {
            dom::style_canvas_fullscreen(&self.canvas, win_w, win_h);
            self.with_shim(|s| s.resize_fullscreen(win_w, win_h));
            return;
        }
        let container_w = dom::container_width(&self.canvas).unwrap_or(win_w);
        if let Some((w, h)) = fit_viewport(container_w, win_h) {
            dom::style_canvas_px(&self.canvas, w, h);
        }
        self.with_shim(|s| s.reshape(container_w, win_h));
    }

    pub fn enter_fullscreen(&self) {
        let Some((win_w, win_h)) = dom::window_size() else {
            return;
        };
        dom::set_class(&self.document, CONTAINER_ID, FULLSCREEN_CLASS, true);
        dom::style_canvas_fullscreen(&self.canvas, win_w, win_h);
        self.with_shim(|s| s.enter_fullscreen(win_w, win_h));
        log::info!("[app] fullscreen on");
    }

    pub fn exit_fullscreen(&self) {
        dom::set_class(&self.document, CONTAINER_ID, FULLSCREEN_CLASS, false);
        dom::set_backing_size(&self.canvas, REFERENCE_WIDTH as u32, REFERENCE_HEIGHT as u32);
        let Some((win_w, win_h)) = dom::window_size() else {
            return;
        };
        let container_w = dom::container_width(&self.canvas).unwrap_or(win_w);
        if let Some((w, h)) = fit_viewport(container_w, win_h) {
            dom::style_canvas_px(&self.canvas, w, h);
        }
        self.with_shim(|s| s.exit_fullscreen(container_w, win_h));
        log::info!("[app] fullscreen off");
    }

    pub fn toggle_fullscreen(&self) {
        if self.is_fullscreen() {
            self.exit_fullscreen();
        } else {
            self.enter_fullscreen();
        }
    }

    /// Apply a widget value and refresh its label. Returns the stored value.
    pub fn apply_control(&self, field: ControlField, value: ControlValue) -> Option<ControlValue> {
        let stored = self.with_shim(|s| {
            if let Err(e) = s.set_control(field, value) {
                log::warn!("[controls] {e}");
            }
            s.controls().get(field)
        })?;
        self.show_control(field, stored);
        Some(stored)
    }

    /// Mirror a stored value back into its widget without dispatching events.
    pub fn show_control(&self, field: ControlField, value: ControlValue) {
        match value {
            ControlValue::Continuous(v) => {
                if let Some(label) = crate::events::controls::value_label_id(field) {
                    dom::set_text(&self.document, label, &display_value(field, v));
                }
            }
            ControlValue::Flag(b) => {
                if let Some(input) = dom::input_element(&self.document, field.element_id()) {
                    if input.checked() != b {
                        input.set_checked(b);
                    }
                }
            }
        }
    }

    /// Acquire the module and bring the shim to `Ready`.
    pub async fn run(self) {
        if !self.with_shim(|s| s.begin_loading()).unwrap_or(false) {
            return;
        }
        loading::show(&self.document, "Loading HexTrail...");
        debug_log::note("[app] waiting for simulation module");

        let config = self.shim.borrow().config().clone();
        let acquired = js_module::acquire(&config).await;

        // The canvas gets its windowed size before the module sees it.
        dom::set_backing_size(&self.canvas, REFERENCE_WIDTH as u32, REFERENCE_HEIGHT as u32);
        let outcome = self.with_shim(|s| s.complete_loading(acquired));
        match outcome {
            Some(Ok(())) if self.shim.borrow().is_ready() => {
                loading::hide(&self.document);
                self.layout();
                debug_log::note("[app] HexTrail initialised");
                if config.draw_mode == DrawMode::Polled {
                    frame::start_loop(self.clone());
                }
            }
            Some(Ok(())) => debug_log::note("[app] page closed before the module loaded"),
            Some(Err(e)) => {
                loading::show_failure(&self.document, &e);
                debug_log::note(&format!("ERROR: failed to initialise HexTrail: {e}"));
            }
            None => log::error!("[app] shim busy while completing load"),
        }
    }

    /// Release the module; later events become no-ops.
    pub fn teardown(&self) {
        self.with_shim(|s| s.teardown());
    }
}
