//! Lifecycle and input routing for the simulation module.
//!
//! `SimulationShim` is an explicit state machine:
//!
//! ```text
//! Unloaded -> Loading -> Ready -> TornDown
//!                 \
//!                  -> Failed
//! ```
//!
//! Nothing touches the module handle outside `Ready`, except the startup
//! call made while completing `Loading`. Every method is safe to call in any
//! state; calls that do not apply are no-ops.

use crate::config::{DrawMode, ShimConfig};
use crate::controls::{ControlField, ControlState, ControlValue};
use crate::error::ShimError;
use crate::input::{wheel_direction, DragState};
use crate::module::{Call, Capabilities, Export, ModuleHandle};
use crate::viewport::{fit_viewport, ViewportState};
use glam::DVec2;

#[derive(Debug, Clone, PartialEq)]
pub enum ShimState {
    Unloaded,
    Loading,
    Ready,
    Failed(ShimError),
    TornDown,
}

pub struct SimulationShim<M: ModuleHandle> {
    config: ShimConfig,
    state: ShimState,
    handle: Option<M>,
    caps: Capabilities,
    viewport: ViewportState,
    controls: ControlState,
    // Last value actually delivered to the module, per field.
    forwarded: [Option<ControlValue>; 4],
    // Fields changed before the module was ready.
    pending: [bool; 4],
    drag: DragState,
    rendering: bool,
    initialized: bool,
    teardown_requested: bool,
}

fn slot(field: ControlField) -> usize {
    match field {
        ControlField::Speed => 0,
        ControlField::Thickness => 1,
        ControlField::Spin => 2,
        ControlField::Wander => 3,
    }
}

impl<M: ModuleHandle> SimulationShim<M> {
    pub fn new(config: ShimConfig) -> Self {
        Self {
            config,
            state: ShimState::Unloaded,
            handle: None,
            caps: Capabilities::none(),
            viewport: ViewportState::default(),
            controls: ControlState::default(),
            forwarded: [None; 4],
            pending: [false; 4],
            drag: DragState::default(),
            rendering: true,
            initialized: false,
            teardown_requested: false,
        }
    }

    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    pub fn state(&self) -> &ShimState {
        &self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == ShimState::Ready
    }

    pub fn failure(&self) -> Option<&ShimError> {
        match &self.state {
            ShimState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    pub fn teardown_requested(&self) -> bool {
        self.teardown_requested
    }

    pub fn handle(&self) -> Option<&M> {
        self.handle.as_ref()
    }

    // ---------------- Lifecycle ----------------

    /// `Unloaded -> Loading`. Returns false if acquisition was already started.
    pub fn begin_loading(&mut self) -> bool {
        if self.state != ShimState::Unloaded {
            return false;
        }
        self.state = ShimState::Loading;
        log::info!("[shim] loading simulation module");
        true
    }

    /// Resolve acquisition. `Loading -> Ready` on success, `Loading -> Failed`
    /// on any error, `Loading -> TornDown` if teardown arrived meanwhile.
    /// Calls outside `Loading` are ignored.
    pub fn complete_loading(&mut self, acquired: Result<M, ShimError>) -> Result<(), ShimError> {
        if self.state != ShimState::Loading {
            log::warn!("[shim] acquisition resolved in state {:?}; ignored", self.state);
            return Ok(());
        }
        if self.teardown_requested {
            log::info!("[shim] teardown requested during loading; skipping init");
            self.state = ShimState::TornDown;
            return Ok(());
        }
        let handle = match acquired {
            Ok(h) => h,
            Err(e) => return Err(self.fail(e)),
        };
        let caps = handle.capabilities();
        if !caps.has(Export::Init) {
            return Err(self.fail(ShimError::ModuleUnavailable(format!(
                "required export {} is missing",
                Export::Init.symbol()
            ))));
        }
        self.caps = caps;
        self.handle = Some(handle);
        let missing: Vec<&str> = caps.missing().collect();
        if !missing.is_empty() {
            log::info!("[shim] optional exports not provided: {}", missing.join(", "));
        }

        if let Err(e) = self.initialize() {
            self.handle = None;
            return Err(self.fail(ShimError::ModuleUnavailable(format!("startup failed: {e}"))));
        }
        self.state = ShimState::Ready;
        log::info!("[shim] ready");
        self.flush_pending_controls();
        Ok(())
    }

    fn fail(&mut self, e: ShimError) -> ShimError {
        log::error!("[shim] {}", e);
        self.state = ShimState::Failed(e.clone());
        e
    }

    /// Run the module's startup entry point at most once.
    ///
    /// A module exporting the self-init marker has already started its own
    /// main loop; one exporting only `main` is started through it; otherwise
    /// `init` is called directly.
    fn initialize(&mut self) -> Result<(), ShimError> {
        if self.initialized {
            return Ok(());
        }
        let Some(handle) = self.handle.as_mut() else {
            return Err(ShimError::ModuleUnavailable("no module handle".to_string()));
        };
        if self.caps.has(Export::SelfInitMarker) {
            log::info!("[shim] module initialised itself");
        } else if self.caps.has(Export::Main) {
            log::info!("[shim] starting module through main()");
            handle.invoke(Call::Main)?;
        } else {
            handle.invoke(Call::Init)?;
        }
        self.initialized = true;
        Ok(())
    }

    /// Re-run the simulation's init entry point. Only valid once ready.
    pub fn reset(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.drag.end();
        let ok = self.forward(Call::Init);
        if ok {
            log::info!("[shim] simulation reset");
        }
        ok
    }

    /// Release the module. Runs `free` at most once; safe in any state.
    pub fn teardown(&mut self) {
        match self.state {
            ShimState::Loading => {
                if !self.teardown_requested {
                    log::info!("[shim] teardown requested while loading");
                }
                self.teardown_requested = true;
            }
            ShimState::Ready => {
                self.forward(Call::Free);
                self.handle = None;
                self.drag.end();
                self.state = ShimState::TornDown;
                log::info!("[shim] torn down");
            }
            ShimState::Unloaded => {
                self.teardown_requested = true;
                self.state = ShimState::TornDown;
            }
            ShimState::Failed(_) | ShimState::TornDown => {}
        }
    }

    // ---------------- Viewport ----------------

    /// Fit the windowed viewport and forward it. Returns the size forwarded.
    ///
    /// While fullscreen the windowed layout does not apply and nothing is sent.
    pub fn reshape(&mut self, container_width: f64, window_height: f64) -> Option<(f64, f64)> {
        if self.viewport.is_fullscreen {
            return None;
        }
        let (w, h) = fit_viewport(container_width, window_height)?;
        self.apply_size(w, h)
    }

    /// Switch to fullscreen and forward the whole window size.
    pub fn enter_fullscreen(&mut self, window_width: f64, window_height: f64) -> Option<(f64, f64)> {
        self.viewport.is_fullscreen = true;
        self.resize_fullscreen(window_width, window_height)
    }

    /// Window resized while fullscreen.
    pub fn resize_fullscreen(&mut self, window_width: f64, window_height: f64) -> Option<(f64, f64)> {
        if !self.viewport.is_fullscreen {
            return None;
        }
        if !(window_width > 0.0 && window_height > 0.0) {
            return None;
        }
        self.apply_size(window_width, window_height)
    }

    /// Leave fullscreen and re-fit the windowed viewport.
    pub fn exit_fullscreen(&mut self, container_width: f64, window_height: f64) -> Option<(f64, f64)> {
        self.viewport.is_fullscreen = false;
        self.reshape(container_width, window_height)
    }

    fn apply_size(&mut self, width: f64, height: f64) -> Option<(f64, f64)> {
        if !self.forward(Call::Reshape { width, height }) {
            return None;
        }
        self.viewport.width = width;
        self.viewport.height = height;
        Some((width, height))
    }

    // ---------------- Controls ----------------

    /// Validate, store and forward a widget value.
    ///
    /// Returns whether a call reached the module. A value equal to the one
    /// last forwarded is not sent again. Before the module is ready the value
    /// is stored and delivered once it becomes ready.
    pub fn set_control(&mut self, field: ControlField, value: ControlValue) -> Result<bool, ShimError> {
        if self.is_closed() {
            return Ok(false);
        }
        let value = field.validate(value)?;
        self.controls.set(field, value);
        if !self.is_ready() {
            self.pending[slot(field)] = true;
            return Ok(false);
        }
        Ok(self.forward_control(field))
    }

    /// Flip a checkbox field. Returns the value now stored, which is the old
    /// one if the shim is closed.
    pub fn toggle_control(&mut self, field: ControlField) -> Result<bool, ShimError> {
        let current = self
            .controls
            .get(field)
            .as_flag()
            .ok_or(ShimError::InvalidRange {
                field: field.name(),
                value: f64::NAN,
            })?;
        self.set_control(field, ControlValue::Flag(!current))?;
        Ok(self.controls.get(field).as_flag().unwrap_or(current))
    }

    fn forward_control(&mut self, field: ControlField) -> bool {
        let value = self.controls.get(field);
        if self.forwarded[slot(field)] == Some(value) {
            return false;
        }
        let Some(call) = field.call(value) else {
            return false;
        };
        let sent = self.forward(call);
        if sent {
            self.forwarded[slot(field)] = Some(value);
        }
        sent
    }

    fn flush_pending_controls(&mut self) {
        for field in ControlField::ALL {
            if std::mem::take(&mut self.pending[slot(field)]) {
                self.forward_control(field);
            }
        }
    }

    /// Pause or resume the module's rendering.
    pub fn set_rendering(&mut self, on: bool) -> bool {
        if !self.is_ready() || self.rendering == on {
            return false;
        }
        let call = if on {
            Call::StartRendering
        } else {
            Call::StopRendering
        };
        let sent = self.forward(call);
        if sent {
            self.rendering = on;
            log::info!("[shim] rendering={}", on);
        }
        sent
    }

    pub fn toggle_rendering(&mut self) -> bool {
        self.set_rendering(!self.rendering)
    }

    // ---------------- Pointer ----------------

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        if self.is_ready() {
            self.drag.begin(x, y);
        }
    }

    /// Pointer moved to `(x, y)`. Forwards the motion since the last recorded
    /// position and returns it.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<DVec2> {
        if !self.is_ready() {
            return None;
        }
        let delta = self.drag.advance(x, y)?;
        if delta == DVec2::ZERO {
            return None;
        }
        self.forward(Call::MouseDrag {
            dx: delta.x,
            dy: delta.y,
        })
        .then_some(delta)
    }

    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Forward a wheel step. Returns the direction sent.
    pub fn route_wheel(&mut self, delta_y: f64) -> Option<i32> {
        let direction = wheel_direction(delta_y)?;
        self.forward(Call::MouseWheel(direction)).then_some(direction)
    }

    // ---------------- Frame ----------------

    /// Per-frame hook for `DrawMode::Polled`. Returns whether `draw` was called.
    pub fn frame(&mut self) -> bool {
        if self.config.draw_mode != DrawMode::Polled || !self.rendering {
            return false;
        }
        self.forward(Call::Draw)
    }

    // ---------------- Internals ----------------

    fn is_closed(&self) -> bool {
        self.teardown_requested
            || matches!(self.state, ShimState::TornDown | ShimState::Failed(_))
    }

    /// Send one call to the module if ready and the export exists.
    fn forward(&mut self, call: Call) -> bool {
        if !self.is_ready() {
            return false;
        }
        let export = call.export();
        if !self.caps.has(export) {
            log::trace!("[shim] {}", ShimError::CapabilityMissing(export));
            return false;
        }
        let Some(handle) = self.handle.as_mut() else {
            return false;
        };
        match handle.invoke(call) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[shim] {} failed: {}", export.symbol(), e);
                false
            }
        }
    }
}
