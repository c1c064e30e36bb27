//! `ModuleHandle` over the Emscripten `Module` object.

use crate::acquire::{AcquirePoll, Acquirer, ModuleSource};
use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::module::{Call, Capabilities, Export, ModuleHandle, EXPORTS};
use fnv::FnvHashMap;
use instant::Instant;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct JsModule {
    object: js_sys::Object,
    functions: FnvHashMap<Export, js_sys::Function>,
    caps: Capabilities,
}

fn lookup_function(object: &js_sys::Object, symbol: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(object, &JsValue::from_str(symbol))
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
}

impl JsModule {
    /// Resolve every known export once; fails if the binding is not an
    /// object or the required exports have not appeared yet.
    pub fn from_value(value: JsValue) -> Result<Self, ShimError> {
        if value.is_undefined() || value.is_null() {
            return Err(ShimError::ModuleUnavailable("module binding is not set".to_string()));
        }
        let object: js_sys::Object = value
            .dyn_into()
            .map_err(|_| ShimError::ModuleUnavailable("module binding is not an object".to_string()))?;

        let mut functions = FnvHashMap::default();
        for d in EXPORTS.iter() {
            if let Some(f) = lookup_function(&object, d.symbol) {
                functions.insert(d.export, f);
            }
        }
        let caps = Capabilities::detect(|symbol| functions.keys().any(|e| e.symbol() == symbol))?;
        Ok(Self {
            object,
            functions,
            caps,
        })
    }
}

impl ModuleHandle for JsModule {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn invoke(&mut self, call: Call) -> Result<(), ShimError> {
        let export = call.export();
        let f = self
            .functions
            .get(&export)
            .ok_or(ShimError::CapabilityMissing(export))?;
        let args: js_sys::Array = call.args().into_iter().map(JsValue::from_f64).collect();
        f.apply(&self.object, &args)
            .map(|_| ())
            .map_err(|e| ShimError::CallFailed {
                symbol: export.symbol(),
                reason: format!("{:?}", e),
            })
    }
}

/// Looks the module up on a `window` global.
pub struct GlobalModuleSource {
    window: web::Window,
    name: String,
}

impl GlobalModuleSource {
    pub fn new(window: web::Window, name: &str) -> Self {
        Self {
            window,
            name: name.to_string(),
        }
    }
}

impl ModuleSource for GlobalModuleSource {
    type Handle = JsModule;

    fn locate(&mut self) -> Result<JsModule, ShimError> {
        let value = js_sys::Reflect::get(&self.window, &JsValue::from_str(&self.name))
            .map_err(|e| ShimError::ModuleUnavailable(format!("{:?}", e)))?;
        JsModule::from_value(value)
    }
}

async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| match web::window() {
        Some(w) => {
            let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout);
        }
        None => {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = JsFuture::from(promise).await;
}

/// Wait for the module global to become usable, within the configured budget.
pub async fn acquire(config: &ShimConfig) -> Result<JsModule, ShimError> {
    let window = web::window().ok_or_else(|| ShimError::ModuleUnavailable("no window".to_string()))?;
    let mut source = GlobalModuleSource::new(window, &config.module_global);
    let mut acquirer = Acquirer::new(config);
    let started = Instant::now();
    loop {
        match acquirer.poll(&mut source) {
            AcquirePoll::Found(module) => {
                log::info!(
                    "[acquire] window.{} ready after {} attempt(s), {} ms",
                    config.module_global,
                    acquirer.attempts_made(),
                    started.elapsed().as_millis()
                );
                return Ok(module);
            }
            AcquirePoll::Failed(e) => return Err(e),
            AcquirePoll::Pending => sleep_ms(config.acquire_poll_interval_ms).await,
        }
    }
}
