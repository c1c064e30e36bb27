// Recording stand-in for the compiled simulation module.

#![allow(dead_code)]

use hextrail_web::{Call, Capabilities, Export, ModuleHandle, ShimConfig, ShimError, SimulationShim};
use std::cell::RefCell;
use std::rc::Rc;

pub type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Debug)]
pub struct RecordingModule {
    pub caps: Capabilities,
    pub log: CallLog,
    pub fail_on: Option<Export>,
}

impl RecordingModule {
    /// Module exporting everything except `main` and the self-init marker,
    /// so startup goes through `init`.
    pub fn full() -> (Self, CallLog) {
        let caps = Capabilities::all()
            .without(Export::Main)
            .without(Export::SelfInitMarker);
        Self::with_caps(caps)
    }

    pub fn with_caps(caps: Capabilities) -> (Self, CallLog) {
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                caps,
                log: log.clone(),
                fail_on: None,
            },
            log,
        )
    }
}

impl ModuleHandle for RecordingModule {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn invoke(&mut self, call: Call) -> Result<(), ShimError> {
        let export = call.export();
        if !self.caps.has(export) {
            return Err(ShimError::CapabilityMissing(export));
        }
        if self.fail_on == Some(export) {
            return Err(ShimError::CallFailed {
                symbol: export.symbol(),
                reason: "boom".to_string(),
            });
        }
        self.log.borrow_mut().push(call);
        Ok(())
    }
}

/// Shim already in `Ready` with a full module; the startup call is cleared
/// from the log.
pub fn ready_shim(config: ShimConfig) -> (SimulationShim<RecordingModule>, CallLog) {
    let (module, log) = RecordingModule::full();
    ready_shim_with(config, module, log)
}

pub fn ready_shim_with(
    config: ShimConfig,
    module: RecordingModule,
    log: CallLog,
) -> (SimulationShim<RecordingModule>, CallLog) {
    let mut shim = SimulationShim::new(config);
    assert!(shim.begin_loading());
    shim.complete_loading(Ok(module)).expect("module should load");
    assert!(shim.is_ready());
    log.borrow_mut().clear();
    (shim, log)
}

pub fn count(log: &CallLog, export: Export) -> usize {
    log.borrow().iter().filter(|c| c.export() == export).count()
}
