// Host-side tests for bounded module acquisition.

mod common;

use common::RecordingModule;
use hextrail_web::acquire::{AcquirePoll, Acquirer, ModuleSource};
use hextrail_web::{ShimConfig, ShimError, ShimState, SimulationShim};

/// Binding that appears after `ready_after` lookups, or never.
struct DelayedSource {
    ready_after: Option<u32>,
    lookups: u32,
}

impl ModuleSource for DelayedSource {
    type Handle = RecordingModule;

    fn locate(&mut self) -> Result<RecordingModule, ShimError> {
        self.lookups += 1;
        match self.ready_after {
            Some(n) if self.lookups > n => Ok(RecordingModule::full().0),
            _ => Err(ShimError::ModuleUnavailable("module binding is not set".into())),
        }
    }
}

fn drive(acquirer: &mut Acquirer, source: &mut DelayedSource) -> Result<RecordingModule, ShimError> {
    loop {
        match acquirer.poll(source) {
            AcquirePoll::Found(m) => return Ok(m),
            AcquirePoll::Failed(e) => return Err(e),
            AcquirePoll::Pending => {}
        }
    }
}

#[test]
fn finds_binding_that_appears_late() {
    let mut source = DelayedSource {
        ready_after: Some(3),
        lookups: 0,
    };
    let mut acquirer = Acquirer::with_attempts(10);
    assert!(drive(&mut acquirer, &mut source).is_ok());
    assert_eq!(acquirer.attempts_made(), 4);
}

#[test]
fn gives_up_after_budget() {
    let mut source = DelayedSource {
        ready_after: None,
        lookups: 0,
    };
    let mut acquirer = Acquirer::with_attempts(5);
    let err = drive(&mut acquirer, &mut source).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(source.lookups, 5);
    assert!(err.to_string().contains("gave up after 5 attempts"));
}

#[test]
fn resolves_exactly_once() {
    let mut source = DelayedSource {
        ready_after: Some(0),
        lookups: 0,
    };
    let mut acquirer = Acquirer::with_attempts(3);
    assert!(matches!(acquirer.poll(&mut source), AcquirePoll::Found(_)));
    assert!(matches!(acquirer.poll(&mut source), AcquirePoll::Failed(_)));
    assert_eq!(source.lookups, 1);
}

#[test]
fn budget_from_config() {
    let config = ShimConfig {
        acquire_poll_interval_ms: 100,
        acquire_timeout_ms: 1000,
        ..ShimConfig::default()
    };
    assert_eq!(config.acquire_attempts(), 10);
    let config = ShimConfig {
        acquire_poll_interval_ms: 0,
        acquire_timeout_ms: 0,
        ..ShimConfig::default()
    };
    assert_eq!(config.acquire_attempts(), 1);
}

#[test]
fn binding_never_appears_leaves_shim_failed_without_calls() {
    let mut source = DelayedSource {
        ready_after: None,
        lookups: 0,
    };
    let mut acquirer = Acquirer::with_attempts(4);
    let mut shim: SimulationShim<RecordingModule> = SimulationShim::new(ShimConfig::default());
    shim.begin_loading();
    let result = drive(&mut acquirer, &mut source);
    assert!(shim.complete_loading(result).is_err());
    assert!(matches!(shim.state(), ShimState::Failed(ShimError::ModuleUnavailable(_))));
    assert!(shim.handle().is_none());
    assert!(!shim.frame());
    assert!(!shim.reset());
}
