//! Bounded acquisition of the simulation module.
//!
//! The loader script binds the module object to a global before its wasm
//! instance is ready, so acquisition keeps polling until the binding exists
//! and the required exports have appeared, or until the attempt budget is
//! spent.

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::module::ModuleHandle;

/// Where the module handle comes from.
pub trait ModuleSource {
    type Handle: ModuleHandle;

    /// Look the module up once. `Err` means "not usable yet".
    fn locate(&mut self) -> Result<Self::Handle, ShimError>;
}

#[derive(Debug)]
pub enum AcquirePoll<M> {
    Found(M),
    Pending,
    Failed(ShimError),
}

#[derive(Debug, Clone)]
pub struct Acquirer {
    attempts_left: u32,
    attempts_made: u32,
    last_error: Option<ShimError>,
    finished: bool,
}

impl Acquirer {
    pub fn new(config: &ShimConfig) -> Self {
        Self::with_attempts(config.acquire_attempts())
    }

    pub fn with_attempts(attempts: u32) -> Self {
        Self {
            attempts_left: attempts.max(1),
            attempts_made: 0,
            last_error: None,
            finished: false,
        }
    }

    pub fn attempts_made(&self) -> u32 {
        self.attempts_made
    }

    /// One lookup. After `Found` or `Failed` the acquirer is spent and keeps
    /// reporting `Failed`, so the outcome resolves exactly once.
    pub fn poll<S: ModuleSource>(&mut self, source: &mut S) -> AcquirePoll<S::Handle> {
        if self.finished {
            return AcquirePoll::Failed(ShimError::ModuleUnavailable(
                "acquisition already resolved".to_string(),
            ));
        }
        self.attempts_made += 1;
        self.attempts_left = self.attempts_left.saturating_sub(1);
        match source.locate() {
            Ok(handle) => {
                self.finished = true;
                AcquirePoll::Found(handle)
            }
            Err(e) if self.attempts_left == 0 => {
                self.finished = true;
                let reason = match e {
                    ShimError::ModuleUnavailable(msg) => msg,
                    other => other.to_string(),
                };
                AcquirePoll::Failed(ShimError::ModuleUnavailable(format!(
                    "gave up after {} attempts: {}",
                    self.attempts_made, reason
                )))
            }
            Err(e) => {
                if self.last_error.as_ref() != Some(&e) {
                    log::debug!("[acquire] attempt {}: {}", self.attempts_made, e);
                }
                self.last_error = Some(e);
                AcquirePoll::Pending
            }
        }
    }
}
