use crate::module::Export;

/// Failures surfaced by the shim.
///
/// Only `ModuleUnavailable` is fatal. The rest are reported to the caller so
/// it can log them, and never interrupt the interaction loop.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShimError {
    #[error("simulation module unavailable: {0}")]
    ModuleUnavailable(String),
    #[error("module does not export {}", .0.symbol())]
    CapabilityMissing(Export),
    #[error("{symbol} threw: {reason}")]
    CallFailed { symbol: &'static str, reason: String },
    #[error("value {value} out of range for {field}")]
    InvalidRange { field: &'static str, value: f64 },
}

impl ShimError {
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShimError::ModuleUnavailable(_))
    }
}
