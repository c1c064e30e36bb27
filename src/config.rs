use crate::constants::{ACQUIRE_POLL_INTERVAL_MS, ACQUIRE_TIMEOUT_MS, MODULE_GLOBAL};

/// Who drives the simulation's frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// The module installed its own main loop; the shim never calls `draw`.
    #[default]
    SelfScheduled,
    /// The shim calls `draw` once per animation frame.
    Polled,
}

impl DrawMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "self" | "self-scheduled" => Some(DrawMode::SelfScheduled),
            "polled" | "poll" => Some(DrawMode::Polled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    pub draw_mode: DrawMode,
    /// Name of the global the loader script binds the module to.
    pub module_global: String,
    pub acquire_poll_interval_ms: u32,
    pub acquire_timeout_ms: u32,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::default(),
            module_global: MODULE_GLOBAL.to_string(),
            acquire_poll_interval_ms: ACQUIRE_POLL_INTERVAL_MS,
            acquire_timeout_ms: ACQUIRE_TIMEOUT_MS,
        }
    }
}

impl ShimConfig {
    /// Apply optional overrides read from the page (canvas `data-*` attributes).
    pub fn with_overrides(mut self, draw_mode: Option<&str>, module_global: Option<&str>) -> Self {
        if let Some(raw) = draw_mode {
            match DrawMode::parse(raw) {
                Some(mode) => self.draw_mode = mode,
                None => log::warn!("[config] ignoring unknown draw mode {raw:?}"),
            }
        }
        if let Some(name) = module_global.map(str::trim).filter(|n| !n.is_empty()) {
            self.module_global = name.to_string();
        }
        self
    }

    /// Number of polls the acquisition loop may make before giving up.
    pub fn acquire_attempts(&self) -> u32 {
        let interval = self.acquire_poll_interval_ms.max(1);
        self.acquire_timeout_ms.div_ceil(interval).max(1)
    }
}
