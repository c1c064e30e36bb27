/// Viewport, control and loader constants shared by the shim and its wiring.
///
/// These keep the magic numbers of the page layout and the module contract
/// in one place so the pure modules and the browser glue agree.

// Reference canvas size; the windowed viewport keeps this aspect ratio.
pub const REFERENCE_WIDTH: f64 = 800.0;
pub const REFERENCE_HEIGHT: f64 = 600.0;

// Fraction of the window height the windowed canvas may occupy.
pub const MAX_VIEWPORT_HEIGHT_FRACTION: f64 = 0.6;

// Speed slider (multiplier on the simulation's own arm speed)
pub const SPEED_MIN: f64 = 0.1;
pub const SPEED_MAX: f64 = 5.0;
pub const SPEED_DEFAULT: f64 = 1.0;
pub const SPEED_DISPLAY_DECIMALS: usize = 1;

// Thickness slider (hexagon edge thickness)
pub const THICKNESS_MIN: f64 = 0.05;
pub const THICKNESS_MAX: f64 = 0.5;
pub const THICKNESS_DEFAULT: f64 = 0.15;
pub const THICKNESS_DISPLAY_DECIMALS: usize = 2;

pub const SPIN_DEFAULT: bool = true;
pub const WANDER_DEFAULT: bool = true;

// Acquisition: poll the global binding every interval until the budget runs out.
pub const ACQUIRE_POLL_INTERVAL_MS: u32 = 50;
pub const ACQUIRE_TIMEOUT_MS: u32 = 10_000;

// Global the Emscripten loader script installs.
pub const MODULE_GLOBAL: &str = "Module";

// Page element ids
pub const CANVAS_ID: &str = "canvas";
pub const CONTAINER_ID: &str = "container";
pub const LOADING_ID: &str = "loading";
pub const DEBUG_LOG_ID: &str = "debug-log";
pub const SPEED_ID: &str = "speed";
pub const SPEED_VALUE_ID: &str = "speed-value";
pub const THICKNESS_ID: &str = "thickness";
pub const THICKNESS_VALUE_ID: &str = "thickness-value";
pub const SPIN_ID: &str = "spin";
pub const WANDER_ID: &str = "wander";
pub const RESET_ID: &str = "reset";
pub const FULLSCREEN_ID: &str = "fullscreen";

// Class toggled on the container while fullscreen
pub const FULLSCREEN_CLASS: &str = "fullscreen";
