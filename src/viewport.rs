use crate::constants::{MAX_VIEWPORT_HEIGHT_FRACTION, REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// Size last forwarded to the module, plus fullscreen flag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
    pub is_fullscreen: bool,
}

/// Fit the reference 800x600 canvas into the container width and the allowed
/// share of the window height, preserving aspect ratio.
///
/// The canvas is never scaled above the reference size. Returns `None` when
/// either bound is non-positive or not finite.
pub fn fit_viewport(container_width: f64, window_height: f64) -> Option<(f64, f64)> {
    if !(container_width.is_finite() && window_height.is_finite()) {
        return None;
    }
    let max_width = container_width;
    let max_height = window_height * MAX_VIEWPORT_HEIGHT_FRACTION;
    if max_width <= 0.0 || max_height <= 0.0 {
        return None;
    }

    let mut width = REFERENCE_WIDTH;
    let mut height = REFERENCE_HEIGHT;
    if width > max_width {
        let ratio = max_width / width;
        width = max_width;
        height *= ratio;
    }
    if height > max_height {
        let ratio = max_height / height;
        height = max_height;
        width *= ratio;
    }
    Some((width, height))
}
