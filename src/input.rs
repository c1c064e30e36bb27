use glam::DVec2;

/// Pointer drag in progress on the canvas.
///
/// `last` is the most recently forwarded pointer position, so each move
/// reports only the motion since the previous move.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub last: DVec2,
}

impl DragState {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.active = true;
        self.last = DVec2::new(x, y);
    }

    /// Record a new pointer position and return the delta since the last one.
    /// Returns `None` when no drag is active.
    pub fn advance(&mut self, x: f64, y: f64) -> Option<DVec2> {
        if !self.active {
            return None;
        }
        let pos = DVec2::new(x, y);
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }
}

/// Collapse a wheel delta to a zoom direction: scrolling down (positive
/// `deltaY`) zooms out (-1), anything else zooms in (+1). Non-finite deltas
/// carry no direction.
#[inline]
pub fn wheel_direction(delta_y: f64) -> Option<i32> {
    if !delta_y.is_finite() {
        return None;
    }
    Some(if delta_y > 0.0 { -1 } else { 1 })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleFullscreen,
    Reset,
    ToggleSpin,
    ToggleWander,
    ExitFullscreen,
    TogglePause,
}

/// Keyboard shortcut for a `KeyboardEvent.key` value, case-insensitive.
#[inline]
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "f" | "F" => Some(KeyCommand::ToggleFullscreen),
        "r" | "R" => Some(KeyCommand::Reset),
        "s" | "S" => Some(KeyCommand::ToggleSpin),
        "w" | "W" => Some(KeyCommand::ToggleWander),
        "Escape" => Some(KeyCommand::ExitFullscreen),
        " " => Some(KeyCommand::TogglePause),
        _ => None,
    }
}
