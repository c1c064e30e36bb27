use crate::constants::*;
use crate::error::ShimError;
use crate::module::Call;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlField {
    Speed,
    Thickness,
    Spin,
    Wander,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlValue {
    Continuous(f64),
    Flag(bool),
}

impl ControlField {
    pub const ALL: [ControlField; 4] = [
        ControlField::Speed,
        ControlField::Thickness,
        ControlField::Spin,
        ControlField::Wander,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ControlField::Speed => "speed",
            ControlField::Thickness => "thickness",
            ControlField::Spin => "spin",
            ControlField::Wander => "wander",
        }
    }

    /// Inclusive range advertised by the slider, `None` for checkboxes.
    pub fn range(self) -> Option<(f64, f64)> {
        match self {
            ControlField::Speed => Some((SPEED_MIN, SPEED_MAX)),
            ControlField::Thickness => Some((THICKNESS_MIN, THICKNESS_MAX)),
            ControlField::Spin | ControlField::Wander => None,
        }
    }

    /// Page element id of the widget bound to this field.
    pub fn element_id(self) -> &'static str {
        match self {
            ControlField::Speed => SPEED_ID,
            ControlField::Thickness => THICKNESS_ID,
            ControlField::Spin => SPIN_ID,
            ControlField::Wander => WANDER_ID,
        }
    }

    /// Validate and normalise a widget value for this field.
    ///
    /// Slider values outside the range are clamped; a non-numeric slider value
    /// or a value of the wrong kind is rejected with `InvalidRange`.
    pub fn validate(self, value: ControlValue) -> Result<ControlValue, ShimError> {
        match (self.range(), value) {
            (Some((lo, hi)), ControlValue::Continuous(v)) => {
                if v.is_nan() {
                    return Err(ShimError::InvalidRange {
                        field: self.name(),
                        value: v,
                    });
                }
                let clamped = v.clamp(lo, hi);
                if clamped != v {
                    log::debug!("[controls] {} clamped {} -> {}", self.name(), v, clamped);
                }
                Ok(ControlValue::Continuous(clamped))
            }
            (None, ControlValue::Flag(b)) => Ok(ControlValue::Flag(b)),
            (_, ControlValue::Continuous(v)) => Err(ShimError::InvalidRange {
                field: self.name(),
                value: v,
            }),
            (_, ControlValue::Flag(b)) => Err(ShimError::InvalidRange {
                field: self.name(),
                value: if b { 1.0 } else { 0.0 },
            }),
        }
    }

    /// Module call that applies `value` to this field. Expects a validated value.
    pub fn call(self, value: ControlValue) -> Option<Call> {
        match (self, value) {
            (ControlField::Speed, ControlValue::Continuous(v)) => Some(Call::SetSpeed(v)),
            (ControlField::Thickness, ControlValue::Continuous(v)) => Some(Call::SetThickness(v)),
            (ControlField::Spin, ControlValue::Flag(b)) => Some(Call::SetSpin(b)),
            (ControlField::Wander, ControlValue::Flag(b)) => Some(Call::SetWander(b)),
            _ => None,
        }
    }
}

impl ControlValue {
    pub fn as_flag(self) -> Option<bool> {
        match self {
            ControlValue::Flag(b) => Some(b),
            ControlValue::Continuous(_) => None,
        }
    }

    pub fn as_f64(self) -> Option<f64> {
        match self {
            ControlValue::Continuous(v) => Some(v),
            ControlValue::Flag(_) => None,
        }
    }
}

/// Text shown next to a slider, e.g. "1.0" for speed and "0.15" for thickness.
pub fn display_value(field: ControlField, value: f64) -> String {
    match field {
        ControlField::Speed => format!("{:.*}", SPEED_DISPLAY_DECIMALS, value),
        ControlField::Thickness => format!("{:.*}", THICKNESS_DISPLAY_DECIMALS, value),
        ControlField::Spin | ControlField::Wander => {
            let text = if value != 0.0 { "on" } else { "off" };
            text.to_string()
        }
    }
}

/// Values of the four widgets as last applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    pub speed: f64,
    pub thickness: f64,
    pub spin: bool,
    pub wander: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            speed: SPEED_DEFAULT,
            thickness: THICKNESS_DEFAULT,
            spin: SPIN_DEFAULT,
            wander: WANDER_DEFAULT,
        }
    }
}

impl ControlState {
    pub fn get(&self, field: ControlField) -> ControlValue {
        match field {
            ControlField::Speed => ControlValue::Continuous(self.speed),
            ControlField::Thickness => ControlValue::Continuous(self.thickness),
            ControlField::Spin => ControlValue::Flag(self.spin),
            ControlField::Wander => ControlValue::Flag(self.wander),
        }
    }

    /// Store a validated value. Returns whether the stored value changed.
    pub fn set(&mut self, field: ControlField, value: ControlValue) -> bool {
        let before = self.get(field);
        match (field, value) {
            (ControlField::Speed, ControlValue::Continuous(v)) => self.speed = v,
            (ControlField::Thickness, ControlValue::Continuous(v)) => self.thickness = v,
            (ControlField::Spin, ControlValue::Flag(b)) => self.spin = b,
            (ControlField::Wander, ControlValue::Flag(b)) => self.wander = b,
            _ => return false,
        }
        before != value
    }
}
