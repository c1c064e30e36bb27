//! Call contract of the compiled simulation module.
//!
//! The module is opaque: the shim only knows the entry points listed in
//! [`EXPORTS`]. Every entry point except `init` is optional, so a loaded
//! module is described by the [`Capabilities`] it was found to provide when
//! it was acquired.

use crate::error::ShimError;

/// Entry points the shim knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Export {
    Init,
    Reshape,
    Draw,
    Free,
    SetSpeed,
    SetThickness,
    SetSpin,
    SetWander,
    MouseDrag,
    MouseWheel,
    StopRendering,
    StartRendering,
    Main,
    SelfInitMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportDescriptor {
    pub export: Export,
    pub symbol: &'static str,
    pub arity: usize,
    pub required: bool,
}

const fn desc(export: Export, symbol: &'static str, arity: usize, required: bool) -> ExportDescriptor {
    ExportDescriptor {
        export,
        symbol,
        arity,
        required,
    }
}

/// Capability descriptor table, indexed by `Export as usize`.
pub const EXPORTS: [ExportDescriptor; 14] = [
    desc(Export::Init, "_init_hextrail", 0, true),
    desc(Export::Reshape, "_reshape_hextrail", 2, false),
    desc(Export::Draw, "_draw_hextrail", 0, false),
    desc(Export::Free, "_free_hextrail", 0, false),
    desc(Export::SetSpeed, "_set_speed", 1, false),
    desc(Export::SetThickness, "_set_thickness", 1, false),
    desc(Export::SetSpin, "_set_spin", 1, false),
    desc(Export::SetWander, "_set_wander", 1, false),
    desc(Export::MouseDrag, "_handle_mouse_drag", 2, false),
    desc(Export::MouseWheel, "_handle_mouse_wheel", 1, false),
    desc(Export::StopRendering, "_stop_rendering", 0, false),
    desc(Export::StartRendering, "_start_rendering", 0, false),
    // Emscripten program entry; present when the module was built with a main().
    desc(Export::Main, "_main", 0, false),
    // Present once the module has set up its own main loop.
    desc(Export::SelfInitMarker, "_xscreensaver_web_init", 4, false),
];

impl Export {
    #[inline]
    pub fn descriptor(self) -> &'static ExportDescriptor {
        &EXPORTS[self as usize]
    }

    #[inline]
    pub fn symbol(self) -> &'static str {
        self.descriptor().symbol
    }

    #[inline]
    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Set of entry points a loaded module provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities(u16);

impl Capabilities {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        EXPORTS
            .iter()
            .fold(Self::none(), |caps, d| caps.with(d.export))
    }

    #[must_use]
    pub fn with(self, export: Export) -> Self {
        Self(self.0 | export.bit())
    }

    #[must_use]
    pub fn without(self, export: Export) -> Self {
        Self(self.0 & !export.bit())
    }

    #[inline]
    pub fn has(self, export: Export) -> bool {
        self.0 & export.bit() != 0
    }

    /// Look up every descriptor by symbol name and validate the required ones.
    pub fn detect(mut present: impl FnMut(&'static str) -> bool) -> Result<Self, ShimError> {
        let mut caps = Self::none();
        for d in EXPORTS.iter() {
            if present(d.symbol) {
                caps = caps.with(d.export);
            } else if d.required {
                return Err(ShimError::ModuleUnavailable(format!(
                    "required export {} is missing",
                    d.symbol
                )));
            }
        }
        Ok(caps)
    }

    pub fn missing(self) -> impl Iterator<Item = &'static str> {
        EXPORTS
            .iter()
            .filter(move |d| !self.has(d.export))
            .map(|d| d.symbol)
    }
}

/// A single invocation of a module entry point with its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Main,
    Init,
    Reshape { width: f64, height: f64 },
    Draw,
    Free,
    SetSpeed(f64),
    SetThickness(f64),
    SetSpin(bool),
    SetWander(bool),
    MouseDrag { dx: f64, dy: f64 },
    MouseWheel(i32),
    StopRendering,
    StartRendering,
}

impl Call {
    pub fn export(&self) -> Export {
        match self {
            Call::Main => Export::Main,
            Call::Init => Export::Init,
            Call::Reshape { .. } => Export::Reshape,
            Call::Draw => Export::Draw,
            Call::Free => Export::Free,
            Call::SetSpeed(_) => Export::SetSpeed,
            Call::SetThickness(_) => Export::SetThickness,
            Call::SetSpin(_) => Export::SetSpin,
            Call::SetWander(_) => Export::SetWander,
            Call::MouseDrag { .. } => Export::MouseDrag,
            Call::MouseWheel(_) => Export::MouseWheel,
            Call::StopRendering => Export::StopRendering,
            Call::StartRendering => Export::StartRendering,
        }
    }

    /// Numeric arguments as passed across the module boundary; flags become 0/1.
    pub fn args(&self) -> Vec<f64> {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        match *self {
            Call::Reshape { width, height } => vec![width, height],
            Call::SetSpeed(v) | Call::SetThickness(v) => vec![v],
            Call::SetSpin(b) | Call::SetWander(b) => vec![flag(b)],
            Call::MouseDrag { dx, dy } => vec![dx, dy],
            Call::MouseWheel(dir) => vec![f64::from(dir)],
            Call::Main
            | Call::Init
            | Call::Draw
            | Call::Free
            | Call::StopRendering
            | Call::StartRendering => Vec::new(),
        }
    }
}

/// Handle to a loaded simulation module.
///
/// Implemented over the Emscripten `Module` object in the browser and by
/// recording fakes in tests.
pub trait ModuleHandle {
    fn capabilities(&self) -> Capabilities;

    fn invoke(&mut self, call: Call) -> Result<(), ShimError>;
}
