pub mod controls;
pub mod keyboard;
pub mod pointer;

pub use controls::{seed_from_widgets, wire_controls};
pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;
