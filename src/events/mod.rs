pub mod buttons;
pub mod keyboard;
pub mod pointer;

pub use buttons::{wire_chips, wire_nav_buttons};
pub use keyboard::wire_global_keydown;
pub use pointer::wire_swipe;
