pub mod drag;
pub mod dynamics;
pub mod terminal;
