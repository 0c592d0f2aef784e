//! UI styling shared by the screen overlays

pub mod colors;
pub mod typography;

pub use colors::*;
pub use typography::*;
