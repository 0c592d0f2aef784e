//! UI module - egui styling for the screen overlays
//!
//! The overlays themselves live in [`crate::states`]; this module only holds
//! the shared palette and text presets.

pub mod styles;
