//! egui application modules.

/// Pure animation timing and easing helpers.
pub mod anim;
/// App logic and state mutation.
pub mod controller;
/// Shared state types for the egui UI.
pub mod state;
/// egui renderer for the application UI.
pub mod ui;
