//! Library exports for reuse in tests.

/// Application directory helpers.
pub mod app_dirs;
/// Persisted client configuration.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent helpers.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Client for the remote classification service.
pub mod predict;
