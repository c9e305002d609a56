//! srm library - search and notification layer for the B2B Plastics SRM
//!
//! This library exposes the suggestion controller, notification queue, jobs
//! REST client and readiness check used by the `srm` binary.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod notification;
pub mod readiness;
pub mod suggestion;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
