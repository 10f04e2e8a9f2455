//! Application module structure for PreviewApp
//!
//! - `core`: PreviewApp struct, initialization and teardown
//! - `events`: Draining backend results into the widget
//! - `update`: Per-frame update loop

pub mod core;
pub mod events;
pub mod update;

pub use core::PreviewApp;
