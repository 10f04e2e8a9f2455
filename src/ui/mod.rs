//! UI rendering modules for the font preview.
//!
//! - `controls`: sample text box, size slider and readout
//! - `gallery`: scrollable list of preview cards
//! - `theme`: colors and global egui styling

pub mod controls;
pub mod gallery;
pub mod theme;

pub use controls::render_controls;
pub use gallery::render_gallery;
pub use theme::{apply_app_style, PreviewTheme};
