//! Font Preview library.
//!
//! This module re-exports the core components for testing and embedding.

pub mod app;
pub mod backend;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod font_source;
pub mod fonts;
pub mod input;
pub mod logging;
pub mod protocol;
pub mod registry;
pub mod ui;
pub mod view;
pub mod widget;


pub use error::{FontEnumerationError, FontErrorKind};
pub use font_source::{FontDescriptor, FontSource, SystemFontSource};
pub use widget::FontPreviewWidget;
