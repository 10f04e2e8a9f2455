//! Font Preview - previews locally installed fonts against sample text
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the widget
//! - Backend thread: runs a Tokio runtime that enumerates local fonts
//! - Communication via crossbeam channels

use std::sync::Arc;

use eframe::egui;

use font_preview::app::PreviewApp;
use font_preview::config;
use font_preview::font_source::{FontSource, SystemFontSource};
use font_preview::logging;

fn main() -> eframe::Result<()> {
    logging::init();

    let settings = config::load_settings();
    tracing::info!(?settings, "starting font preview");
    let source: Arc<dyn FontSource> = Arc::new(SystemFontSource::new(settings.allow_local_fonts));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Font Preview")
            .with_inner_size([820.0, 720.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Font Preview",
        options,
        Box::new(move |cc| Ok(Box::new(PreviewApp::new(cc, settings, source)))),
    )
}
