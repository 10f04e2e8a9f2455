//! Core PreviewApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::backend::run_backend;
use crate::config::Settings;
use crate::font_source::FontSource;
use crate::fonts::FontInstaller;
use crate::protocol::{BackendAction, BackendEvent};
use crate::registry::{self, FONT_PREVIEW_TAG};
use crate::ui;
use crate::widget::FontPreviewWidget;

pub struct PreviewApp {
    pub widget: FontPreviewWidget,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<BackendEvent>,

    pub fonts: FontInstaller,
    pub theme: ui::PreviewTheme,
}

impl PreviewApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        source: Arc<dyn FontSource>,
    ) -> Self {
        let theme = ui::PreviewTheme::from_name(&settings.theme);
        ui::apply_app_style(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_fonts(crate::fonts::setup_fonts());

        Self::with_source(settings, source, theme)
    }

    /// Everything except the egui context setup; spawns the backend and
    /// mounts the widget.
    pub fn with_source(
        settings: Settings,
        source: Arc<dyn FontSource>,
        theme: ui::PreviewTheme,
    ) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<BackendEvent>();

        thread::spawn(move || {
            run_backend(action_rx, event_tx, source);
        });

        registry::register_font_preview();
        let presets = settings.presets();
        let mut widget = registry::create(FONT_PREVIEW_TAG, &presets).unwrap_or_else(|e| {
            tracing::warn!("{}; constructing widget directly", e);
            FontPreviewWidget::with_presets(&presets)
        });
        widget.mount(&action_tx);

        Self {
            widget,
            action_tx,
            event_rx,
            fonts: FontInstaller::new(),
            theme,
        }
    }
}

impl Drop for PreviewApp {
    fn drop(&mut self) {
        self.widget.unmount();
        let _ = self.action_tx.send(BackendAction::Shutdown);
    }
}
