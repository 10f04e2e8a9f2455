//! Main update loop

use eframe::egui;
use std::time::Duration;

use super::events::process_events;
use super::PreviewApp;
use crate::input::ControlInput;
use crate::protocol::BackendAction;
use crate::ui;
use crate::widget::LoadState;

impl PreviewApp {
    /// Route one control change to the matching widget handler.
    pub fn apply_control(&mut self, change: ControlInput) {
        match &change {
            ControlInput::SampleText(_) => self.widget.handle_sample_text_input(&change),
            ControlInput::Size(_) => self.widget.handle_size_input(&change),
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Faces registered last frame are live now
        self.fonts.promote_staged();

        for batch in process_events(&self.event_rx, &mut self.widget) {
            self.fonts.install(ctx, batch);
        }

        // Face files are read on the backend
        let missing = self.fonts.take_unrequested(self.widget.visible_fonts());
        if !missing.is_empty()
            && self.action_tx.send(BackendAction::LoadFaces { fonts: missing }).is_err()
        {
            // Backend gone; settle the batch so polling stops
            self.fonts.install(ctx, Vec::new());
        }

        let view = self.widget.render();
        let mut changes = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            changes = ui::render_controls(ui, &view, &self.theme);
            ui.separator();
            ui::render_gallery(ui, &view, &self.fonts, &self.theme);
        });

        let had_changes = !changes.is_empty();
        for change in changes {
            self.apply_control(change);
        }
        if had_changes {
            ctx.request_repaint();
        }

        // Keep polling while requests are in flight or faces are waiting to go live
        if self.widget.load_state() == LoadState::Loading
            || self.fonts.has_pending()
            || self.fonts.has_staged()
        {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
