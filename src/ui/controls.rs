//! Sample text box and size slider.

use eframe::egui::{self, RichText, TextStyle};

use crate::input::ControlInput;
use crate::ui::theme::PreviewTheme;
use crate::view::PreviewView;

/// Render the two controls. The widget state is not touched here; changes
/// come back as [`ControlInput`]s for the widget's handlers.
pub fn render_controls(
    ui: &mut egui::Ui,
    view: &PreviewView,
    theme: &PreviewTheme,
) -> Vec<ControlInput> {
    let mut changes = Vec::new();

    let mut text = view.custom_sample_text.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text(view.placeholder)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        changes.push(ControlInput::SampleText(text));
    }

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&view.size_readout)
                .text_style(TextStyle::Name("size_readout".into()))
                .color(theme.text_secondary),
        );

        // The slider works on a copy so an out-of-range size is not clamped
        // just by being displayed.
        let mut size = view.font_size;
        let slider = egui::Slider::new(&mut size, view.size_bounds.clone())
            .step_by(1.0)
            .show_value(false);
        if ui.add(slider).changed() {
            changes.push(ControlInput::Size(size.to_string()));
        }
    });

    changes
}
