//! Preview cards.

use eframe::egui::{self, FontId, RichText, Stroke, TextStyle};

use crate::fonts::FontInstaller;
use crate::ui::theme::PreviewTheme;
use crate::view::{PreviewCard, PreviewView};

pub fn render_gallery(
    ui: &mut egui::Ui,
    view: &PreviewView,
    fonts: &FontInstaller,
    theme: &PreviewTheme,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in &view.cards {
                render_card(ui, card, fonts, theme);
                ui.add_space(8.0);
            }
        });
}

fn render_card(ui: &mut egui::Ui, card: &PreviewCard, fonts: &FontInstaller, theme: &PreviewTheme) {
    egui::Frame::new()
        .fill(theme.surface[1])
        .stroke(Stroke::new(1.0, theme.border_medium))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(
                RichText::new(card.label())
                    .text_style(TextStyle::Name("card_title".into()))
                    .strong()
                    .color(theme.text_primary),
            );

            let font = FontId::new(card.style.pixel_size(), fonts.family_for(&card.style.family));
            ui.add(
                egui::Label::new(RichText::new(&card.body).font(font).color(theme.text_secondary))
                    .wrap(),
            )
            .on_hover_text(card.style.to_string());
        });
}
