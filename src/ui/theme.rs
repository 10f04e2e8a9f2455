//! Colors and global styling.
//!
//! Three surface levels are enough here: window background, card background,
//! and the text input well.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct PreviewTheme {
    pub name: String,
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub border_medium: Color32,
}

impl PreviewTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(10, 10, 15),  // window
                Color32::from_rgb(28, 28, 38),  // card
                Color32::from_rgb(30, 32, 38),  // input well
            ],
            accent: Color32::from_rgb(88, 101, 242),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            border_medium: Color32::from_rgb(47, 49, 54),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(242, 243, 245),
                Color32::from_rgb(246, 246, 247),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            border_medium: Color32::from_rgb(210, 213, 219),
        }
    }

    /// Theme by settings name; anything but "light" is dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "Dark"
    }
}

/// Text styles for the chrome around the previews. Card bodies set their own
/// size from the widget state.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(18.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name("card_title".into()), FontId::new(18.0, Proportional)),
        (TextStyle::Name("size_readout".into()), FontId::new(13.0, Monospace)),
    ]
    .into()
}

/// Apply visuals and spacing once at startup.
pub fn apply_app_style(ctx: &egui::Context, theme: &PreviewTheme) {
    ctx.set_visuals(if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.slider_width = 260.0;

    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.bg_fill = theme.accent;

    style.visuals.panel_fill = theme.surface[0];
    style.visuals.extreme_bg_color = theme.surface[2];
    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(88, 101, 242, 100);

    ctx.set_style(style);
}
