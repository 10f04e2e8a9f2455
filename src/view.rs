//! Render output of the widget.
//!
//! `FontPreviewWidget::render` produces a [`PreviewView`]; the egui layer only
//! paints it. Keeping the view plain data makes every rendering rule testable
//! without a window.

use std::fmt;
use std::ops::RangeInclusive;

/// Maximum number of preview cards in the gallery.
pub const GALLERY_LIMIT: usize = 9;

/// Bounds offered by the size slider. Programmatic sizes may fall outside.
pub const SIZE_BOUNDS: RangeInclusive<f32> = 7.0..=50.0;

pub const SAMPLE_TEXT_PLACEHOLDER: &str = "Escribe el texto de muestra";

/// Typographic settings applied to one card's sample text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDeclaration {
    pub size_pt: f32,
    /// Family token used to select the face.
    pub family: String,
    /// Identifier of the locally installed copy to prefer.
    pub local_source: String,
}

impl StyleDeclaration {
    pub fn new(size_pt: f32, family: &str) -> Self {
        Self {
            size_pt,
            family: family.to_string(),
            local_source: family.to_string(),
        }
    }

    /// Size in egui points (1pt = 4/3 logical px). Never below one point so
    /// a zero or negative preset still lays out.
    pub fn pixel_size(&self) -> f32 {
        (self.size_pt * 4.0 / 3.0).max(1.0)
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "font-size: {}pt; font-family: {}; src: local({});",
            self.size_pt, self.family, self.local_source
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCard {
    /// 1-based position in the gallery
    pub ordinal: usize,
    pub full_name: String,
    pub body: String,
    pub style: StyleDeclaration,
}

impl PreviewCard {
    pub fn label(&self) -> String {
        format!("{} - {}", self.ordinal, self.full_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub placeholder: &'static str,
    /// Current text box content
    pub custom_sample_text: String,
    pub font_size: f32,
    pub size_bounds: RangeInclusive<f32>,
    /// Readout shown next to the slider, e.g. "14 pt"
    pub size_readout: String,
    pub cards: Vec<PreviewCard>,
}
