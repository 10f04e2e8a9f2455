//! The font preview widget: state, input handlers, mount lifecycle and the
//! pure render step.

use crossbeam_channel::Sender;

use crate::diagnostics::{DiagnosticKind, DiagnosticLog};
use crate::error::FontEnumerationError;
use crate::font_source::FontDescriptor;
use crate::input::InputValue;
use crate::protocol::{BackendAction, MountId, WidgetEvent};
use crate::view::{
    PreviewCard, PreviewView, StyleDeclaration, GALLERY_LIMIT, SAMPLE_TEXT_PLACEHOLDER,
    SIZE_BOUNDS,
};

pub const DEFAULT_SAMPLE_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Where the local font query stands for the current mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Values a host may set before mounting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetPresets {
    pub default_sample_text: Option<String>,
    pub custom_sample_text: Option<String>,
    pub font_size: Option<f32>,
}

pub struct FontPreviewWidget {
    default_sample_text: String,
    custom_sample_text: String,
    font_size: f32,
    local_fonts: Vec<FontDescriptor>,
    load_state: LoadState,

    // Mount bookkeeping: results for anything but `live_mount` are dropped
    next_mount: MountId,
    live_mount: Option<MountId>,

    pub diagnostics: DiagnosticLog,
}

impl Default for FontPreviewWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl FontPreviewWidget {
    pub fn new() -> Self {
        Self {
            default_sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            custom_sample_text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            local_fonts: Vec::new(),
            load_state: LoadState::Idle,
            next_mount: 1,
            live_mount: None,
            diagnostics: DiagnosticLog::new(),
        }
    }

    pub fn with_presets(presets: &WidgetPresets) -> Self {
        let mut widget = Self::new();
        widget.apply_presets(presets);
        widget
    }

    pub fn apply_presets(&mut self, presets: &WidgetPresets) {
        if let Some(text) = &presets.default_sample_text {
            self.set_default_sample_text(text.clone());
        }
        if let Some(text) = &presets.custom_sample_text {
            self.set_custom_sample_text(text.clone());
        }
        if let Some(size) = presets.font_size {
            self.set_font_size(size);
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn default_sample_text(&self) -> &str {
        &self.default_sample_text
    }

    pub fn custom_sample_text(&self) -> &str {
        &self.custom_sample_text
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn local_fonts(&self) -> &[FontDescriptor] {
        &self.local_fonts
    }

    /// The descriptors that make it into the gallery.
    pub fn visible_fonts(&self) -> &[FontDescriptor] {
        let end = self.local_fonts.len().min(GALLERY_LIMIT);
        &self.local_fonts[..end]
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_mounted(&self) -> bool {
        self.live_mount.is_some()
    }

    /// Text every card shows right now.
    pub fn display_text(&self) -> &str {
        if self.custom_sample_text.is_empty() {
            &self.default_sample_text
        } else {
            &self.custom_sample_text
        }
    }

    // ------------------------------------------------------------------
    // Programmatic setters (no clamping)
    // ------------------------------------------------------------------

    pub fn set_default_sample_text(&mut self, text: impl Into<String>) {
        self.default_sample_text = text.into();
    }

    pub fn set_custom_sample_text(&mut self, text: impl Into<String>) {
        self.custom_sample_text = text.into();
    }

    /// Sizes outside the slider bounds are applied as given.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    // ------------------------------------------------------------------
    // Input handlers
    // ------------------------------------------------------------------

    pub fn handle_sample_text_input(&mut self, input: &impl InputValue) {
        self.custom_sample_text = input.value().to_string();
    }

    pub fn handle_size_input(&mut self, input: &impl InputValue) {
        let raw = input.value();
        self.diagnostics.record(DiagnosticKind::SizeChange, raw);
        match raw.trim().parse::<f32>() {
            Ok(size) if size.is_finite() => self.font_size = size,
            _ => tracing::warn!(value = raw, "ignoring non-numeric font size"),
        }
    }

    // ------------------------------------------------------------------
    // Mount lifecycle
    // ------------------------------------------------------------------

    /// Attach the widget and ask the backend for the local font list.
    pub fn mount(&mut self, action_tx: &Sender<BackendAction>) -> MountId {
        let mount = self.next_mount;
        self.next_mount += 1;
        self.live_mount = Some(mount);
        self.load_state = LoadState::Loading;
        tracing::debug!(mount, "querying local fonts");

        if action_tx
            .send(BackendAction::QueryLocalFonts { mount })
            .is_err()
        {
            self.apply_event(WidgetEvent::FontsFailed {
                mount,
                error: FontEnumerationError::unknown("font backend is not running"),
            });
        }
        mount
    }

    /// Detach the widget; any query still in flight is ignored when it lands.
    pub fn unmount(&mut self) {
        if let Some(mount) = self.live_mount.take() {
            tracing::debug!(mount, "widget unmounted");
        }
        if self.load_state == LoadState::Loading {
            self.load_state = LoadState::Idle;
        }
    }

    /// Apply the outcome of a font query.
    pub fn apply_event(&mut self, event: WidgetEvent) {
        if self.live_mount != Some(event.mount()) {
            tracing::debug!(mount = event.mount(), "discarding font query result for stale mount");
            return;
        }

        match event {
            WidgetEvent::FontsLoaded { fonts, .. } => {
                self.diagnostics
                    .record(DiagnosticKind::FontList, format!("{:?}", fonts));
                self.local_fonts = fonts;
                self.load_state = LoadState::Loaded;
            }
            WidgetEvent::FontsFailed { error, .. } => {
                self.diagnostics.record(
                    DiagnosticKind::FetchError,
                    format!("{} {}", error.name(), error.message),
                );
                self.load_state = LoadState::Failed;
            }
        }
    }

    // ------------------------------------------------------------------
    // Render
    // ------------------------------------------------------------------

    pub fn render(&self) -> PreviewView {
        let body = self.display_text();
        let cards = self
            .local_fonts
            .iter()
            .take(GALLERY_LIMIT)
            .enumerate()
            .map(|(i, font)| PreviewCard {
                ordinal: i + 1,
                full_name: font.full_name.clone(),
                body: body.to_string(),
                style: StyleDeclaration::new(self.font_size, &font.postscript_name),
            })
            .collect();

        PreviewView {
            placeholder: SAMPLE_TEXT_PLACEHOLDER,
            custom_sample_text: self.custom_sample_text.clone(),
            font_size: self.font_size,
            size_bounds: SIZE_BOUNDS,
            size_readout: format!("{} pt", self.font_size),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn fonts(n: usize) -> Vec<FontDescriptor> {
        (0..n)
            .map(|i| FontDescriptor::new(format!("Font {}", i), format!("Font-{}", i)))
            .collect()
    }

    fn loaded_widget(list: Vec<FontDescriptor>) -> FontPreviewWidget {
        let (tx, _rx) = unbounded();
        let mut widget = FontPreviewWidget::new();
        let mount = widget.mount(&tx);
        widget.apply_event(WidgetEvent::FontsLoaded { mount, fonts: list });
        widget
    }

    #[test]
    fn test_defaults() {
        let widget = FontPreviewWidget::new();
        assert_eq!(widget.font_size(), 14.0);
        assert_eq!(widget.custom_sample_text(), "");
        assert!(widget.local_fonts().is_empty());
        assert_eq!(widget.load_state(), LoadState::Idle);
        assert!(widget.render().cards.is_empty());
    }

    #[test]
    fn test_short_list_renders_every_font_in_order() {
        for n in 0..=GALLERY_LIMIT {
            let list = fonts(n);
            let widget = loaded_widget(list.clone());
            let view = widget.render();
            assert_eq!(view.cards.len(), n);
            for (card, font) in view.cards.iter().zip(&list) {
                assert_eq!(card.full_name, font.full_name);
                assert_eq!(card.style.family, font.postscript_name);
            }
        }
    }

    #[test]
    fn test_long_list_is_capped_without_losing_entries() {
        let list = fonts(25);
        let widget = loaded_widget(list.clone());

        let first = widget.render();
        let second = widget.render();
        assert_eq!(first.cards.len(), GALLERY_LIMIT);
        assert_eq!(first, second);
        assert_eq!(first.cards[8].full_name, "Font 8");
        assert_eq!(widget.local_fonts(), list.as_slice());
        assert_eq!(widget.visible_fonts().len(), GALLERY_LIMIT);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let list = vec![
            FontDescriptor::new("Arial", "Arial-Regular"),
            FontDescriptor::new("Arial", "Arial-Regular"),
        ];
        let widget = loaded_widget(list);
        assert_eq!(widget.render().cards.len(), 2);
    }

    #[test]
    fn test_custom_text_overrides_default_until_cleared() {
        let mut widget = loaded_widget(fonts(3));

        widget.handle_sample_text_input(&"  spaced  ");
        assert!(widget.render().cards.iter().all(|c| c.body == "  spaced  "));

        widget.handle_sample_text_input(&"");
        assert!(widget
            .render()
            .cards
            .iter()
            .all(|c| c.body == DEFAULT_SAMPLE_TEXT));
    }

    #[test]
    fn test_size_input_updates_readout_and_every_card() {
        let mut widget = loaded_widget(fonts(4));
        widget.handle_size_input(&"30");

        let view = widget.render();
        assert_eq!(view.size_readout, "30 pt");
        assert!(view.cards.iter().all(|c| c.style.size_pt == 30.0));
        assert!(view.cards[0].style.to_string().contains("font-size: 30pt;"));
    }

    #[test]
    fn test_size_input_is_not_clamped() {
        let mut widget = FontPreviewWidget::new();
        widget.handle_size_input(&"120");
        assert_eq!(widget.font_size(), 120.0);
        widget.set_font_size(3.0);
        assert_eq!(widget.render().size_readout, "3 pt");
    }

    #[test]
    fn test_size_input_is_logged_and_garbage_ignored() {
        let mut widget = FontPreviewWidget::new();
        widget.handle_size_input(&"22");
        widget.handle_size_input(&"abc");

        assert_eq!(widget.font_size(), 22.0);
        let raw: Vec<_> = widget
            .diagnostics
            .entries_of(DiagnosticKind::SizeChange)
            .map(|e| e.text.clone())
            .collect();
        assert_eq!(raw, vec!["22".to_string(), "abc".to_string()]);
    }

    #[test]
    fn test_failed_query_leaves_gallery_empty_and_logs_once() {
        let (tx, _rx) = unbounded();
        let mut widget = FontPreviewWidget::new();
        let mount = widget.mount(&tx);
        widget.apply_event(WidgetEvent::FontsFailed {
            mount,
            error: FontEnumerationError::not_allowed("Permission denied"),
        });

        assert_eq!(widget.load_state(), LoadState::Failed);
        assert!(widget.render().cards.is_empty());
        let errors: Vec<_> = widget
            .diagnostics
            .entries_of(DiagnosticKind::FetchError)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].text, "NotAllowedError Permission denied");

        // Controls keep working
        widget.handle_sample_text_input(&"still here");
        widget.handle_size_input(&"20");
        assert_eq!(widget.custom_sample_text(), "still here");
        assert_eq!(widget.font_size(), 20.0);
    }

    #[test]
    fn test_failed_remount_keeps_prior_list() {
        let (tx, _rx) = unbounded();
        let mut widget = loaded_widget(fonts(2));
        let mount = widget.mount(&tx);
        widget.apply_event(WidgetEvent::FontsFailed {
            mount,
            error: FontEnumerationError::unknown("boom"),
        });
        assert_eq!(widget.local_fonts().len(), 2);
    }

    #[test]
    fn test_mount_sends_query_with_fresh_id() {
        let (tx, rx) = unbounded();
        let mut widget = FontPreviewWidget::new();
        let first = widget.mount(&tx);
        let second = widget.mount(&tx);

        assert_ne!(first, second);
        assert_eq!(rx.try_recv().unwrap(), BackendAction::QueryLocalFonts { mount: first });
        assert_eq!(rx.try_recv().unwrap(), BackendAction::QueryLocalFonts { mount: second });
        assert_eq!(widget.load_state(), LoadState::Loading);
    }

    #[test]
    fn test_late_result_after_unmount_is_discarded() {
        let (tx, _rx) = unbounded();
        let mut widget = FontPreviewWidget::new();
        let mount = widget.mount(&tx);
        widget.unmount();
        widget.apply_event(WidgetEvent::FontsLoaded {
            mount,
            fonts: fonts(3),
        });

        assert!(widget.local_fonts().is_empty());
        assert!(!widget.is_mounted());
        assert!(widget.diagnostics.is_empty());
    }

    #[test]
    fn test_result_for_superseded_mount_is_discarded() {
        let (tx, _rx) = unbounded();
        let mut widget = FontPreviewWidget::new();
        let old = widget.mount(&tx);
        let new = widget.mount(&tx);

        widget.apply_event(WidgetEvent::FontsLoaded { mount: new, fonts: fonts(1) });
        widget.apply_event(WidgetEvent::FontsLoaded { mount: old, fonts: fonts(5) });
        assert_eq!(widget.local_fonts().len(), 1);
    }

    #[test]
    fn test_late_failure_after_unmount_is_discarded() {
        let (tx, _rx) = unbounded();
        let mut widget = FontPreviewWidget::new();
        let mount = widget.mount(&tx);
        widget.unmount();
        let state = widget.load_state();

        widget.apply_event(WidgetEvent::FontsFailed {
            mount,
            error: FontEnumerationError::not_allowed("Permission denied"),
        });

        assert_eq!(widget.load_state(), state);
        assert_eq!(widget.diagnostics.entries_of(DiagnosticKind::FetchError).count(), 0);
    }

    #[test]
    fn test_failure_for_superseded_mount_is_discarded() {
        let (tx, _rx) = unbounded();
        let mut widget = FontPreviewWidget::new();
        let old = widget.mount(&tx);
        let new = widget.mount(&tx);
        widget.apply_event(WidgetEvent::FontsLoaded { mount: new, fonts: fonts(2) });

        widget.apply_event(WidgetEvent::FontsFailed {
            mount: old,
            error: FontEnumerationError::unknown("too late"),
        });

        assert_eq!(widget.load_state(), LoadState::Loaded);
        assert_eq!(widget.local_fonts().len(), 2);
        assert!(widget.diagnostics.entries_of(DiagnosticKind::FetchError).next().is_none());
    }

    #[test]
    fn test_mount_without_backend_fails_quietly() {
        let (tx, rx) = unbounded();
        drop(rx);
        let mut widget = FontPreviewWidget::new();
        widget.mount(&tx);

        assert_eq!(widget.load_state(), LoadState::Failed);
        assert_eq!(widget.diagnostics.entries_of(DiagnosticKind::FetchError).count(), 1);
    }

    #[test]
    fn test_presets_apply() {
        let widget = FontPreviewWidget::with_presets(&WidgetPresets {
            default_sample_text: Some("The quick brown fox".into()),
            custom_sample_text: None,
            font_size: Some(60.0),
        });
        assert_eq!(widget.display_text(), "The quick brown fox");
        assert_eq!(widget.font_size(), 60.0);
    }
}
