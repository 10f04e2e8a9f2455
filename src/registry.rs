//! Process-wide component registry.
//!
//! Hosts look the widget up by tag instead of naming the type. Definitions
//! are global and permanent, so a second `define` for the same tag is refused
//! and [`register_font_preview`] can be called any number of times.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::error::RegistryError;
use crate::widget::{FontPreviewWidget, WidgetPresets};

pub const FONT_PREVIEW_TAG: &str = "font-preview";

pub type ComponentFactory = fn(&WidgetPresets) -> FontPreviewWidget;

static REGISTRY: Lazy<Mutex<HashMap<String, ComponentFactory>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn registry() -> std::sync::MutexGuard<'static, HashMap<String, ComponentFactory>> {
    // A poisoned map is still a valid map
    REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn define(tag: &str, factory: ComponentFactory) -> Result<(), RegistryError> {
    let mut components = registry();
    if components.contains_key(tag) {
        return Err(RegistryError::AlreadyDefined(tag.to_string()));
    }
    components.insert(tag.to_string(), factory);
    tracing::debug!(tag, "component defined");
    Ok(())
}

pub fn is_defined(tag: &str) -> bool {
    registry().contains_key(tag)
}

pub fn create(tag: &str, presets: &WidgetPresets) -> Result<FontPreviewWidget, RegistryError> {
    let factory = registry()
        .get(tag)
        .copied()
        .ok_or_else(|| RegistryError::Undefined(tag.to_string()))?;
    Ok(factory(presets))
}

/// Define the font preview widget under [`FONT_PREVIEW_TAG`] unless already done.
pub fn register_font_preview() {
    match define(FONT_PREVIEW_TAG, FontPreviewWidget::with_presets) {
        Ok(()) | Err(RegistryError::AlreadyDefined(_)) => {}
        Err(e) => tracing::warn!("could not register font preview: {}", e),
    }
}
