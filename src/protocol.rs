use crate::error::FontEnumerationError;
use crate::font_source::FontDescriptor;
use crate::fonts::LoadedFace;

/// Generation number of one widget mount.
pub type MountId = u64;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendAction {
    /// List the locally installed fonts on behalf of a mount
    QueryLocalFonts { mount: MountId },
    /// Read and check the face files for these fonts
    LoadFaces { fonts: Vec<FontDescriptor> },
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    /// Outcome of a font query, for the widget
    Widget(WidgetEvent),
    /// Faces that parsed; unusable ones are left out
    FacesLoaded(Vec<LoadedFace>),
}

/// Font query outcomes consumed by the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The font query for `mount` resolved
    FontsLoaded {
        mount: MountId,
        fonts: Vec<FontDescriptor>,
    },
    /// The font query for `mount` failed
    FontsFailed {
        mount: MountId,
        error: FontEnumerationError,
    },
}

impl WidgetEvent {
    pub fn mount(&self) -> MountId {
        match self {
            WidgetEvent::FontsLoaded { mount, .. } | WidgetEvent::FontsFailed { mount, .. } => {
                *mount
            }
        }
    }
}

impl From<WidgetEvent> for BackendEvent {
    fn from(event: WidgetEvent) -> Self {
        BackendEvent::Widget(event)
    }
}
