//! Backend event processing.

use crossbeam_channel::Receiver;

use crate::fonts::LoadedFace;
use crate::protocol::BackendEvent;
use crate::widget::FontPreviewWidget;

/// Process all pending events from the backend. Query outcomes go straight to
/// the widget; loaded face batches are handed back for the font installer.
pub fn process_events(
    event_rx: &Receiver<BackendEvent>,
    widget: &mut FontPreviewWidget,
) -> Vec<Vec<LoadedFace>> {
    let mut batches = Vec::new();
    // Drain all pending events from the backend
    while let Ok(event) = event_rx.try_recv() {
        match event {
            BackendEvent::Widget(event) => widget.apply_event(event),
            BackendEvent::FacesLoaded(faces) => batches.push(faces),
        }
    }
    batches
}
