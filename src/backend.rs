//! Backend thread: answers font queries and reads face files off the UI thread.
//!
//! Runs a Tokio runtime, polls the action channel, and executes each request
//! on the blocking pool so a slow font catalogue or a large collection file
//! never stalls the loop.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;

use crate::error::FontEnumerationError;
use crate::font_source::{FontDescriptor, FontSource};
use crate::fonts::{load_faces, LoadedFace};
use crate::protocol::{BackendAction, BackendEvent, MountId, WidgetEvent};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run the backend event loop on a tokio runtime
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<BackendEvent>,
    source: Arc<dyn FontSource>,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to create Tokio runtime: {}", e);
            fail_pending_queries(&action_rx, &event_tx, &e.to_string());
            return;
        }
    };

    rt.block_on(async move {
        loop {
            // Check for actions from the UI (non-blocking)
            match action_rx.try_recv() {
                Ok(BackendAction::QueryLocalFonts { mount }) => {
                    let source = Arc::clone(&source);
                    let event_tx = event_tx.clone();
                    tokio::spawn(async move {
                        let event = query_fonts(mount, source).await;
                        // UI gone: nobody left to tell
                        let _ = event_tx.send(event.into());
                    });
                }
                Ok(BackendAction::LoadFaces { fonts }) => {
                    let event_tx = event_tx.clone();
                    tokio::spawn(async move {
                        let faces = read_faces(fonts).await;
                        let _ = event_tx.send(BackendEvent::FacesLoaded(faces));
                    });
                }
                Ok(BackendAction::Shutdown) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => tokio::time::sleep(POLL_INTERVAL).await,
            }
        }
        tracing::debug!("font backend stopped");
    });
}

/// Run one query and wrap the outcome for the requesting mount.
pub async fn query_fonts(mount: MountId, source: Arc<dyn FontSource>) -> WidgetEvent {
    let result = tokio::task::spawn_blocking(move || source.query_local_fonts()).await;

    match result {
        Ok(Ok(fonts)) => {
            tracing::debug!(mount, count = fonts.len(), "local font query resolved");
            WidgetEvent::FontsLoaded { mount, fonts }
        }
        Ok(Err(error)) => WidgetEvent::FontsFailed { mount, error },
        Err(join_error) => WidgetEvent::FontsFailed {
            mount,
            error: FontEnumerationError::unknown(format!("font query aborted: {}", join_error)),
        },
    }
}

/// Read and check face files; a failed read or parse just drops that face.
pub async fn read_faces(fonts: Vec<FontDescriptor>) -> Vec<LoadedFace> {
    match tokio::task::spawn_blocking(move || load_faces(&fonts)).await {
        Ok(faces) => faces,
        Err(join_error) => {
            tracing::warn!("face loading aborted: {}", join_error);
            Vec::new()
        }
    }
}

/// Without a runtime no query can run; answer whatever is already queued.
fn fail_pending_queries(
    action_rx: &Receiver<BackendAction>,
    event_tx: &Sender<BackendEvent>,
    reason: &str,
) {
    while let Ok(action) = action_rx.try_recv() {
        if let BackendAction::QueryLocalFonts { mount } = action {
            let event = WidgetEvent::FontsFailed {
                mount,
                error: FontEnumerationError::unknown(reason),
            };
            let _ = event_tx.send(event.into());
        }
    }
}
