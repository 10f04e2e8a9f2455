//! Font loading for the preview gallery.
//!
//! Each previewed face is read from its local file on the backend thread,
//! checked with `ttf-parser`, and registered with egui as its own family,
//! named by the postscript name the card's style declaration references.
//! The face bytes live under a `preview:` key so they can never replace one
//! of egui's bundled fonts.
//!
//! egui applies new font definitions at the start of the next pass, so a
//! freshly registered family is only *staged* during the frame it was added
//! and becomes usable after [`FontInstaller::promote_staged`].

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

use crate::font_source::FontDescriptor;

/// Fallbacks appended to every preview family, from egui's bundled fonts.
const FALLBACK_FONTS: [&str; 2] = ["Ubuntu-Light", "NotoEmoji-Regular"];

const FONT_DATA_PREFIX: &str = "preview:";

/// Base font definitions for the UI chrome (egui defaults).
pub fn setup_fonts() -> FontDefinitions {
    FontDefinitions::default()
}

/// Face bytes that `ttf-parser` accepted at the given collection index.
#[derive(Clone, PartialEq, Eq)]
pub struct LoadedFace {
    postscript_name: String,
    bytes: Vec<u8>,
    index: u32,
}

impl LoadedFace {
    /// `None` when the bytes do not parse as a font face.
    pub fn parse(postscript_name: impl Into<String>, bytes: Vec<u8>, index: u32) -> Option<Self> {
        let postscript_name = postscript_name.into();
        if let Err(e) = ttf_parser::Face::parse(&bytes, index) {
            tracing::warn!(font = %postscript_name, "unusable font data: {}", e);
            return None;
        }
        Some(Self {
            postscript_name,
            bytes,
            index,
        })
    }

    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }
}

impl fmt::Debug for LoadedFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFace")
            .field("postscript_name", &self.postscript_name)
            .field("bytes", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Read the face from disk, preferring the locally installed copy.
/// Blocking; called from the backend.
pub fn load_face(font: &FontDescriptor) -> Option<LoadedFace> {
    let Some(path) = font.source_path.as_ref() else {
        tracing::debug!(font = %font.postscript_name, "face has no local file; using UI font");
        return None;
    };
    match std::fs::read(path) {
        Ok(bytes) => LoadedFace::parse(font.postscript_name.clone(), bytes, font.face_index),
        Err(e) => {
            tracing::warn!(font = %font.postscript_name, path = %path.display(), "failed to read font file: {}", e);
            None
        }
    }
}

pub fn load_faces(fonts: &[FontDescriptor]) -> Vec<LoadedFace> {
    fonts.iter().filter_map(load_face).collect()
}

#[derive(Default)]
pub struct FontInstaller {
    definitions: FontDefinitions,
    /// Every postscript name requested from the backend, loaded or not
    requested: HashSet<String>,
    /// Batches sent to the backend and not yet installed
    pending_batches: usize,
    staged: HashSet<String>,
    ready: HashSet<String>,
}

impl FontInstaller {
    pub fn new() -> Self {
        Self {
            definitions: setup_fonts(),
            ..Default::default()
        }
    }

    /// Families registered in an earlier frame become usable.
    pub fn promote_staged(&mut self) {
        self.ready.extend(self.staged.drain());
    }

    pub fn has_pending(&self) -> bool {
        self.pending_batches > 0
    }

    pub fn has_staged(&self) -> bool {
        !self.staged.is_empty()
    }

    pub fn is_ready(&self, family: &str) -> bool {
        self.ready.contains(family)
    }

    /// Family to draw a card with: its own face when available, else the UI font.
    pub fn family_for(&self, postscript_name: &str) -> FontFamily {
        if self.is_ready(postscript_name) {
            FontFamily::Name(postscript_name.into())
        } else {
            FontFamily::Proportional
        }
    }

    /// Descriptors not asked for before; each is only ever requested once.
    /// A non-empty result counts as one pending batch until it is installed.
    pub fn take_unrequested(&mut self, fonts: &[FontDescriptor]) -> Vec<FontDescriptor> {
        let missing: Vec<_> = fonts
            .iter()
            .filter(|font| self.requested.insert(font.postscript_name.clone()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            self.pending_batches += 1;
        }
        missing
    }

    /// Register one batch of loaded faces and push the definitions to egui.
    /// Returns how many faces were added.
    pub fn install(&mut self, ctx: &egui::Context, faces: Vec<LoadedFace>) -> usize {
        self.pending_batches = self.pending_batches.saturating_sub(1);
        let added = self.register(faces);
        if added > 0 {
            ctx.set_fonts(self.definitions.clone());
        }
        added
    }

    fn register(&mut self, faces: Vec<LoadedFace>) -> usize {
        let mut added = 0;
        for face in faces {
            let name = face.postscript_name;
            if self.staged.contains(&name) || self.ready.contains(&name) {
                continue;
            }
            let key = format!("{}{}", FONT_DATA_PREFIX, name);

            let mut data = FontData::from_owned(face.bytes);
            data.index = face.index;
            self.definitions.font_data.insert(key.clone(), Arc::new(data));

            let mut family = vec![key];
            family.extend(FALLBACK_FONTS.iter().map(|f| f.to_string()));
            self.definitions
                .families
                .insert(FontFamily::Name(name.as_str().into()), family);

            self.staged.insert(name);
            added += 1;
        }
        added
    }
}
