//! Local font enumeration.
//!
//! The widget never touches the system font catalogue directly: it is handed a
//! [`FontSource`] so tests (and other hosts) can substitute their own list.

use std::path::PathBuf;

use crate::error::FontEnumerationError;

/// One installed font face, as reported by a [`FontSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Human readable name, e.g. "Georgia Bold Italic".
    pub full_name: String,
    /// Identifier used as the family token in a style declaration.
    pub postscript_name: String,
    pub family: String,
    pub style: String,
    /// Where the face lives on disk, when it is file backed.
    pub source_path: Option<PathBuf>,
    /// Face index inside a collection file (0 for single-face files).
    pub face_index: u32,
}

impl FontDescriptor {
    /// A descriptor carrying only the two names the gallery needs.
    pub fn new(full_name: impl Into<String>, postscript_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        Self {
            family: full_name.clone(),
            full_name,
            postscript_name: postscript_name.into(),
            style: "Regular".to_string(),
            source_path: None,
            face_index: 0,
        }
    }
}

/// Host capability that lists locally installed fonts.
///
/// Implementations may block; the backend runs them off the UI thread.
pub trait FontSource: Send + Sync {
    fn query_local_fonts(&self) -> Result<Vec<FontDescriptor>, FontEnumerationError>;
}

/// Fonts installed on this machine, discovered with `fontdb`.
pub struct SystemFontSource {
    allow_access: bool,
}

impl SystemFontSource {
    pub fn new(allow_access: bool) -> Self {
        Self { allow_access }
    }
}

impl FontSource for SystemFontSource {
    fn query_local_fonts(&self) -> Result<Vec<FontDescriptor>, FontEnumerationError> {
        if !self.allow_access {
            return Err(FontEnumerationError::not_allowed(
                "Permission to access local fonts was denied",
            ));
        }

        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system font database");

        // Database order is discovery order; no sorting here.
        Ok(db.faces().map(describe_face).collect())
    }
}

fn describe_face(face: &fontdb::FaceInfo) -> FontDescriptor {
    let family = face
        .families
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| face.post_script_name.clone());
    let style = style_name(face.weight, face.style);
    let full_name = if style == "Regular" {
        family.clone()
    } else {
        format!("{} {}", family, style)
    };
    let source_path = match &face.source {
        fontdb::Source::File(path) => Some(path.clone()),
        fontdb::Source::SharedFile(path, _) => Some(path.clone()),
        _ => None,
    };

    FontDescriptor {
        full_name,
        postscript_name: face.post_script_name.clone(),
        family,
        style,
        source_path,
        face_index: face.index,
    }
}

/// Human readable style suffix, "Regular" for the plain upright 400 face.
fn style_name(weight: fontdb::Weight, style: fontdb::Style) -> String {
    let weight_name = match weight.0 {
        0..=149 => Some("Thin"),
        150..=249 => Some("ExtraLight"),
        250..=349 => Some("Light"),
        350..=449 => None,
        450..=549 => Some("Medium"),
        550..=649 => Some("SemiBold"),
        650..=749 => Some("Bold"),
        750..=849 => Some("ExtraBold"),
        _ => Some("Black"),
    };
    let slant = match style {
        fontdb::Style::Normal => None,
        fontdb::Style::Italic => Some("Italic"),
        fontdb::Style::Oblique => Some("Oblique"),
    };

    match (weight_name, slant) {
        (None, None) => "Regular".to_string(),
        (Some(w), None) => w.to_string(),
        (None, Some(s)) => s.to_string(),
        (Some(w), Some(s)) => format!("{} {}", w, s),
    }
}
