//! Error types surfaced by the font source and the component registry.

use thiserror::Error;

/// Category of a failed local-font query, named after the host error names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontErrorKind {
    /// The user (or settings) refused access to local fonts.
    NotAllowed,
    /// The host refused access for security reasons.
    Security,
    /// Local font enumeration is not available on this host.
    NotSupported,
    /// Anything else that went wrong while querying.
    Unknown,
}

impl FontErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            FontErrorKind::NotAllowed => "NotAllowedError",
            FontErrorKind::Security => "SecurityError",
            FontErrorKind::NotSupported => "NotSupportedError",
            FontErrorKind::Unknown => "UnknownError",
        }
    }
}

/// The one error the widget can encounter: the local font query failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} {message}", .kind.name())]
pub struct FontEnumerationError {
    pub kind: FontErrorKind,
    pub message: String,
}

impl FontEnumerationError {
    pub fn new(kind: FontErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::new(FontErrorKind::NotAllowed, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(FontErrorKind::Unknown, message)
    }

    /// Error category as reported on the diagnostic channel.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a component is already defined for tag <{0}>")]
    AlreadyDefined(String),
    #[error("no component is defined for tag <{0}>")]
    Undefined(String),
}
