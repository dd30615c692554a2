//! Error types for the cube trainer value layer
//!
//! Every codec failure is one of a small set of typed errors. They surface
//! synchronously to the caller (the persistence boundary) and are never
//! retried or recovered internally.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::fmt;
use thiserror::Error;

/// Result type alias for codec and value operations
pub type Result<T> = std::result::Result<T, Error>;

/// What kind of tag failed a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// A part type name such as `Edge`
    PartType,
    /// A part name within a part type such as `UF`
    Part,
    /// A tagged union variant such as `LetterPair`
    Variant,
    /// An obsolete marker token in a stored string
    LegacyMarker,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::PartType => write!(f, "part type"),
            TagKind::Part => write!(f, "part"),
            TagKind::Variant => write!(f, "variant tag"),
            TagKind::LegacyMarker => write!(f, "legacy marker"),
        }
    }
}

/// Error types for the value codec layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value handed to a codec is not one of the types the codec owns
    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// Type the codec owns
        expected: &'static str,
        /// Type that was actually passed
        found: &'static str,
    },

    /// A tag or token is absent from its lookup table
    #[error("Unknown {kind}: {tag:?}")]
    UnknownTag {
        /// Which table was consulted
        kind: TagKind,
        /// The offending token
        tag: String,
    },

    /// Encoding would embed a reserved separator inside a payload segment
    #[error("Ambiguous encoding: segment {segment:?} contains a reserved separator")]
    AmbiguousEncoding {
        /// The segment that contains the separator
        segment: String,
    },

    /// A payload does not parse into a valid instance
    #[error("Malformed {what} payload: {reason}")]
    MalformedPayload {
        /// What was being parsed
        what: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// A codec name was registered twice
    #[error("Codec already registered: {0}")]
    DuplicateCodec(String),

    /// No codec is registered under the given name
    #[error("No codec registered under: {0}")]
    UnknownCodec(String),

    /// Two variants of a tagged union share a tag
    #[error("Duplicate variant tag: {0}")]
    DuplicateTag(String),

    /// Codec configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a `MalformedPayload` error
    pub fn malformed(what: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedPayload {
            what,
            reason: reason.into(),
        }
    }

    /// Build an `UnknownTag` error
    pub fn unknown_tag(kind: TagKind, tag: impl Into<String>) -> Self {
        Error::UnknownTag {
            kind,
            tag: tag.into(),
        }
    }

    /// Build an `AmbiguousEncoding` error
    pub fn ambiguous(segment: impl Into<String>) -> Self {
        Error::AmbiguousEncoding {
            segment: segment.into(),
        }
    }

    /// Build a `TypeMismatch` error
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }
}
