use std::fmt;
use thiserror::Error as ThisError;

/// Whether a missing required field was expected as an attribute or as a child element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Attribute,
    Element,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Attribute => f.write_str("attribute"),
            FieldKind::Element => f.write_str("element"),
        }
    }
}

/// Errors raised while decoding an element tree into a `Registry`.
///
/// Decoding is fail-fast: the first error aborts the whole registry. Every
/// variant carries an `xpath` pointing at the offending node, including the
/// entity's name once it is known (e.g. `/registry/types/type[@name='VkFoo']`).
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum Error {
    #[error("{xpath}: missing required {kind} '{name}'")]
    MissingRequiredField {
        xpath: String,
        kind: FieldKind,
        name: String,
    },

    #[error("{xpath}: unrecognized value '{value}' for '{attribute}'")]
    UnrecognizedDiscriminant {
        xpath: String,
        attribute: String,
        value: String,
    },

    #[error("{xpath}: value '{text}' of '{attribute}' is not a valid base 10 or 16 integer")]
    MalformedValue {
        xpath: String,
        attribute: String,
        text: String,
        #[source]
        error: std::num::ParseIntError,
    },

    #[error("{xpath}: {desc}")]
    StructuralMismatch { xpath: String, desc: String },
}

impl Error {
    pub(crate) fn missing_attribute(xpath: &str, name: &str) -> Error {
        Error::MissingRequiredField {
            xpath: String::from(xpath),
            kind: FieldKind::Attribute,
            name: String::from(name),
        }
    }

    pub(crate) fn missing_element(xpath: &str, name: &str) -> Error {
        Error::MissingRequiredField {
            xpath: String::from(xpath),
            kind: FieldKind::Element,
            name: String::from(name),
        }
    }

    pub(crate) fn unrecognized(xpath: &str, attribute: &str, value: &str) -> Error {
        Error::UnrecognizedDiscriminant {
            xpath: String::from(xpath),
            attribute: String::from(attribute),
            value: String::from(value),
        }
    }

    /// Location of the node that failed to decode.
    pub fn xpath(&self) -> &str {
        match self {
            Error::MissingRequiredField { xpath, .. }
            | Error::UnrecognizedDiscriminant { xpath, .. }
            | Error::MalformedValue { xpath, .. }
            | Error::StructuralMismatch { xpath, .. } => xpath,
        }
    }
}

/// Errors from which reading or writing a registry document cannot recover.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum FatalError {
    #[error("document has no <registry> root element")]
    MissingRegistryElement,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("malformed XML: {0}")]
    XmlError(#[from] xml::reader::Error),

    #[error("failed to write XML: {0}")]
    XmlWriteError(#[from] xml::writer::Error),

    #[error(transparent)]
    Decode(#[from] Error),
}
