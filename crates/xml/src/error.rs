//! Parse errors surfaced by the tree builder.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XmlErrorKind {
    /// Malformed XML syntax reported by the tokenizer.
    Tokenization,
    /// Well-formed XML that failed a schema/DTD check.
    Validation,
}

/// Error reported by the event source.
///
/// The builder treats both kinds identically: the first one recorded wins and
/// every later event is dropped. `position` is a byte offset into whatever
/// input the tokenizer was scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlError {
    pub kind: XmlErrorKind,
    pub message: String,
    pub position: usize,
}

impl XmlError {
    pub fn tokenization(message: impl Into<String>, position: usize) -> Self {
        Self {
            kind: XmlErrorKind::Tokenization,
            message: message.into(),
            position,
        }
    }

    pub fn validation(message: impl Into<String>, position: usize) -> Self {
        Self {
            kind: XmlErrorKind::Validation,
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            XmlErrorKind::Tokenization => "tokenization error",
            XmlErrorKind::Validation => "validation error",
        };
        write!(f, "{kind} at byte {}: {}", self.position, self.message)
    }
}

impl std::error::Error for XmlError {}
