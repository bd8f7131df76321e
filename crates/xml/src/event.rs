//! Structural event model at the tokenizer boundary.

use crate::error::XmlError;

/// One structural event from an XML tokenizer.
///
/// The builder consumes these in document order and never inspects raw XML
/// syntax itself; it assumes a conformant event source. Attribute order
/// inside `StartElement` is whatever the producing tokenizer yields and is
/// preserved as received, duplicates included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlEvent {
    StartDocument,
    StartElement {
        name: String,
        attributes: Vec<(String, String)>,
    },
    /// Character data between tags. Discarded by the builder: mixed text
    /// content is not modeled in the tree.
    Characters(String),
    EndElement {
        name: String,
    },
    /// Tokenization or validation failure; `XmlErrorKind` distinguishes them.
    Error(XmlError),
    EndDocument,
}
